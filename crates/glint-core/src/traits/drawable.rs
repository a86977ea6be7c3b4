// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Capabilities a command requires of the resources it bundles.

use crate::traits::render_device::RenderDevice;
use std::fmt::Debug;

/// Something a command can draw.
///
/// A command executes its drawable as `bind`, `draw`, `unbind`, against a
/// pipeline the owning technique has already configured.
pub trait Drawable: Debug {
    /// Binds the drawable's vertex state.
    fn bind(&self, device: &dyn RenderDevice);

    /// Issues the draw.
    fn draw(&self, device: &dyn RenderDevice);

    /// Unbinds the drawable's vertex state.
    fn unbind(&self, device: &dyn RenderDevice);
}

/// Something a command can bind to a texture unit.
pub trait TextureBind: Debug {
    /// Binds the texture on the zero-based texture unit `unit`.
    fn bind(&self, device: &dyn RenderDevice, unit: u32);
}
