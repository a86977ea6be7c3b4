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

//! A deferred, reusable bundle of per-draw bindings.

use crate::api::UniformValue;
use crate::error::UniformError;
use crate::resource::ShaderProgram;
use crate::traits::{Drawable, RenderDevice, TextureBind};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A render command: uniform values, texture bindings, and one drawable.
///
/// A command is a pure builder — it touches the device only when a
/// technique executes it, and it carries no technique state of its own,
/// so the same command can be replayed under different techniques.
/// Ordered maps keep execution deterministic: textures bind in ascending
/// unit order and uniforms upload in name order, independent of insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Command {
    uniforms: BTreeMap<String, UniformValue>,
    textures: BTreeMap<u32, Arc<dyn TextureBind>>,
    drawable: Option<Arc<dyn Drawable>>,
}

impl Command {
    /// Creates an empty command.
    pub fn new() -> Self {
        Command::default()
    }

    /// Sets a uniform to be uploaded when the command executes.
    ///
    /// Setting the same name again overwrites the previous value.
    pub fn uniform(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        self.uniforms.insert(name.into(), value.into());
    }

    /// Sets a texture to be bound on the zero-based `unit`.
    ///
    /// Setting the same unit again overwrites the previous texture.
    pub fn texture(&mut self, unit: u32, texture: Arc<dyn TextureBind>) {
        self.textures.insert(unit, texture);
    }

    /// Sets the drawable the command renders.
    ///
    /// A command holds at most one; setting again replaces it.
    pub fn drawable(&mut self, drawable: Arc<dyn Drawable>) {
        self.drawable = Some(drawable);
    }

    /// Executes the command against an already-configured pipeline.
    ///
    /// Binds each texture to its unit, uploads each uniform through
    /// `shader`'s descriptors, then runs the drawable's
    /// bind/draw/unbind. A command without a drawable sets its textures
    /// and uniforms but draws nothing; that is deliberate and unreported.
    pub fn execute(
        &self,
        device: &dyn RenderDevice,
        shader: &ShaderProgram,
    ) -> Result<(), UniformError> {
        for (&unit, texture) in &self.textures {
            texture.bind(device, unit);
        }
        for (name, value) in &self.uniforms {
            shader.set_uniform(device, name, value)?;
        }
        if let Some(drawable) = &self.drawable {
            drawable.bind(device);
            drawable.draw(device);
            drawable.unbind(device);
        }
        Ok(())
    }
}
