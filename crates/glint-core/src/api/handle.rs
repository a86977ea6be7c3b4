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

//! Opaque, typed handles for device objects.
//!
//! The device hands these out and consumes them back; nothing in this
//! crate ever interprets the inner value. Identity comparison on a handle
//! is identity comparison on the underlying device object.

/// An opaque handle representing a linked shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(pub u32);

/// An opaque handle representing an individual shader object (one stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderId(pub u32);

/// An opaque handle representing a device buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u32);

/// An opaque handle representing a device texture object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// An opaque handle representing a framebuffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FramebufferId(pub u32);

/// An opaque handle representing a vertex array object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexArrayId(pub u32);

/// A uniform's binding slot within its program.
///
/// The device reports `-1` for uniforms that are declared but optimized
/// away; such locations are carried through unchanged and uploads to them
/// are ignored by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniformLocation(pub i32);

impl UniformLocation {
    /// The location the device reports for inactive uniforms.
    pub const INACTIVE: UniformLocation = UniformLocation(-1);

    /// Returns `true` if the uniform is active in the linked program.
    pub fn is_active(&self) -> bool {
        self.0 >= 0
    }
}
