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

//! Vertex and index buffer objects.

use crate::api::{BufferId, BufferTarget, BufferUsage};
use crate::traits::RenderDevice;

/// A vertex attribute buffer.
#[derive(Debug, Default)]
pub struct VertexBuffer {
    id: Option<BufferId>,
}

impl VertexBuffer {
    /// Creates a vertex buffer with no device allocation yet.
    pub fn new() -> Self {
        VertexBuffer::default()
    }

    /// Allocates `byte_size` bytes of undefined content.
    pub fn allocate(&mut self, device: &dyn RenderDevice, byte_size: usize) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::Array, id);
        device.buffer_allocate(BufferTarget::Array, byte_size, BufferUsage::StaticDraw);
    }

    /// Uploads `data`, replacing the buffer's allocation.
    pub fn upload_f32(&mut self, device: &dyn RenderDevice, data: &[f32]) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::Array, id);
        device.buffer_data(
            BufferTarget::Array,
            bytemuck::cast_slice(data),
            BufferUsage::StaticDraw,
        );
    }

    /// Uploads `data` into the existing allocation at `byte_offset`.
    pub fn upload_sub_f32(&mut self, device: &dyn RenderDevice, data: &[f32], byte_offset: usize) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::Array, id);
        device.buffer_sub_data(BufferTarget::Array, byte_offset, bytemuck::cast_slice(data));
    }

    /// Binds the buffer to the vertex-attribute target.
    pub fn bind(&self, device: &dyn RenderDevice) {
        if let Some(id) = self.id {
            device.bind_buffer(BufferTarget::Array, id);
        }
    }

    /// Unbinds the vertex-attribute target.
    pub fn unbind(&self, device: &dyn RenderDevice) {
        device.unbind_buffer(BufferTarget::Array);
    }

    /// Deletes the buffer object.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if let Some(id) = self.id.take() {
            device.delete_buffer(id);
        }
    }

    fn ensure(&mut self, device: &dyn RenderDevice) -> BufferId {
        match self.id {
            Some(id) => id,
            None => {
                let id = device.create_buffer();
                self.id = Some(id);
                id
            }
        }
    }
}

/// An element index buffer.
#[derive(Debug, Default)]
pub struct IndexBuffer {
    id: Option<BufferId>,
}

impl IndexBuffer {
    /// Creates an index buffer with no device allocation yet.
    pub fn new() -> Self {
        IndexBuffer::default()
    }

    /// Uploads 8-bit indices.
    pub fn upload_u8(&mut self, device: &dyn RenderDevice, data: &[u8]) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::ElementArray, id);
        device.buffer_data(BufferTarget::ElementArray, data, BufferUsage::StaticDraw);
    }

    /// Uploads 16-bit indices.
    pub fn upload_u16(&mut self, device: &dyn RenderDevice, data: &[u16]) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::ElementArray, id);
        device.buffer_data(
            BufferTarget::ElementArray,
            bytemuck::cast_slice(data),
            BufferUsage::StaticDraw,
        );
    }

    /// Uploads 32-bit indices.
    pub fn upload_u32(&mut self, device: &dyn RenderDevice, data: &[u32]) {
        let id = self.ensure(device);
        device.bind_buffer(BufferTarget::ElementArray, id);
        device.buffer_data(
            BufferTarget::ElementArray,
            bytemuck::cast_slice(data),
            BufferUsage::StaticDraw,
        );
    }

    /// Binds the buffer to the element-index target.
    pub fn bind(&self, device: &dyn RenderDevice) {
        if let Some(id) = self.id {
            device.bind_buffer(BufferTarget::ElementArray, id);
        }
    }

    /// Unbinds the element-index target.
    pub fn unbind(&self, device: &dyn RenderDevice) {
        device.unbind_buffer(BufferTarget::ElementArray);
    }

    /// Deletes the buffer object.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if let Some(id) = self.id.take() {
            device.delete_buffer(id);
        }
    }

    fn ensure(&mut self, device: &dyn RenderDevice) -> BufferId {
        match self.id {
            Some(id) => id,
            None => {
                let id = device.create_buffer();
                self.id = Some(id);
                id
            }
        }
    }
}
