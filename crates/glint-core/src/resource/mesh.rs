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

//! A vertex-array-backed mesh, the stock [`Drawable`].

use crate::api::{DrawCall, VertexArrayId, VertexAttribute};
use crate::resource::{IndexBuffer, VertexBuffer};
use crate::traits::{Drawable, RenderDevice};
use std::collections::{BTreeMap, BTreeSet};

/// A mesh: one vertex buffer, an optional index buffer, and the vertex
/// array object tying their attribute layout together.
///
/// Configure buffers, attributes and the draw call, then
/// [`upload`](Mesh::upload) to build the device-side vertex array.
/// Afterwards the mesh draws through the [`Drawable`] capability a
/// command expects.
#[derive(Debug, Default)]
pub struct Mesh {
    id: Option<VertexArrayId>,
    vertex_buffer: Option<VertexBuffer>,
    index_buffer: Option<IndexBuffer>,
    attributes: BTreeMap<u32, VertexAttribute>,
    instanced: BTreeSet<u32>,
    draw_call: Option<DrawCall>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Sets the mesh's vertex buffer.
    pub fn set_vertex_buffer(&mut self, buffer: VertexBuffer) {
        self.vertex_buffer = Some(buffer);
    }

    /// Sets the mesh's index buffer.
    pub fn set_index_buffer(&mut self, buffer: IndexBuffer) {
        self.index_buffer = Some(buffer);
    }

    /// Describes the vertex attribute at `index`.
    pub fn set_attribute(&mut self, index: u32, attribute: VertexAttribute) {
        self.attributes.insert(index, attribute);
    }

    /// Flags the given attribute indices as advancing per instance.
    pub fn set_instanced_attributes(&mut self, indices: &[u32]) {
        self.instanced.extend(indices.iter().copied());
    }

    /// Sets the draw submission the mesh issues.
    ///
    /// A mesh with no draw call set draws nothing.
    pub fn set_draw_call(&mut self, draw_call: DrawCall) {
        self.draw_call = Some(draw_call);
    }

    /// Builds the device-side vertex array from the configured layout.
    ///
    /// Binds the vertex buffer, records every attribute pointer (with an
    /// instance divisor for instanced attributes) and the index buffer
    /// into a fresh vertex array object.
    pub fn upload(&mut self, device: &dyn RenderDevice) {
        let id = device.create_vertex_array();
        device.bind_vertex_array(id);
        if let Some(buffer) = &self.vertex_buffer {
            buffer.bind(device);
        }
        for (&index, attribute) in &self.attributes {
            device.enable_vertex_attribute(index);
            device.vertex_attribute_pointer(index, attribute);
            if self.instanced.contains(&index) {
                device.set_attribute_divisor(index, 1);
            }
        }
        if let Some(buffer) = &self.index_buffer {
            buffer.bind(device);
        }
        device.unbind_vertex_array();
        self.id = Some(id);
    }

    /// Deletes the vertex array object and destroys the owned buffers.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if let Some(id) = self.id.take() {
            device.delete_vertex_array(id);
        }
        if let Some(mut buffer) = self.vertex_buffer.take() {
            buffer.destroy(device);
        }
        if let Some(mut buffer) = self.index_buffer.take() {
            buffer.destroy(device);
        }
    }
}

impl Drawable for Mesh {
    fn bind(&self, device: &dyn RenderDevice) {
        if let Some(id) = self.id {
            device.bind_vertex_array(id);
        }
    }

    fn draw(&self, device: &dyn RenderDevice) {
        match self.draw_call {
            Some(DrawCall::Arrays { mode, first, count }) => {
                device.draw_arrays(mode, first, count);
            }
            Some(DrawCall::ArraysInstanced {
                mode,
                first,
                count,
                instances,
            }) => {
                device.draw_arrays_instanced(mode, first, count, instances);
            }
            Some(DrawCall::Elements {
                mode,
                count,
                kind,
                byte_offset,
            }) => {
                device.draw_elements(mode, count, kind, byte_offset);
            }
            Some(DrawCall::ElementsInstanced {
                mode,
                count,
                kind,
                byte_offset,
                instances,
            }) => {
                device.draw_elements_instanced(mode, count, kind, byte_offset, instances);
            }
            None => {}
        }
    }

    fn unbind(&self, device: &dyn RenderDevice) {
        device.unbind_vertex_array();
    }
}
