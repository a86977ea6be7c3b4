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

//! Buffer, vertex-layout and draw-submission types.

/// The binding point a buffer object is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Vertex attribute data.
    Array,
    /// Index data for element draws.
    ElementArray,
}

/// A hint describing how buffer contents will be written and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferUsage {
    /// Written once, drawn many times.
    #[default]
    StaticDraw,
    /// Rewritten frequently, drawn many times.
    DynamicDraw,
    /// Rewritten every frame, drawn a few times.
    StreamDraw,
}

/// The component type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// 32-bit floats.
    F32,
    /// 8-bit unsigned integers.
    U8,
    /// 16-bit unsigned integers.
    U16,
    /// 32-bit unsigned integers.
    U32,
    /// 8-bit signed integers.
    I8,
    /// 16-bit signed integers.
    I16,
    /// 32-bit signed integers.
    I32,
}

/// The layout of one vertex attribute within a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Number of components per vertex, `1..=4`.
    pub size: i32,
    /// The component type.
    pub kind: AttributeKind,
    /// Whether integer components are normalized to `[0, 1]` / `[-1, 1]`.
    pub normalized: bool,
    /// The byte distance between consecutive vertices.
    pub byte_stride: i32,
    /// The byte offset of this attribute from the start of the vertex.
    pub byte_offset: usize,
}

/// How vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Isolated points.
    Points,
    /// Isolated lines, two vertices each.
    Lines,
    /// A connected line strip.
    LineStrip,
    /// A closed line loop.
    LineLoop,
    /// Isolated triangles, three vertices each.
    Triangles,
    /// A connected triangle strip.
    TriangleStrip,
    /// A triangle fan around the first vertex.
    TriangleFan,
}

/// The integer width of index-buffer elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// 8-bit indices.
    U8,
    /// 16-bit indices.
    U16,
    /// 32-bit indices.
    U32,
}

/// A complete draw submission for a mesh.
///
/// Replaces a bag of mode/first/count/type/offset/instance fields with one
/// value that can only describe a well-formed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawCall {
    /// Draw consecutive vertices from the bound vertex buffer.
    Arrays {
        /// Primitive assembly mode.
        mode: DrawMode,
        /// Index of the first vertex.
        first: i32,
        /// Number of vertices.
        count: i32,
    },
    /// Draw consecutive vertices repeatedly for instanced attributes.
    ArraysInstanced {
        /// Primitive assembly mode.
        mode: DrawMode,
        /// Index of the first vertex.
        first: i32,
        /// Number of vertices per instance.
        count: i32,
        /// Number of instances.
        instances: i32,
    },
    /// Draw vertices selected by the bound index buffer.
    Elements {
        /// Primitive assembly mode.
        mode: DrawMode,
        /// Number of indices.
        count: i32,
        /// Width of each index.
        kind: IndexKind,
        /// Byte offset of the first index within the index buffer.
        byte_offset: usize,
    },
    /// Draw indexed vertices repeatedly for instanced attributes.
    ElementsInstanced {
        /// Primitive assembly mode.
        mode: DrawMode,
        /// Number of indices per instance.
        count: i32,
        /// Width of each index.
        kind: IndexKind,
        /// Byte offset of the first index within the index buffer.
        byte_offset: usize,
        /// Number of instances.
        instances: i32,
    },
}
