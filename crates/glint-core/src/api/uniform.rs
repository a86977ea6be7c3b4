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

//! Uniform descriptors and the closed value type uploads are expressed in.

use crate::api::handle::UniformLocation;
use crate::error::UniformError;
use std::collections::HashMap;

/// The element type of an active uniform, as reported by the device.
///
/// `Unsupported` covers device types outside the upload dispatch table
/// (booleans, integer vectors, double matrices, ...). Descriptors for such
/// uniforms are still built so their presence is observable, but uploads
/// to them are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformKind {
    /// A 32-bit signed integer (or array thereof).
    Int,
    /// A 32-bit unsigned integer (or array thereof).
    UInt,
    /// A 32-bit float (or array thereof).
    Float,
    /// A two-component float vector (or array thereof).
    FloatVec2,
    /// A three-component float vector (or array thereof).
    FloatVec3,
    /// A four-component float vector (or array thereof).
    FloatVec4,
    /// A 3x3 float matrix (or array thereof).
    FloatMat3,
    /// A 4x4 float matrix (or array thereof).
    FloatMat4,
    /// A 2D texture sampler. Holds a zero-based texture unit index.
    Sampler2d,
    /// A cube-map texture sampler. Holds a zero-based texture unit index.
    SamplerCube,
    /// A device type with no upload path in this crate.
    Unsupported,
}

/// A value destined for a shader uniform.
///
/// This is the closed union the binder matches exhaustively against a
/// descriptor's [`UniformKind`]; a variant/kind disagreement is a typed
/// error, never a reinterpretation. Vector and matrix variants hold one
/// fixed-size element per array slot, so element arity is checked by the
/// compiler and only the array length is validated at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// A single `i32`. Also the form sampler units are supplied in.
    Int(i32),
    /// A single `u32`.
    UInt(u32),
    /// A single `f32`.
    Float(f32),
    /// An array of `i32`.
    IntArray(Vec<i32>),
    /// An array of `u32`.
    UIntArray(Vec<u32>),
    /// An array of `f32`.
    FloatArray(Vec<f32>),
    /// An array of two-component float vectors.
    FloatVec2(Vec<[f32; 2]>),
    /// An array of three-component float vectors.
    FloatVec3(Vec<[f32; 3]>),
    /// An array of four-component float vectors.
    FloatVec4(Vec<[f32; 4]>),
    /// An array of column-major 3x3 float matrices.
    Mat3(Vec<[f32; 9]>),
    /// An array of column-major 4x4 float matrices.
    Mat4(Vec<[f32; 16]>),
}

impl UniformValue {
    /// The variant's name, used in type-mismatch diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            UniformValue::Int(_) => "Int",
            UniformValue::UInt(_) => "UInt",
            UniformValue::Float(_) => "Float",
            UniformValue::IntArray(_) => "IntArray",
            UniformValue::UIntArray(_) => "UIntArray",
            UniformValue::FloatArray(_) => "FloatArray",
            UniformValue::FloatVec2(_) => "FloatVec2",
            UniformValue::FloatVec3(_) => "FloatVec3",
            UniformValue::FloatVec4(_) => "FloatVec4",
            UniformValue::Mat3(_) => "Mat3",
            UniformValue::Mat4(_) => "Mat4",
        }
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<u32> for UniformValue {
    fn from(value: u32) -> Self {
        UniformValue::UInt(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<Vec<i32>> for UniformValue {
    fn from(values: Vec<i32>) -> Self {
        UniformValue::IntArray(values)
    }
}

impl From<Vec<u32>> for UniformValue {
    fn from(values: Vec<u32>) -> Self {
        UniformValue::UIntArray(values)
    }
}

impl From<Vec<f32>> for UniformValue {
    fn from(values: Vec<f32>) -> Self {
        UniformValue::FloatArray(values)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(value: [f32; 2]) -> Self {
        UniformValue::FloatVec2(vec![value])
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        UniformValue::FloatVec3(vec![value])
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        UniformValue::FloatVec4(vec![value])
    }
}

impl From<[f32; 9]> for UniformValue {
    fn from(value: [f32; 9]) -> Self {
        UniformValue::Mat3(vec![value])
    }
}

impl From<[f32; 16]> for UniformValue {
    fn from(value: [f32; 16]) -> Self {
        UniformValue::Mat4(vec![value])
    }
}

/// The reflected attributes of one active standalone uniform.
///
/// Built once per successful program link; immutable afterwards. Uniforms
/// living inside a uniform block have no standalone descriptor — their
/// offsets appear in the owning [`UniformBlockDescriptor`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDescriptor {
    /// The uniform's name, unique within its program.
    pub name: String,
    /// The element type the device reported for the uniform.
    pub kind: UniformKind,
    /// The declared array length; `1` for non-array uniforms.
    pub count: i32,
    /// The binding slot resolved by name after linking.
    pub location: UniformLocation,
}

/// The reflected attributes of one active uniform block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBlockDescriptor {
    /// The block's name, unique within its program.
    pub name: String,
    /// The block's index within the program.
    pub block_index: u32,
    /// The block's total buffer size in bytes, unaligned.
    pub byte_size: i32,
    /// Byte offset of each member within the block, keyed by member name.
    pub member_offsets: HashMap<String, i32>,
    /// The device-wide uniform-buffer offset alignment, in bytes.
    pub alignment: i32,
}

impl UniformBlockDescriptor {
    /// The smallest multiple of the device alignment that holds the block.
    ///
    /// When `byte_size` is already a multiple of the alignment this is
    /// `byte_size` itself, not a full alignment unit more.
    pub fn aligned_size(&self) -> i32 {
        debug_assert!(self.alignment > 0);
        ((self.byte_size + self.alignment - 1) / self.alignment) * self.alignment
    }

    /// The block's raw buffer size, in bytes.
    pub fn unaligned_size(&self) -> i32 {
        self.byte_size
    }

    /// The byte offset of `member` within the block.
    pub fn member_offset(&self, member: &str) -> Result<i32, UniformError> {
        self.member_offsets
            .get(member)
            .copied()
            .ok_or_else(|| UniformError::UnknownBlockMember {
                block: self.name.clone(),
                member: member.to_string(),
            })
    }
}
