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

//! Mappings between core enums and their GL counterparts.

use gl::types::GLenum;
use glint_core::api::*;

/// Converts a core enum into the GL value the driver expects.
pub(crate) trait IntoGl {
    /// The GL-side representation.
    type Output;

    /// Performs the conversion.
    fn into_gl(self) -> Self::Output;
}

impl IntoGl for Capability {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            Capability::Blend => gl::BLEND,
            Capability::CullFace => gl::CULL_FACE,
            Capability::DepthTest => gl::DEPTH_TEST,
            Capability::Dither => gl::DITHER,
            Capability::PolygonOffsetFill => gl::POLYGON_OFFSET_FILL,
            Capability::SampleAlphaToCoverage => gl::SAMPLE_ALPHA_TO_COVERAGE,
            Capability::SampleCoverage => gl::SAMPLE_COVERAGE,
            Capability::ScissorTest => gl::SCISSOR_TEST,
            Capability::StencilTest => gl::STENCIL_TEST,
            Capability::Multisample => gl::MULTISAMPLE,
            Capability::ProgramPointSize => gl::PROGRAM_POINT_SIZE,
        }
    }
}

impl IntoGl for BlendFactor {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            BlendFactor::Zero => gl::ZERO,
            BlendFactor::One => gl::ONE,
            BlendFactor::SrcColor => gl::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => gl::ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => gl::DST_COLOR,
            BlendFactor::OneMinusDstColor => gl::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => gl::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => gl::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => gl::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => gl::ONE_MINUS_DST_ALPHA,
            BlendFactor::ConstantColor => gl::CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => gl::ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::ConstantAlpha => gl::CONSTANT_ALPHA,
            BlendFactor::OneMinusConstantAlpha => gl::ONE_MINUS_CONSTANT_ALPHA,
            BlendFactor::SrcAlphaSaturate => gl::SRC_ALPHA_SATURATE,
        }
    }
}

impl IntoGl for CullMode {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            CullMode::Front => gl::FRONT,
            CullMode::Back => gl::BACK,
            CullMode::FrontAndBack => gl::FRONT_AND_BACK,
        }
    }
}

impl IntoGl for CompareFunction {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            CompareFunction::Never => gl::NEVER,
            CompareFunction::Less => gl::LESS,
            CompareFunction::Equal => gl::EQUAL,
            CompareFunction::LessEqual => gl::LEQUAL,
            CompareFunction::Greater => gl::GREATER,
            CompareFunction::NotEqual => gl::NOTEQUAL,
            CompareFunction::GreaterEqual => gl::GEQUAL,
            CompareFunction::Always => gl::ALWAYS,
        }
    }
}

impl IntoGl for FramebufferTarget {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            FramebufferTarget::Both => gl::FRAMEBUFFER,
            FramebufferTarget::Draw => gl::DRAW_FRAMEBUFFER,
            FramebufferTarget::Read => gl::READ_FRAMEBUFFER,
        }
    }
}

impl IntoGl for Attachment {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            Attachment::Color(index) => gl::COLOR_ATTACHMENT0 + index,
            Attachment::Depth => gl::DEPTH_ATTACHMENT,
            Attachment::Stencil => gl::STENCIL_ATTACHMENT,
            Attachment::DepthStencil => gl::DEPTH_STENCIL_ATTACHMENT,
        }
    }
}

impl IntoGl for ShaderStage {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
        }
    }
}

impl IntoGl for BufferTarget {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

impl IntoGl for BufferUsage {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            BufferUsage::StaticDraw => gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => gl::DYNAMIC_DRAW,
            BufferUsage::StreamDraw => gl::STREAM_DRAW,
        }
    }
}

impl IntoGl for TextureFilter {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            TextureFilter::Nearest => gl::NEAREST,
            TextureFilter::Linear => gl::LINEAR,
            TextureFilter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
            TextureFilter::LinearMipmapNearest => gl::LINEAR_MIPMAP_NEAREST,
            TextureFilter::NearestMipmapLinear => gl::NEAREST_MIPMAP_LINEAR,
            TextureFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
        }
    }
}

impl IntoGl for TextureWrap {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT,
            TextureWrap::ClampToBorder => gl::CLAMP_TO_BORDER,
        }
    }
}

impl IntoGl for AttributeKind {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            AttributeKind::F32 => gl::FLOAT,
            AttributeKind::U8 => gl::UNSIGNED_BYTE,
            AttributeKind::U16 => gl::UNSIGNED_SHORT,
            AttributeKind::U32 => gl::UNSIGNED_INT,
            AttributeKind::I8 => gl::BYTE,
            AttributeKind::I16 => gl::SHORT,
            AttributeKind::I32 => gl::INT,
        }
    }
}

impl IntoGl for DrawMode {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            DrawMode::Points => gl::POINTS,
            DrawMode::Lines => gl::LINES,
            DrawMode::LineStrip => gl::LINE_STRIP,
            DrawMode::LineLoop => gl::LINE_LOOP,
            DrawMode::Triangles => gl::TRIANGLES,
            DrawMode::TriangleStrip => gl::TRIANGLE_STRIP,
            DrawMode::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

impl IntoGl for IndexKind {
    type Output = GLenum;

    fn into_gl(self) -> GLenum {
        match self {
            IndexKind::U8 => gl::UNSIGNED_BYTE,
            IndexKind::U16 => gl::UNSIGNED_SHORT,
            IndexKind::U32 => gl::UNSIGNED_INT,
        }
    }
}

/// Maps a device-reported uniform type enum onto the closed core kind.
///
/// Anything outside the upload dispatch table maps to `Unsupported`; the
/// binder turns uploads to such uniforms into typed errors.
pub(crate) fn uniform_kind_from_gl(raw: GLenum) -> UniformKind {
    match raw {
        gl::INT => UniformKind::Int,
        gl::UNSIGNED_INT => UniformKind::UInt,
        gl::FLOAT => UniformKind::Float,
        gl::FLOAT_VEC2 => UniformKind::FloatVec2,
        gl::FLOAT_VEC3 => UniformKind::FloatVec3,
        gl::FLOAT_VEC4 => UniformKind::FloatVec4,
        gl::FLOAT_MAT3 => UniformKind::FloatMat3,
        gl::FLOAT_MAT4 => UniformKind::FloatMat4,
        gl::SAMPLER_2D => UniformKind::Sampler2d,
        gl::SAMPLER_CUBE => UniformKind::SamplerCube,
        _ => UniformKind::Unsupported,
    }
}

/// Maps a framebuffer completeness enum onto the typed core status.
pub(crate) fn framebuffer_status_from_gl(raw: GLenum) -> FramebufferStatus {
    match raw {
        gl::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
        gl::FRAMEBUFFER_UNDEFINED => FramebufferStatus::Undefined,
        gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
        gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => FramebufferStatus::MissingAttachment,
        gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
        gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => FramebufferStatus::IncompleteReadBuffer,
        gl::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
        gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => FramebufferStatus::IncompleteMultisample,
        gl::FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS => FramebufferStatus::IncompleteLayerTargets,
        status => FramebufferStatus::Unrecognized(status),
    }
}
