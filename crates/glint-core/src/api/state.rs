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

//! Pipeline state values tracked by the render-state cache.

/// A boolean device feature toggle.
///
/// The variants cover the toggles an immediate-mode device exposes through
/// its enable/disable calls. The state cache treats the set of enabled
/// capabilities as one reconciled unit: a technique that omits a
/// capability another technique enabled will have it disabled on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Blend incoming fragments with the framebuffer contents.
    Blend,
    /// Cull polygons based on their winding.
    CullFace,
    /// Depth-test incoming fragments.
    DepthTest,
    /// Dither color components before writing.
    Dither,
    /// Add a depth offset to filled polygons.
    PolygonOffsetFill,
    /// Derive a coverage mask from fragment alpha.
    SampleAlphaToCoverage,
    /// AND the fragment coverage with a configured mask.
    SampleCoverage,
    /// Discard fragments outside the scissor rectangle.
    ScissorTest,
    /// Stencil-test incoming fragments.
    StencilTest,
    /// Multisample rasterization.
    Multisample,
    /// Let the vertex stage write point sizes.
    ProgramPointSize,
}

/// A factor in a blend equation, determining how much a source or
/// destination color contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// The factor is `0.0`.
    Zero,
    /// The factor is `1.0`.
    One,
    /// The factor is the source color.
    SrcColor,
    /// The factor is `1.0 - src`.
    OneMinusSrcColor,
    /// The factor is the destination color.
    DstColor,
    /// The factor is `1.0 - dst`.
    OneMinusDstColor,
    /// The factor is the source alpha component (`src.a`).
    SrcAlpha,
    /// The factor is `1.0 - src.a`.
    OneMinusSrcAlpha,
    /// The factor is the destination alpha component (`dst.a`).
    DstAlpha,
    /// The factor is `1.0 - dst.a`.
    OneMinusDstAlpha,
    /// The factor is the constant blend color.
    ConstantColor,
    /// The factor is `1.0 - constant`.
    OneMinusConstantColor,
    /// The factor is the constant blend alpha.
    ConstantAlpha,
    /// The factor is `1.0 - constant.a`.
    OneMinusConstantAlpha,
    /// The factor is `min(src.a, 1 - dst.a)`.
    SrcAlphaSaturate,
}

/// A source/destination blend factor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendFunc {
    /// The blend factor for the incoming fragment color.
    pub src: BlendFactor,
    /// The blend factor for the color already in the framebuffer.
    pub dst: BlendFactor,
}

impl BlendFunc {
    /// Creates a blend factor pair.
    pub fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        BlendFunc { src, dst }
    }
}

impl Default for BlendFunc {
    /// Replace-the-destination, the device default.
    fn default() -> Self {
        BlendFunc {
            src: BlendFactor::One,
            dst: BlendFactor::Zero,
        }
    }
}

/// Defines which face of a triangle to cull (not render).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    #[default]
    Back,
    /// Cull every triangle.
    FrontAndBack,
}

/// The comparison function used for depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// The test passes if the new value is less than the existing value.
    #[default]
    Less,
    /// The test passes if the new value is equal to the existing value.
    Equal,
    /// The test passes if the new value is less than or equal to the existing value.
    LessEqual,
    /// The test passes if the new value is greater than the existing value.
    Greater,
    /// The test passes if the new value is not equal to the existing value.
    NotEqual,
    /// The test passes if the new value is greater than or equal to the existing value.
    GreaterEqual,
    /// The test always passes.
    Always,
}

/// The rectangle of the framebuffer rendering resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Left edge, in pixels.
    pub x: i32,
    /// Bottom edge, in pixels.
    pub y: i32,
    /// Width, in pixels.
    pub width: i32,
    /// Height, in pixels.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Viewport {
            x,
            y,
            width,
            height,
        }
    }
}

/// The color the framebuffer is cleared to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    /// Red component, `0.0..=1.0`.
    pub r: f32,
    /// Green component, `0.0..=1.0`.
    pub g: f32,
    /// Blue component, `0.0..=1.0`.
    pub b: f32,
    /// Alpha component, `0.0..=1.0`.
    pub a: f32,
}

impl ClearColor {
    /// Creates a clear color.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        ClearColor { r, g, b, a }
    }
}

/// A shader pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex stage.
    Vertex,
    /// Per-fragment stage.
    Fragment,
    /// Per-primitive stage.
    Geometry,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
            ShaderStage::Geometry => write!(f, "geometry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_func_default_is_replace() {
        let func = BlendFunc::default();
        assert_eq!(func.src, BlendFactor::One);
        assert_eq!(func.dst, BlendFactor::Zero);
    }

    #[test]
    fn viewport_equality_is_by_value() {
        let a = Viewport::new(0, 0, 800, 600);
        let b = Viewport::new(0, 0, 800, 600);
        let c = Viewport::new(0, 0, 1024, 768);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn shader_stage_display() {
        assert_eq!(format!("{}", ShaderStage::Vertex), "vertex");
        assert_eq!(format!("{}", ShaderStage::Fragment), "fragment");
    }
}
