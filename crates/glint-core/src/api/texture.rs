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

//! Texture sampling parameters and framebuffer attachment types.

/// Texel filtering when a texture is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    /// Nearest texel.
    Nearest,
    /// Linear interpolation of the four nearest texels.
    Linear,
    /// Nearest texel from the nearest mipmap level.
    NearestMipmapNearest,
    /// Linear filtering on the nearest mipmap level.
    LinearMipmapNearest,
    /// Nearest texel, interpolated between mipmap levels.
    NearestMipmapLinear,
    /// Linear filtering, interpolated between mipmap levels.
    LinearMipmapLinear,
}

impl TextureFilter {
    /// Returns `true` if sampling with this filter reads mipmap levels.
    pub fn uses_mipmaps(&self) -> bool {
        matches!(
            self,
            TextureFilter::NearestMipmapNearest
                | TextureFilter::LinearMipmapNearest
                | TextureFilter::NearestMipmapLinear
                | TextureFilter::LinearMipmapLinear
        )
    }
}

/// How texture coordinates outside `[0, 1]` resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    /// Clamp to the edge texel.
    ClampToEdge,
    /// Repeat the texture.
    Repeat,
    /// Repeat the texture, mirrored every other tile.
    MirroredRepeat,
    /// Clamp to the configured border color.
    ClampToBorder,
}

/// A framebuffer attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attachment {
    /// The numbered color attachment.
    Color(u32),
    /// The depth attachment.
    Depth,
    /// The stencil attachment.
    Stencil,
    /// The combined depth/stencil attachment.
    DepthStencil,
}

/// The binding target a framebuffer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferTarget {
    /// Both the draw and read targets.
    Both,
    /// The draw target only.
    Draw,
    /// The read target only.
    Read,
}

/// The completeness status the device reports for a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferStatus {
    /// The framebuffer is complete and renderable.
    Complete,
    /// The bound target is the default framebuffer, which does not exist.
    Undefined,
    /// An attachment point is attachment-incomplete.
    IncompleteAttachment,
    /// The framebuffer has no image attached at all.
    MissingAttachment,
    /// A draw buffer names an attachment point with no image.
    IncompleteDrawBuffer,
    /// The read buffer names an attachment point with no image.
    IncompleteReadBuffer,
    /// The combination of attached image formats is unsupported.
    Unsupported,
    /// Attached images disagree on sample counts or sample locations.
    IncompleteMultisample,
    /// Attached images mix layered and non-layered targets.
    IncompleteLayerTargets,
    /// A status enum this crate does not recognize.
    Unrecognized(u32),
}

impl std::fmt::Display for FramebufferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramebufferStatus::Complete => write!(f, "framebuffer is complete"),
            FramebufferStatus::Undefined => write!(
                f,
                "target is the default framebuffer, but the default framebuffer does not exist"
            ),
            FramebufferStatus::IncompleteAttachment => {
                write!(f, "a framebuffer attachment point is incomplete")
            }
            FramebufferStatus::MissingAttachment => {
                write!(f, "the framebuffer has no image attached to it")
            }
            FramebufferStatus::IncompleteDrawBuffer => write!(
                f,
                "a draw buffer names an attachment point without an attached image"
            ),
            FramebufferStatus::IncompleteReadBuffer => write!(
                f,
                "the read buffer names an attachment point without an attached image"
            ),
            FramebufferStatus::Unsupported => write!(
                f,
                "the combination of attached image formats violates a device restriction"
            ),
            FramebufferStatus::IncompleteMultisample => write!(
                f,
                "attached images do not agree on sample counts or fixed sample locations"
            ),
            FramebufferStatus::IncompleteLayerTargets => write!(
                f,
                "attached images mix layered and non-layered targets"
            ),
            FramebufferStatus::Unrecognized(status) => {
                write!(f, "unrecognized framebuffer status {status:#x}")
            }
        }
    }
}
