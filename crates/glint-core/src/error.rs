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

//! Defines the hierarchy of error types for the rendering layer.

use crate::api::state::ShaderStage;
use crate::api::texture::{Attachment, FramebufferStatus};
use crate::api::uniform::UniformKind;
use std::fmt;

/// An error raised while resolving or uploading a uniform value.
///
/// All variants are recoverable by the caller: skip the uniform, fix the
/// name, or supply a value of the declared shape.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformError {
    /// The program declares no active uniform with this name.
    ///
    /// Uniforms the device optimized away are indistinguishable from
    /// uniforms that were never declared.
    UnknownUniform {
        /// The name that failed to resolve.
        name: String,
    },
    /// The supplied value's variant does not match the declared type.
    TypeMismatch {
        /// The uniform's name.
        name: String,
        /// The element type the program declares.
        expected: UniformKind,
        /// The variant of the value that was supplied.
        supplied: &'static str,
    },
    /// An array value's length does not match the declared array length.
    LengthMismatch {
        /// The uniform's name.
        name: String,
        /// The element count the program declares.
        expected: usize,
        /// The element count that was supplied.
        actual: usize,
    },
    /// The uniform's device type has no upload path in this crate.
    UnsupportedKind {
        /// The uniform's name.
        name: String,
    },
    /// A uniform block has no member with this name.
    UnknownBlockMember {
        /// The block's name.
        block: String,
        /// The member name that failed to resolve.
        member: String,
    },
}

impl fmt::Display for UniformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformError::UnknownUniform { name } => {
                write!(f, "uniform `{name}` was not recognized")
            }
            UniformError::TypeMismatch {
                name,
                expected,
                supplied,
            } => {
                write!(
                    f,
                    "uniform `{name}` expects {expected:?} but a {supplied} value was supplied"
                )
            }
            UniformError::LengthMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "uniform `{name}` expects {expected} elements but {actual} were supplied"
                )
            }
            UniformError::UnsupportedKind { name } => {
                write!(f, "uniform `{name}` has a type this layer cannot upload")
            }
            UniformError::UnknownBlockMember { block, member } => {
                write!(f, "name `{member}` not recognized in block `{block}`")
            }
        }
    }
}

impl std::error::Error for UniformError {}

/// An error raised while compiling or linking a shader program.
///
/// Fatal to the program instance being built, but not to the process; the
/// driver's diagnostic text is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    Compile {
        /// The stage that failed.
        stage: ShaderStage,
        /// The driver's compiler diagnostics.
        log: String,
    },
    /// The program failed to link.
    Link {
        /// The driver's linker diagnostics.
        log: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, log } => {
                write!(f, "failed to compile {stage} shader: {log}")
            }
            ShaderError::Link { log } => {
                write!(f, "failed to link program: {log}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error raised while assembling a framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramebufferError {
    /// A texture is already attached at this attachment point.
    AttachmentTaken {
        /// The occupied attachment point.
        attachment: Attachment,
    },
    /// The device reported the framebuffer incomplete after an attach.
    ///
    /// Recoverable by adjusting the attachments; the specific cause is in
    /// the carried status.
    Incomplete {
        /// The completeness status the device reported.
        status: FramebufferStatus,
    },
    /// The device reported a completeness status this crate does not know.
    Unrecognized {
        /// The raw status value.
        status: u32,
    },
}

impl fmt::Display for FramebufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramebufferError::AttachmentTaken { attachment } => {
                write!(f, "texture already attached to attachment {attachment:?}")
            }
            FramebufferError::Incomplete { status } => {
                write!(f, "framebuffer incomplete: {status}")
            }
            FramebufferError::Unrecognized { status } => {
                write!(f, "unrecognized framebuffer status {status:#x}")
            }
        }
    }
}

impl std::error::Error for FramebufferError {}

/// The top-level error for draw orchestration.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A uniform failed to resolve or upload.
    Uniform(UniformError),
    /// A shader program failed to build.
    Shader(ShaderError),
    /// A framebuffer failed to assemble.
    Framebuffer(FramebufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Uniform(err) => write!(f, "uniform error: {err}"),
            RenderError::Shader(err) => write!(f, "shader error: {err}"),
            RenderError::Framebuffer(err) => write!(f, "framebuffer error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Uniform(err) => Some(err),
            RenderError::Shader(err) => Some(err),
            RenderError::Framebuffer(err) => Some(err),
        }
    }
}

impl From<UniformError> for RenderError {
    fn from(err: UniformError) -> Self {
        RenderError::Uniform(err)
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Shader(err)
    }
}

impl From<FramebufferError> for RenderError {
    fn from(err: FramebufferError) -> Self {
        RenderError::Framebuffer(err)
    }
}
