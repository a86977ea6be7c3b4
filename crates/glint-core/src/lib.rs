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

//! # Glint Core
//!
//! A thin convenience layer over an immediate-mode graphics device,
//! backend-agnostic and single-threaded by contract.
//!
//! The two load-bearing pieces are the render-state deduplication cache
//! ([`RenderContext`]) and the program reflection engine
//! ([`reflect`](reflect::reflect)). Around them: a closed
//! [`UniformValue`] union dispatched by the uniform binder, deferred
//! [`Command`] bundles replayed under [`Technique`] pipeline
//! configurations, and thin resource wrappers — all driving the device
//! exclusively through the [`RenderDevice`] trait, whose concrete
//! implementation lives in a backend crate (`glint-gl` for OpenGL).
//!
//! Correctness of the state cache rests on one process-wide discipline:
//! every device-state-mutating call flows through a [`RenderContext`].
//! An out-of-band device call invalidates the snapshot silently; there is
//! no detection mechanism.

#![warn(missing_docs)]

pub mod api;
pub mod binding;
pub mod command;
pub mod context;
pub mod error;
pub mod reflect;
pub mod resource;
pub mod technique;
pub mod traits;

pub use api::*;
pub use command::Command;
pub use context::RenderContext;
pub use error::{FramebufferError, RenderError, ShaderError, UniformError};
pub use reflect::{BlockBindingPolicy, IndexBindingPolicy};
pub use resource::{Framebuffer, IndexBuffer, Mesh, ShaderProgram, Texture2d, TextureParams, VertexBuffer};
pub use technique::Technique;
pub use traits::{Drawable, RenderDevice, TextureBind};
