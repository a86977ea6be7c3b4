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

//! # Glint GL
//!
//! The OpenGL backend for `glint-core`: [`GlDevice`] implements the
//! [`RenderDevice`](glint_core::traits::RenderDevice) vocabulary over raw
//! GL bindings.
//!
//! Constructing a [`GlDevice`] requires a current OpenGL context (3.1+
//! for uniform-block introspection); the caller supplies the symbol
//! loader its windowing layer provides. The device itself is one global
//! state machine on the driver side, which is why every method takes
//! `&self` and why the whole stack is single-threaded by contract.

#![warn(missing_docs)]

mod conversions;
mod device;

pub use device::GlDevice;
