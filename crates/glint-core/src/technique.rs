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

//! One pipeline configuration and the draw loop that replays commands
//! against it.

use crate::api::{
    BlendFactor, BlendFunc, Capability, ClearColor, CompareFunction, CullMode, FramebufferId,
    Viewport,
};
use crate::command::Command;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::resource::{Framebuffer, ShaderProgram};
use crate::traits::RenderDevice;
use std::sync::Arc;

/// A render technique: one shader plus the fixed-function state its draws
/// run under.
///
/// A technique is a pure configuration value. It performs no device calls
/// itself; [`draw`](Technique::draw) routes all state changes through the
/// [`RenderContext`] once per activation, then replays its commands.
#[derive(Debug, Clone)]
pub struct Technique {
    pub(crate) enables: Vec<Capability>,
    pub(crate) shader: Arc<ShaderProgram>,
    pub(crate) viewport: Option<Viewport>,
    pub(crate) framebuffer: Option<FramebufferId>,
    pub(crate) blend_func: Option<BlendFunc>,
    pub(crate) cull_face: Option<CullMode>,
    pub(crate) depth_mask: Option<bool>,
    pub(crate) depth_func: Option<CompareFunction>,
    pub(crate) clear_color: Option<ClearColor>,
}

impl Technique {
    /// Creates a technique over `shader` with device-default fixed state:
    /// replace blending (One/Zero), back-face culling, depth writes on,
    /// and a Less depth test.
    pub fn new(shader: Arc<ShaderProgram>) -> Self {
        Technique {
            enables: Vec::new(),
            shader,
            viewport: None,
            framebuffer: None,
            blend_func: Some(BlendFunc::new(BlendFactor::One, BlendFactor::Zero)),
            cull_face: Some(CullMode::Back),
            depth_mask: Some(true),
            depth_func: Some(CompareFunction::Less),
            clear_color: None,
        }
    }

    /// Requests `capability` while this technique is active.
    pub fn enable(&mut self, capability: Capability) {
        self.enables.push(capability);
    }

    /// Replaces the technique's shader.
    pub fn shader(&mut self, shader: Arc<ShaderProgram>) {
        self.shader = shader;
    }

    /// Sets the viewport for the technique.
    pub fn viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Renders into `framebuffer` instead of the default framebuffer.
    pub fn framebuffer(&mut self, framebuffer: &Framebuffer) {
        self.framebuffer = Some(framebuffer.id());
    }

    /// Sets the blend factor pair for the technique.
    pub fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.blend_func = Some(BlendFunc::new(src, dst));
    }

    /// Sets the cull face mode for the technique.
    pub fn cull_face(&mut self, mode: CullMode) {
        self.cull_face = Some(mode);
    }

    /// Sets whether the technique writes the depth buffer.
    pub fn depth_mask(&mut self, flag: bool) {
        self.depth_mask = Some(flag);
    }

    /// Sets the depth comparison function for the technique.
    pub fn depth_func(&mut self, func: CompareFunction) {
        self.depth_func = Some(func);
    }

    /// Sets the clear color for the frame.
    pub fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear_color = Some(ClearColor::new(r, g, b, a));
    }

    /// The shader the technique draws with.
    pub fn program(&self) -> &Arc<ShaderProgram> {
        &self.shader
    }

    /// Renders `commands` under this technique.
    ///
    /// The context applies the technique's state exactly once, then each
    /// command executes in the given order — order is caller-significant,
    /// since draw order affects output through depth and blending. The
    /// first failing command stops the batch and surfaces its error.
    pub fn draw(
        &self,
        device: &dyn RenderDevice,
        context: &mut RenderContext,
        commands: &[Command],
    ) -> Result<(), RenderError> {
        context.apply(device, self);
        for command in commands {
            command.execute(device, &self.shader)?;
        }
        Ok(())
    }
}
