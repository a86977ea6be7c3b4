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

//! The render-state deduplication cache.

use crate::api::{
    BlendFunc, Capability, ClearColor, CompareFunction, CullMode, FramebufferId,
    FramebufferTarget, ProgramId, Viewport,
};
use crate::technique::Technique;
use crate::traits::RenderDevice;
use std::collections::BTreeSet;

/// The device's pipeline state as last set through this context.
///
/// One context tracks one device. [`apply`](RenderContext::apply) computes
/// the difference between this snapshot and a technique's requested state
/// and issues only the calls that close the gap — at most one call per
/// changed attribute per technique activation, however many commands draw
/// under it.
///
/// The snapshot is truthful only while every state-mutating device call in
/// the process flows through it; an out-of-band bind silently invalidates
/// it with no detection mechanism. Whatever orchestrates frame rendering
/// should own the context and lend it out per draw batch.
#[derive(Debug, Default)]
pub struct RenderContext {
    program: Option<ProgramId>,
    framebuffer: Option<FramebufferId>,
    viewport: Option<Viewport>,
    enabled: BTreeSet<Capability>,
    blend_func: Option<BlendFunc>,
    cull_face: Option<CullMode>,
    depth_mask: Option<bool>,
    depth_func: Option<CompareFunction>,
    clear_color: Option<ClearColor>,
}

impl RenderContext {
    /// Creates a context with an empty snapshot.
    ///
    /// Every attribute starts "never observed", so the first `apply`
    /// issues every call the first technique needs.
    pub fn new() -> Self {
        RenderContext::default()
    }

    /// Transitions the device to `technique`'s pipeline state, issuing the
    /// minimal set of state-changing calls.
    ///
    /// Invoked once per technique activation, never per command. The steps
    /// run in a fixed order and each is independently skipped when the
    /// snapshot already matches.
    pub fn apply(&mut self, device: &dyn RenderDevice, technique: &Technique) {
        // Framebuffer first: everything after renders into it.
        match technique.framebuffer {
            None => {
                if self.framebuffer.take().is_some() {
                    device.unbind_framebuffer(FramebufferTarget::Both);
                    log::trace!("framebuffer reverted to default");
                }
            }
            Some(framebuffer) => {
                if self.framebuffer != Some(framebuffer) {
                    device.bind_framebuffer(FramebufferTarget::Both, framebuffer);
                    self.framebuffer = Some(framebuffer);
                }
            }
        }

        // Program before uniforms: the binder's calls on the draw path are
        // correct only because the right program is active by then.
        let program = technique.shader.id();
        if self.program != Some(program) {
            device.use_program(program);
            self.program = Some(program);
            log::trace!("program switched to {:?}", program);
        }

        // Capability reconciliation: the requested set replaces the
        // enabled set wholesale, so a technique implicitly turns off
        // whatever a previous technique turned on.
        let requested: BTreeSet<Capability> = technique.enables.iter().copied().collect();
        let stale: Vec<Capability> = self.enabled.difference(&requested).copied().collect();
        for capability in stale {
            device.disable(capability);
            self.enabled.remove(&capability);
        }
        let fresh: Vec<Capability> = requested.difference(&self.enabled).copied().collect();
        for capability in fresh {
            device.enable(capability);
            self.enabled.insert(capability);
        }

        // Fixed-function state. An unset technique value is "no opinion"
        // and never triggers a change; techniques built through the
        // constructor carry explicit defaults for all four.
        if let Some(func) = technique.blend_func {
            if self.blend_func != Some(func) {
                device.set_blend_func(func);
                self.blend_func = Some(func);
            }
        }
        if let Some(mode) = technique.cull_face {
            if self.cull_face != Some(mode) {
                device.set_cull_face(mode);
                self.cull_face = Some(mode);
            }
        }
        if let Some(flag) = technique.depth_mask {
            if self.depth_mask != Some(flag) {
                device.set_depth_mask(flag);
                self.depth_mask = Some(flag);
            }
        }
        if let Some(func) = technique.depth_func {
            if self.depth_func != Some(func) {
                device.set_depth_func(func);
                self.depth_func = Some(func);
            }
        }
        if let Some(color) = technique.clear_color {
            if self.clear_color != Some(color) {
                device.set_clear_color(color);
                self.clear_color = Some(color);
            }
        }

        if let Some(viewport) = technique.viewport {
            if self.viewport != Some(viewport) {
                device.set_viewport(viewport);
                self.viewport = Some(viewport);
            }
        }
    }
}
