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

//! Framebuffer objects and their texture attachments.

use crate::api::{Attachment, FramebufferId, FramebufferStatus, FramebufferTarget};
use crate::error::FramebufferError;
use crate::resource::Texture2d;
use crate::traits::RenderDevice;
use std::collections::BTreeMap;

/// A framebuffer object owning its attached textures.
#[derive(Debug)]
pub struct Framebuffer {
    id: FramebufferId,
    textures: BTreeMap<Attachment, Texture2d>,
}

impl Framebuffer {
    /// Creates an empty framebuffer object.
    pub fn new(device: &dyn RenderDevice) -> Self {
        Framebuffer {
            id: device.create_framebuffer(),
            textures: BTreeMap::new(),
        }
    }

    /// The framebuffer's handle.
    pub fn id(&self) -> FramebufferId {
        self.id
    }

    /// Binds the framebuffer for both drawing and reading.
    pub fn bind(&self, device: &dyn RenderDevice) {
        device.bind_framebuffer(FramebufferTarget::Both, self.id);
    }

    /// Restores the default framebuffer for both drawing and reading.
    pub fn unbind(&self, device: &dyn RenderDevice) {
        device.unbind_framebuffer(FramebufferTarget::Both);
    }

    /// Binds the framebuffer for drawing only.
    pub fn bind_for_draw(&self, device: &dyn RenderDevice) {
        device.bind_framebuffer(FramebufferTarget::Draw, self.id);
    }

    /// Restores the default draw framebuffer.
    pub fn unbind_for_draw(&self, device: &dyn RenderDevice) {
        device.unbind_framebuffer(FramebufferTarget::Draw);
    }

    /// Binds the framebuffer for reading only.
    pub fn bind_for_read(&self, device: &dyn RenderDevice) {
        device.bind_framebuffer(FramebufferTarget::Read, self.id);
    }

    /// Restores the default read framebuffer.
    pub fn unbind_for_read(&self, device: &dyn RenderDevice) {
        device.unbind_framebuffer(FramebufferTarget::Read);
    }

    /// Selects which attachments fragment outputs write to.
    pub fn set_draw_buffers(&self, device: &dyn RenderDevice, attachments: &[Attachment]) {
        device.set_draw_buffers(attachments);
    }

    /// Attaches `texture` at `attachment` and verifies completeness.
    ///
    /// An occupied attachment point is rejected before any device call.
    /// If the device reports the framebuffer incomplete afterwards the
    /// texture is not recorded and the specific cause is returned; the
    /// caller may retry with different attachments.
    pub fn attach_texture(
        &mut self,
        device: &dyn RenderDevice,
        attachment: Attachment,
        texture: Texture2d,
    ) -> Result<(), FramebufferError> {
        if self.textures.contains_key(&attachment) {
            return Err(FramebufferError::AttachmentTaken { attachment });
        }
        self.bind(device);
        device.framebuffer_texture_2d(attachment, texture.id());
        let status = device.check_framebuffer_status();
        self.unbind(device);

        match status {
            FramebufferStatus::Complete => {
                self.textures.insert(attachment, texture);
                Ok(())
            }
            FramebufferStatus::Unrecognized(raw) => {
                Err(FramebufferError::Unrecognized { status: raw })
            }
            status => Err(FramebufferError::Incomplete { status }),
        }
    }

    /// The texture attached at `attachment`, if any.
    pub fn texture(&self, attachment: Attachment) -> Option<&Texture2d> {
        self.textures.get(&attachment)
    }

    /// Resizes every attached texture, discarding their contents.
    pub fn resize(&mut self, device: &dyn RenderDevice, width: u32, height: u32) {
        for texture in self.textures.values_mut() {
            texture.resize(device, width, height);
        }
    }

    /// Deletes the framebuffer object and destroys its attached textures.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if self.id == FramebufferId(0) {
            log::warn!("Framebuffer::destroy called twice");
            return;
        }
        device.delete_framebuffer(self.id);
        self.id = FramebufferId(0);
        for (_, mut texture) in std::mem::take(&mut self.textures) {
            texture.destroy(device);
        }
    }
}
