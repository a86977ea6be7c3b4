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

//! 2D RGBA textures.
//!
//! Image decoding is out of scope; callers hand over raw RGBA8 pixels.

use crate::api::{TextureFilter, TextureId, TextureWrap};
use crate::traits::{RenderDevice, TextureBind};

/// Sampling parameters for a 2D texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Wrap mode along S.
    pub wrap_s: TextureWrap,
    /// Wrap mode along T.
    pub wrap_t: TextureWrap,
    /// Minification filter. A mipmap filter makes the texture generate
    /// its mipmap chain after upload.
    pub min_filter: TextureFilter,
    /// Magnification filter.
    pub mag_filter: TextureFilter,
}

impl Default for TextureParams {
    fn default() -> Self {
        TextureParams {
            wrap_s: TextureWrap::ClampToEdge,
            wrap_t: TextureWrap::ClampToEdge,
            min_filter: TextureFilter::Nearest,
            mag_filter: TextureFilter::Nearest,
        }
    }
}

/// A 2D RGBA8 texture object.
#[derive(Debug)]
pub struct Texture2d {
    id: TextureId,
    width: u32,
    height: u32,
}

impl Texture2d {
    /// Creates an RGBA8 texture and uploads `pixels` into it.
    ///
    /// `None` allocates undefined storage of the given size, which is the
    /// usual shape for render targets that a framebuffer will fill.
    pub fn new_rgba8(
        device: &dyn RenderDevice,
        width: u32,
        height: u32,
        pixels: Option<&[u8]>,
        params: &TextureParams,
    ) -> Self {
        let id = device.create_texture();
        device.bind_texture(id);
        device.set_texture_filter(params.min_filter, params.mag_filter);
        device.set_texture_wrap(params.wrap_s, params.wrap_t);
        device.tex_image_2d_rgba(width, height, pixels);
        if params.min_filter.uses_mipmaps() {
            device.generate_mipmaps();
        }
        device.unbind_texture();
        Texture2d { id, width, height }
    }

    /// The texture's handle.
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// The texture's width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The texture's height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocates the texture at a new size, discarding its contents.
    pub fn resize(&mut self, device: &dyn RenderDevice, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        device.bind_texture(self.id);
        device.tex_image_2d_rgba(width, height, None);
        device.unbind_texture();
    }

    /// Unbinds the active 2D texture.
    pub fn unbind(&self, device: &dyn RenderDevice) {
        device.unbind_texture();
    }

    /// Deletes the texture object.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if self.id == TextureId(0) {
            log::warn!("Texture2d::destroy called twice");
            return;
        }
        device.delete_texture(self.id);
        self.id = TextureId(0);
    }
}

impl TextureBind for Texture2d {
    /// Activates texture unit `unit` and binds the texture on it.
    fn bind(&self, device: &dyn RenderDevice, unit: u32) {
        device.set_active_texture_unit(unit);
        device.bind_texture(self.id);
    }
}
