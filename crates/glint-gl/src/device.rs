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

//! The OpenGL implementation of the render device contract.

use crate::conversions::{framebuffer_status_from_gl, uniform_kind_from_gl, IntoGl};
use gl::types::{GLchar, GLenum, GLint, GLintptr, GLsizei, GLsizeiptr, GLuint, GLvoid};
use glint_core::api::*;
use glint_core::traits::RenderDevice;
use std::ffi::CString;

/// A [`RenderDevice`] backed by a current OpenGL context.
///
/// The loader passed to [`new`](GlDevice::new) resolves GL symbols; any
/// windowing layer provides one. All calls require the context that was
/// current at construction to still be current on the calling thread —
/// the device is a process-global state machine and this type adds no
/// synchronization over it.
#[derive(Debug)]
pub struct GlDevice {
    _private: (),
}

impl GlDevice {
    /// Loads the GL function pointers through `loadfn` and wraps the
    /// now-current context.
    pub fn new<F>(loadfn: F) -> Self
    where
        F: FnMut(&'static str) -> *const GLvoid,
    {
        gl::load_with(loadfn);
        log::debug!("OpenGL device initialized");
        GlDevice { _private: () }
    }

    fn uniform_params(&self, program: ProgramId, indices: &[u32], parameter: GLenum) -> Vec<i32> {
        if indices.is_empty() {
            return Vec::new();
        }
        let mut params = vec![0 as GLint; indices.len()];
        unsafe {
            gl::GetActiveUniformsiv(
                program.0,
                indices.len() as GLsizei,
                indices.as_ptr(),
                parameter,
                params.as_mut_ptr(),
            );
        }
        params
    }
}

impl RenderDevice for GlDevice {
    fn use_program(&self, program: ProgramId) {
        unsafe {
            gl::UseProgram(program.0);
        }
    }

    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: FramebufferId) {
        unsafe {
            gl::BindFramebuffer(target.into_gl(), framebuffer.0);
        }
    }

    fn unbind_framebuffer(&self, target: FramebufferTarget) {
        unsafe {
            gl::BindFramebuffer(target.into_gl(), 0);
        }
    }

    fn enable(&self, capability: Capability) {
        unsafe {
            gl::Enable(capability.into_gl());
        }
    }

    fn disable(&self, capability: Capability) {
        unsafe {
            gl::Disable(capability.into_gl());
        }
    }

    fn set_blend_func(&self, func: BlendFunc) {
        unsafe {
            gl::BlendFunc(func.src.into_gl(), func.dst.into_gl());
        }
    }

    fn set_cull_face(&self, mode: CullMode) {
        unsafe {
            gl::CullFace(mode.into_gl());
        }
    }

    fn set_depth_mask(&self, flag: bool) {
        unsafe {
            gl::DepthMask(if flag { gl::TRUE } else { gl::FALSE });
        }
    }

    fn set_depth_func(&self, func: CompareFunction) {
        unsafe {
            gl::DepthFunc(func.into_gl());
        }
    }

    fn set_viewport(&self, viewport: Viewport) {
        unsafe {
            gl::Viewport(
                viewport.x,
                viewport.y,
                viewport.width as GLsizei,
                viewport.height as GLsizei,
            );
        }
    }

    fn set_clear_color(&self, color: ClearColor) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
        }
    }

    fn set_uniform_i32(&self, location: UniformLocation, value: i32) {
        unsafe {
            gl::Uniform1i(location.0, value);
        }
    }

    fn set_uniform_u32(&self, location: UniformLocation, value: u32) {
        unsafe {
            gl::Uniform1ui(location.0, value);
        }
    }

    fn set_uniform_f32(&self, location: UniformLocation, value: f32) {
        unsafe {
            gl::Uniform1f(location.0, value);
        }
    }

    fn set_uniform_i32_array(&self, location: UniformLocation, values: &[i32]) {
        unsafe {
            gl::Uniform1iv(location.0, values.len() as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_u32_array(&self, location: UniformLocation, values: &[u32]) {
        unsafe {
            gl::Uniform1uiv(location.0, values.len() as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_f32_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::Uniform1fv(location.0, values.len() as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_vec2_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::Uniform2fv(location.0, (values.len() / 2) as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_vec3_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::Uniform3fv(location.0, (values.len() / 3) as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_vec4_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::Uniform4fv(location.0, (values.len() / 4) as GLsizei, values.as_ptr());
        }
    }

    fn set_uniform_mat3_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::UniformMatrix3fv(
                location.0,
                (values.len() / 9) as GLsizei,
                gl::FALSE,
                values.as_ptr(),
            );
        }
    }

    fn set_uniform_mat4_array(&self, location: UniformLocation, values: &[f32]) {
        unsafe {
            gl::UniformMatrix4fv(
                location.0,
                (values.len() / 16) as GLsizei,
                gl::FALSE,
                values.as_ptr(),
            );
        }
    }

    fn active_uniform_count(&self, program: ProgramId) -> u32 {
        let mut count: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::ACTIVE_UNIFORMS, &mut count);
        }
        count.max(0) as u32
    }

    fn uniform_names(&self, program: ProgramId, indices: &[u32]) -> Vec<String> {
        // One batched round-trip for every name length, then one fetch
        // per name. The device appends a trailing NUL to each name; it is
        // stripped here, at the boundary, so the rest of the crate only
        // ever sees the canonical form.
        let lengths = self.uniform_params(program, indices, gl::UNIFORM_NAME_LENGTH);
        indices
            .iter()
            .zip(lengths)
            .map(|(&index, length)| {
                let capacity = length.max(1);
                let mut buffer = vec![0u8; capacity as usize];
                let mut written: GLsizei = 0;
                unsafe {
                    gl::GetActiveUniformName(
                        program.0,
                        index,
                        capacity as GLsizei,
                        &mut written,
                        buffer.as_mut_ptr() as *mut GLchar,
                    );
                }
                buffer.truncate(written.max(0) as usize);
                String::from_utf8_lossy(&buffer).into_owned()
            })
            .collect()
    }

    fn uniform_kinds(&self, program: ProgramId, indices: &[u32]) -> Vec<UniformKind> {
        self.uniform_params(program, indices, gl::UNIFORM_TYPE)
            .into_iter()
            .map(|raw| uniform_kind_from_gl(raw as GLenum))
            .collect()
    }

    fn uniform_array_lengths(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.uniform_params(program, indices, gl::UNIFORM_SIZE)
    }

    fn uniform_block_indices(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.uniform_params(program, indices, gl::UNIFORM_BLOCK_INDEX)
    }

    fn uniform_byte_offsets(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.uniform_params(program, indices, gl::UNIFORM_OFFSET)
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation {
        let Ok(name) = CString::new(name) else {
            return UniformLocation::INACTIVE;
        };
        let location = unsafe { gl::GetUniformLocation(program.0, name.as_ptr()) };
        UniformLocation(location)
    }

    fn active_uniform_block_count(&self, program: ProgramId) -> u32 {
        let mut count: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::ACTIVE_UNIFORM_BLOCKS, &mut count);
        }
        count.max(0) as u32
    }

    fn uniform_block_name(&self, program: ProgramId, block_index: u32) -> String {
        let mut length: GLint = 0;
        unsafe {
            gl::GetActiveUniformBlockiv(
                program.0,
                block_index,
                gl::UNIFORM_BLOCK_NAME_LENGTH,
                &mut length,
            );
        }
        let capacity = length.max(1);
        let mut buffer = vec![0u8; capacity as usize];
        let mut written: GLsizei = 0;
        unsafe {
            gl::GetActiveUniformBlockName(
                program.0,
                block_index,
                capacity as GLsizei,
                &mut written,
                buffer.as_mut_ptr() as *mut GLchar,
            );
        }
        buffer.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn uniform_block_size(&self, program: ProgramId, block_index: u32) -> i32 {
        let mut size: GLint = 0;
        unsafe {
            gl::GetActiveUniformBlockiv(
                program.0,
                block_index,
                gl::UNIFORM_BLOCK_DATA_SIZE,
                &mut size,
            );
        }
        size
    }

    fn uniform_buffer_offset_alignment(&self) -> i32 {
        let mut alignment: GLint = 0;
        unsafe {
            gl::GetIntegerv(gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT, &mut alignment);
        }
        alignment
    }

    fn set_uniform_block_binding(&self, program: ProgramId, block_index: u32, binding: u32) {
        unsafe {
            gl::UniformBlockBinding(program.0, block_index, binding);
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(stage.into_gl()) })
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        let pointer = source.as_ptr() as *const GLchar;
        let length = source.len() as GLint;
        unsafe {
            gl::ShaderSource(shader.0, 1, &pointer, &length);
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe {
            gl::CompileShader(shader.0);
        }
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut status);
        }
        status == gl::TRUE as GLint
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        let mut length: GLint = 0;
        unsafe {
            gl::GetShaderiv(shader.0, gl::INFO_LOG_LENGTH, &mut length);
        }
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0u8; length as usize];
        let mut written: GLsizei = 0;
        unsafe {
            gl::GetShaderInfoLog(
                shader.0,
                length as GLsizei,
                &mut written,
                buffer.as_mut_ptr() as *mut GLchar,
            );
        }
        buffer.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe {
            gl::DeleteShader(shader.0);
        }
    }

    fn create_program(&self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe {
            gl::AttachShader(program.0, shader.0);
        }
    }

    fn link_program(&self, program: ProgramId) {
        unsafe {
            gl::LinkProgram(program.0);
        }
    }

    fn program_link_status(&self, program: ProgramId) -> bool {
        let mut status: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut status);
        }
        status == gl::TRUE as GLint
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        let mut length: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::INFO_LOG_LENGTH, &mut length);
        }
        if length <= 0 {
            return String::new();
        }
        let mut buffer = vec![0u8; length as usize];
        let mut written: GLsizei = 0;
        unsafe {
            gl::GetProgramInfoLog(
                program.0,
                length as GLsizei,
                &mut written,
                buffer.as_mut_ptr() as *mut GLchar,
            );
        }
        buffer.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe {
            gl::DeleteProgram(program.0);
        }
    }

    fn create_buffer(&self) -> BufferId {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        BufferId(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: BufferId) {
        unsafe {
            gl::BindBuffer(target.into_gl(), buffer.0);
        }
    }

    fn unbind_buffer(&self, target: BufferTarget) {
        unsafe {
            gl::BindBuffer(target.into_gl(), 0);
        }
    }

    fn buffer_allocate(&self, target: BufferTarget, byte_size: usize, usage: BufferUsage) {
        unsafe {
            gl::BufferData(
                target.into_gl(),
                byte_size as GLsizeiptr,
                std::ptr::null(),
                usage.into_gl(),
            );
        }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe {
            gl::BufferData(
                target.into_gl(),
                data.len() as GLsizeiptr,
                data.as_ptr() as *const GLvoid,
                usage.into_gl(),
            );
        }
    }

    fn buffer_sub_data(&self, target: BufferTarget, byte_offset: usize, data: &[u8]) {
        unsafe {
            gl::BufferSubData(
                target.into_gl(),
                byte_offset as GLintptr,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const GLvoid,
            );
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe {
            gl::DeleteBuffers(1, &buffer.0);
        }
    }

    fn create_texture(&self) -> TextureId {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
        }
        TextureId(id)
    }

    fn bind_texture(&self, texture: TextureId) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, texture.0);
        }
    }

    fn unbind_texture(&self) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
    }

    fn set_active_texture_unit(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
        }
    }

    fn set_texture_filter(&self, min: TextureFilter, mag: TextureFilter) {
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min.into_gl() as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, mag.into_gl() as GLint);
        }
    }

    fn set_texture_wrap(&self, wrap_s: TextureWrap, wrap_t: TextureWrap) {
        unsafe {
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, wrap_s.into_gl() as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, wrap_t.into_gl() as GLint);
        }
    }

    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: Option<&[u8]>) {
        let pointer = match pixels {
            Some(data) => data.as_ptr() as *const GLvoid,
            None => std::ptr::null(),
        };
        unsafe {
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pointer,
            );
        }
    }

    fn generate_mipmaps(&self) {
        unsafe {
            gl::GenerateMipmap(gl::TEXTURE_2D);
        }
    }

    fn delete_texture(&self, texture: TextureId) {
        unsafe {
            gl::DeleteTextures(1, &texture.0);
        }
    }

    fn create_framebuffer(&self) -> FramebufferId {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenFramebuffers(1, &mut id);
        }
        FramebufferId(id)
    }

    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: TextureId) {
        unsafe {
            gl::FramebufferTexture2D(
                gl::FRAMEBUFFER,
                attachment.into_gl(),
                gl::TEXTURE_2D,
                texture.0,
                0,
            );
        }
    }

    fn check_framebuffer_status(&self) -> FramebufferStatus {
        framebuffer_status_from_gl(unsafe { gl::CheckFramebufferStatus(gl::FRAMEBUFFER) })
    }

    fn set_draw_buffers(&self, attachments: &[Attachment]) {
        let buffers: Vec<GLenum> = attachments
            .iter()
            .map(|attachment| attachment.into_gl())
            .collect();
        unsafe {
            gl::DrawBuffers(buffers.len() as GLsizei, buffers.as_ptr());
        }
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferId) {
        unsafe {
            gl::DeleteFramebuffers(1, &framebuffer.0);
        }
    }

    fn create_vertex_array(&self) -> VertexArrayId {
        let mut id: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        VertexArrayId(id)
    }

    fn bind_vertex_array(&self, vertex_array: VertexArrayId) {
        unsafe {
            gl::BindVertexArray(vertex_array.0);
        }
    }

    fn unbind_vertex_array(&self) {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    fn enable_vertex_attribute(&self, index: u32) {
        unsafe {
            gl::EnableVertexAttribArray(index);
        }
    }

    fn vertex_attribute_pointer(&self, index: u32, attribute: &VertexAttribute) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                attribute.size,
                attribute.kind.into_gl(),
                if attribute.normalized { gl::TRUE } else { gl::FALSE },
                attribute.byte_stride,
                attribute.byte_offset as *const GLvoid,
            );
        }
    }

    fn set_attribute_divisor(&self, index: u32, divisor: u32) {
        unsafe {
            gl::VertexAttribDivisor(index, divisor);
        }
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        unsafe {
            gl::DeleteVertexArrays(1, &vertex_array.0);
        }
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        unsafe {
            gl::DrawArrays(mode.into_gl(), first, count);
        }
    }

    fn draw_arrays_instanced(&self, mode: DrawMode, first: i32, count: i32, instances: i32) {
        unsafe {
            gl::DrawArraysInstanced(mode.into_gl(), first, count, instances);
        }
    }

    fn draw_elements(&self, mode: DrawMode, count: i32, kind: IndexKind, byte_offset: usize) {
        unsafe {
            gl::DrawElements(
                mode.into_gl(),
                count,
                kind.into_gl(),
                byte_offset as *const GLvoid,
            );
        }
    }

    fn draw_elements_instanced(
        &self,
        mode: DrawMode,
        count: i32,
        kind: IndexKind,
        byte_offset: usize,
        instances: i32,
    ) {
        unsafe {
            gl::DrawElementsInstanced(
                mode.into_gl(),
                count,
                kind.into_gl(),
                byte_offset as *const GLvoid,
                instances,
            );
        }
    }
}
