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

//! A recording test double for [`RenderDevice`].
//!
//! State-changing calls are appended to a log the tests assert against;
//! introspection queries answer from scripted [`FakeProgram`] data.

#![allow(dead_code)]

use glint_core::api::*;
use glint_core::resource::ShaderProgram;
use glint_core::traits::RenderDevice;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

pub const VS_SRC: &str = "#version 410 core\nvoid main() { gl_Position = vec4(0.0); }";
pub const FS_SRC: &str = "#version 410 core\nout vec4 color;\nvoid main() { color = vec4(1.0); }";

/// One state-changing device call, as recorded by [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    UseProgram(ProgramId),
    BindFramebuffer(FramebufferTarget, FramebufferId),
    UnbindFramebuffer(FramebufferTarget),
    Enable(Capability),
    Disable(Capability),
    BlendFunc(BlendFunc),
    CullFace(CullMode),
    DepthMask(bool),
    DepthFunc(CompareFunction),
    Viewport(Viewport),
    ClearColor(ClearColor),
    UniformI32(UniformLocation, i32),
    UniformU32(UniformLocation, u32),
    UniformF32(UniformLocation, f32),
    UniformI32Array(UniformLocation, Vec<i32>),
    UniformU32Array(UniformLocation, Vec<u32>),
    UniformF32Array(UniformLocation, Vec<f32>),
    UniformVec2Array(UniformLocation, Vec<f32>),
    UniformVec3Array(UniformLocation, Vec<f32>),
    UniformVec4Array(UniformLocation, Vec<f32>),
    UniformMat3Array(UniformLocation, Vec<f32>),
    UniformMat4Array(UniformLocation, Vec<f32>),
    UniformBlockBinding(ProgramId, u32, u32),
    CreateShader(ShaderStage),
    CompileShader(ShaderId),
    AttachShader(ProgramId, ShaderId),
    LinkProgram(ProgramId),
    DeleteShader(ShaderId),
    CreateProgram(ProgramId),
    DeleteProgram(ProgramId),
    CreateBuffer(BufferId),
    BindBuffer(BufferTarget, BufferId),
    UnbindBuffer(BufferTarget),
    BufferAllocate(BufferTarget, usize),
    BufferData(BufferTarget, usize),
    BufferSubData(BufferTarget, usize, usize),
    DeleteBuffer(BufferId),
    CreateTexture(TextureId),
    BindTexture(TextureId),
    UnbindTexture,
    ActiveTextureUnit(u32),
    TextureFilter(TextureFilter, TextureFilter),
    TextureWrap(TextureWrap, TextureWrap),
    TexImage2d(u32, u32, bool),
    GenerateMipmaps,
    DeleteTexture(TextureId),
    CreateFramebuffer(FramebufferId),
    FramebufferTexture2d(Attachment, TextureId),
    DrawBuffers(Vec<Attachment>),
    DeleteFramebuffer(FramebufferId),
    CreateVertexArray(VertexArrayId),
    BindVertexArray(VertexArrayId),
    UnbindVertexArray,
    EnableVertexAttribute(u32),
    VertexAttributePointer(u32, VertexAttribute),
    AttributeDivisor(u32, u32),
    DeleteVertexArray(VertexArrayId),
    DrawArrays(DrawMode, i32, i32),
    DrawArraysInstanced(DrawMode, i32, i32, i32),
    DrawElements(DrawMode, i32, IndexKind, usize),
    DrawElementsInstanced(DrawMode, i32, IndexKind, usize, i32),
}

/// One scripted active uniform.
#[derive(Debug, Clone)]
pub struct FakeUniform {
    pub name: String,
    pub kind: UniformKind,
    pub count: i32,
    pub block_index: i32,
    pub offset: i32,
    pub location: i32,
}

impl FakeUniform {
    /// A uniform outside any block.
    pub fn standalone(name: &str, kind: UniformKind, count: i32, location: i32) -> Self {
        FakeUniform {
            name: name.to_string(),
            kind,
            count,
            block_index: -1,
            offset: -1,
            location,
        }
    }

    /// A uniform owned by the block at `block_index`.
    pub fn in_block(name: &str, kind: UniformKind, block_index: i32, offset: i32) -> Self {
        FakeUniform {
            name: name.to_string(),
            kind,
            count: 1,
            block_index,
            offset,
            location: -1,
        }
    }
}

/// One scripted active uniform block.
#[derive(Debug, Clone)]
pub struct FakeBlock {
    pub name: String,
    pub byte_size: i32,
}

impl FakeBlock {
    pub fn new(name: &str, byte_size: i32) -> Self {
        FakeBlock {
            name: name.to_string(),
            byte_size,
        }
    }
}

/// The reflection data a linked program answers queries from.
#[derive(Debug, Clone, Default)]
pub struct FakeProgram {
    pub uniforms: Vec<FakeUniform>,
    pub blocks: Vec<FakeBlock>,
}

/// A `RenderDevice` that records calls instead of talking to hardware.
#[derive(Debug)]
pub struct RecordingDevice {
    calls: RefCell<Vec<DeviceCall>>,
    next_id: Cell<u32>,
    programs: RefCell<HashMap<u32, FakeProgram>>,
    staged: RefCell<Vec<FakeProgram>>,
    shader_stages: RefCell<HashMap<u32, ShaderStage>>,
    alignment: Cell<i32>,
    fail_compile: RefCell<Option<(ShaderStage, String)>>,
    fail_link: RefCell<Option<String>>,
    framebuffer_status: Cell<FramebufferStatus>,
}

impl Default for RecordingDevice {
    fn default() -> Self {
        RecordingDevice::new()
    }
}

impl RecordingDevice {
    pub fn new() -> Self {
        RecordingDevice {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            programs: RefCell::new(HashMap::new()),
            staged: RefCell::new(Vec::new()),
            shader_stages: RefCell::new(HashMap::new()),
            alignment: Cell::new(256),
            fail_compile: RefCell::new(None),
            fail_link: RefCell::new(None),
            framebuffer_status: Cell::new(FramebufferStatus::Complete),
        }
    }

    /// Registers a linked program the tests can reflect directly.
    pub fn install_program(&self, program: FakeProgram) -> ProgramId {
        let id = self.fresh_id();
        self.programs.borrow_mut().insert(id, program);
        ProgramId(id)
    }

    /// Queues reflection data for the next `create_program` call.
    pub fn stage_program(&self, program: FakeProgram) {
        self.staged.borrow_mut().push(program);
    }

    /// The recorded state-changing calls, oldest first.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    /// Discards the recorded calls.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn set_alignment(&self, alignment: i32) {
        self.alignment.set(alignment);
    }

    /// Makes the next compile of a `stage` shader fail with `log`.
    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        *self.fail_compile.borrow_mut() = Some((stage, log.to_string()));
    }

    /// Makes the next link fail with `log`.
    pub fn fail_link(&self, log: &str) {
        *self.fail_link.borrow_mut() = Some(log.to_string());
    }

    pub fn set_framebuffer_status(&self, status: FramebufferStatus) {
        self.framebuffer_status.set(status);
    }

    fn fresh_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: DeviceCall) {
        self.calls.borrow_mut().push(call);
    }

    fn with_program<T>(&self, program: ProgramId, read: impl FnOnce(&FakeProgram) -> T) -> T {
        let programs = self.programs.borrow();
        let fake = programs
            .get(&program.0)
            .expect("query against a program the test never installed");
        read(fake)
    }
}

impl RenderDevice for RecordingDevice {
    fn use_program(&self, program: ProgramId) {
        self.record(DeviceCall::UseProgram(program));
    }

    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: FramebufferId) {
        self.record(DeviceCall::BindFramebuffer(target, framebuffer));
    }

    fn unbind_framebuffer(&self, target: FramebufferTarget) {
        self.record(DeviceCall::UnbindFramebuffer(target));
    }

    fn enable(&self, capability: Capability) {
        self.record(DeviceCall::Enable(capability));
    }

    fn disable(&self, capability: Capability) {
        self.record(DeviceCall::Disable(capability));
    }

    fn set_blend_func(&self, func: BlendFunc) {
        self.record(DeviceCall::BlendFunc(func));
    }

    fn set_cull_face(&self, mode: CullMode) {
        self.record(DeviceCall::CullFace(mode));
    }

    fn set_depth_mask(&self, flag: bool) {
        self.record(DeviceCall::DepthMask(flag));
    }

    fn set_depth_func(&self, func: CompareFunction) {
        self.record(DeviceCall::DepthFunc(func));
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.record(DeviceCall::Viewport(viewport));
    }

    fn set_clear_color(&self, color: ClearColor) {
        self.record(DeviceCall::ClearColor(color));
    }

    fn set_uniform_i32(&self, location: UniformLocation, value: i32) {
        self.record(DeviceCall::UniformI32(location, value));
    }

    fn set_uniform_u32(&self, location: UniformLocation, value: u32) {
        self.record(DeviceCall::UniformU32(location, value));
    }

    fn set_uniform_f32(&self, location: UniformLocation, value: f32) {
        self.record(DeviceCall::UniformF32(location, value));
    }

    fn set_uniform_i32_array(&self, location: UniformLocation, values: &[i32]) {
        self.record(DeviceCall::UniformI32Array(location, values.to_vec()));
    }

    fn set_uniform_u32_array(&self, location: UniformLocation, values: &[u32]) {
        self.record(DeviceCall::UniformU32Array(location, values.to_vec()));
    }

    fn set_uniform_f32_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformF32Array(location, values.to_vec()));
    }

    fn set_uniform_vec2_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformVec2Array(location, values.to_vec()));
    }

    fn set_uniform_vec3_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformVec3Array(location, values.to_vec()));
    }

    fn set_uniform_vec4_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformVec4Array(location, values.to_vec()));
    }

    fn set_uniform_mat3_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformMat3Array(location, values.to_vec()));
    }

    fn set_uniform_mat4_array(&self, location: UniformLocation, values: &[f32]) {
        self.record(DeviceCall::UniformMat4Array(location, values.to_vec()));
    }

    fn active_uniform_count(&self, program: ProgramId) -> u32 {
        self.with_program(program, |fake| fake.uniforms.len() as u32)
    }

    fn uniform_names(&self, program: ProgramId, indices: &[u32]) -> Vec<String> {
        self.with_program(program, |fake| {
            indices
                .iter()
                .map(|&index| fake.uniforms[index as usize].name.clone())
                .collect()
        })
    }

    fn uniform_kinds(&self, program: ProgramId, indices: &[u32]) -> Vec<UniformKind> {
        self.with_program(program, |fake| {
            indices
                .iter()
                .map(|&index| fake.uniforms[index as usize].kind)
                .collect()
        })
    }

    fn uniform_array_lengths(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.with_program(program, |fake| {
            indices
                .iter()
                .map(|&index| fake.uniforms[index as usize].count)
                .collect()
        })
    }

    fn uniform_block_indices(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.with_program(program, |fake| {
            indices
                .iter()
                .map(|&index| fake.uniforms[index as usize].block_index)
                .collect()
        })
    }

    fn uniform_byte_offsets(&self, program: ProgramId, indices: &[u32]) -> Vec<i32> {
        self.with_program(program, |fake| {
            indices
                .iter()
                .map(|&index| fake.uniforms[index as usize].offset)
                .collect()
        })
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation {
        self.with_program(program, |fake| {
            fake.uniforms
                .iter()
                .find(|uniform| uniform.name == name)
                .map(|uniform| UniformLocation(uniform.location))
                .unwrap_or(UniformLocation::INACTIVE)
        })
    }

    fn active_uniform_block_count(&self, program: ProgramId) -> u32 {
        self.with_program(program, |fake| fake.blocks.len() as u32)
    }

    fn uniform_block_name(&self, program: ProgramId, block_index: u32) -> String {
        self.with_program(program, |fake| fake.blocks[block_index as usize].name.clone())
    }

    fn uniform_block_size(&self, program: ProgramId, block_index: u32) -> i32 {
        self.with_program(program, |fake| fake.blocks[block_index as usize].byte_size)
    }

    fn uniform_buffer_offset_alignment(&self) -> i32 {
        self.alignment.get()
    }

    fn set_uniform_block_binding(&self, program: ProgramId, block_index: u32, binding: u32) {
        self.record(DeviceCall::UniformBlockBinding(program, block_index, binding));
    }

    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        let id = self.fresh_id();
        self.shader_stages.borrow_mut().insert(id, stage);
        self.record(DeviceCall::CreateShader(stage));
        ShaderId(id)
    }

    fn shader_source(&self, _shader: ShaderId, _source: &str) {}

    fn compile_shader(&self, shader: ShaderId) {
        self.record(DeviceCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: ShaderId) -> bool {
        let stages = self.shader_stages.borrow();
        let stage = stages.get(&shader.0).copied();
        match (&*self.fail_compile.borrow(), stage) {
            (Some((failing, _)), Some(stage)) => *failing != stage,
            _ => true,
        }
    }

    fn shader_info_log(&self, _shader: ShaderId) -> String {
        self.fail_compile
            .borrow()
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: ShaderId) {
        self.record(DeviceCall::DeleteShader(shader));
    }

    fn create_program(&self) -> ProgramId {
        let id = self.fresh_id();
        let fake = {
            let mut staged = self.staged.borrow_mut();
            if staged.is_empty() {
                FakeProgram::default()
            } else {
                staged.remove(0)
            }
        };
        self.programs.borrow_mut().insert(id, fake);
        self.record(DeviceCall::CreateProgram(ProgramId(id)));
        ProgramId(id)
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        self.record(DeviceCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: ProgramId) {
        self.record(DeviceCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: ProgramId) -> bool {
        self.fail_link.borrow().is_none()
    }

    fn program_info_log(&self, _program: ProgramId) -> String {
        self.fail_link.borrow().clone().unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramId) {
        self.record(DeviceCall::DeleteProgram(program));
    }

    fn create_buffer(&self) -> BufferId {
        let id = BufferId(self.fresh_id());
        self.record(DeviceCall::CreateBuffer(id));
        id
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: BufferId) {
        self.record(DeviceCall::BindBuffer(target, buffer));
    }

    fn unbind_buffer(&self, target: BufferTarget) {
        self.record(DeviceCall::UnbindBuffer(target));
    }

    fn buffer_allocate(&self, target: BufferTarget, byte_size: usize, _usage: BufferUsage) {
        self.record(DeviceCall::BufferAllocate(target, byte_size));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], _usage: BufferUsage) {
        self.record(DeviceCall::BufferData(target, data.len()));
    }

    fn buffer_sub_data(&self, target: BufferTarget, byte_offset: usize, data: &[u8]) {
        self.record(DeviceCall::BufferSubData(target, byte_offset, data.len()));
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.record(DeviceCall::DeleteBuffer(buffer));
    }

    fn create_texture(&self) -> TextureId {
        let id = TextureId(self.fresh_id());
        self.record(DeviceCall::CreateTexture(id));
        id
    }

    fn bind_texture(&self, texture: TextureId) {
        self.record(DeviceCall::BindTexture(texture));
    }

    fn unbind_texture(&self) {
        self.record(DeviceCall::UnbindTexture);
    }

    fn set_active_texture_unit(&self, unit: u32) {
        self.record(DeviceCall::ActiveTextureUnit(unit));
    }

    fn set_texture_filter(&self, min: TextureFilter, mag: TextureFilter) {
        self.record(DeviceCall::TextureFilter(min, mag));
    }

    fn set_texture_wrap(&self, wrap_s: TextureWrap, wrap_t: TextureWrap) {
        self.record(DeviceCall::TextureWrap(wrap_s, wrap_t));
    }

    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: Option<&[u8]>) {
        self.record(DeviceCall::TexImage2d(width, height, pixels.is_some()));
    }

    fn generate_mipmaps(&self) {
        self.record(DeviceCall::GenerateMipmaps);
    }

    fn delete_texture(&self, texture: TextureId) {
        self.record(DeviceCall::DeleteTexture(texture));
    }

    fn create_framebuffer(&self) -> FramebufferId {
        let id = FramebufferId(self.fresh_id());
        self.record(DeviceCall::CreateFramebuffer(id));
        id
    }

    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: TextureId) {
        self.record(DeviceCall::FramebufferTexture2d(attachment, texture));
    }

    fn check_framebuffer_status(&self) -> FramebufferStatus {
        self.framebuffer_status.get()
    }

    fn set_draw_buffers(&self, attachments: &[Attachment]) {
        self.record(DeviceCall::DrawBuffers(attachments.to_vec()));
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferId) {
        self.record(DeviceCall::DeleteFramebuffer(framebuffer));
    }

    fn create_vertex_array(&self) -> VertexArrayId {
        let id = VertexArrayId(self.fresh_id());
        self.record(DeviceCall::CreateVertexArray(id));
        id
    }

    fn bind_vertex_array(&self, vertex_array: VertexArrayId) {
        self.record(DeviceCall::BindVertexArray(vertex_array));
    }

    fn unbind_vertex_array(&self) {
        self.record(DeviceCall::UnbindVertexArray);
    }

    fn enable_vertex_attribute(&self, index: u32) {
        self.record(DeviceCall::EnableVertexAttribute(index));
    }

    fn vertex_attribute_pointer(&self, index: u32, attribute: &VertexAttribute) {
        self.record(DeviceCall::VertexAttributePointer(index, *attribute));
    }

    fn set_attribute_divisor(&self, index: u32, divisor: u32) {
        self.record(DeviceCall::AttributeDivisor(index, divisor));
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        self.record(DeviceCall::DeleteVertexArray(vertex_array));
    }

    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.record(DeviceCall::DrawArrays(mode, first, count));
    }

    fn draw_arrays_instanced(&self, mode: DrawMode, first: i32, count: i32, instances: i32) {
        self.record(DeviceCall::DrawArraysInstanced(mode, first, count, instances));
    }

    fn draw_elements(&self, mode: DrawMode, count: i32, kind: IndexKind, byte_offset: usize) {
        self.record(DeviceCall::DrawElements(mode, count, kind, byte_offset));
    }

    fn draw_elements_instanced(
        &self,
        mode: DrawMode,
        count: i32,
        kind: IndexKind,
        byte_offset: usize,
        instances: i32,
    ) {
        self.record(DeviceCall::DrawElementsInstanced(
            mode,
            count,
            kind,
            byte_offset,
            instances,
        ));
    }
}

/// Links a program over scripted reflection data and wraps it for sharing.
pub fn link_program(device: &RecordingDevice, fake: FakeProgram) -> Arc<ShaderProgram> {
    device.stage_program(fake);
    let program = ShaderProgram::vert_frag(device, VS_SRC, FS_SRC).expect("link failed");
    Arc::new(program)
}
