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

//! The device contract: the fixed vocabulary of calls the core drives.

use crate::api::*;
use std::fmt::Debug;

/// An immediate-mode graphics device, viewed as one global state machine.
///
/// Every device interaction in this crate flows through this trait, which
/// keeps the core testable against a recording double and keeps the
/// concrete binding layer in one backend crate. Methods take `&self`:
/// the mutable state lives on the device side of the boundary, and the
/// whole layer is single-threaded by contract.
///
/// Query methods are infallible, mirroring the device family this targets
/// (introspection calls have no error return); state-changing calls are
/// fire-and-forget. Correctness of the render-state cache requires that
/// no caller mutates device state except through [`RenderContext`]
/// (see the crate docs) — this is a documented precondition, not an
/// enforced one.
///
/// [`RenderContext`]: crate::context::RenderContext
pub trait RenderDevice: Debug {
    // --- Pipeline state ---

    /// Makes `program` the active program for subsequent uniform uploads
    /// and draws.
    fn use_program(&self, program: ProgramId);

    /// Binds `framebuffer` to `target`.
    fn bind_framebuffer(&self, target: FramebufferTarget, framebuffer: FramebufferId);

    /// Restores the default framebuffer on `target`.
    fn unbind_framebuffer(&self, target: FramebufferTarget);

    /// Turns `capability` on.
    fn enable(&self, capability: Capability);

    /// Turns `capability` off.
    fn disable(&self, capability: Capability);

    /// Sets the source/destination blend factor pair.
    fn set_blend_func(&self, func: BlendFunc);

    /// Sets which triangle faces are culled.
    fn set_cull_face(&self, mode: CullMode);

    /// Enables or disables depth-buffer writes.
    fn set_depth_mask(&self, flag: bool);

    /// Sets the depth comparison function.
    fn set_depth_func(&self, func: CompareFunction);

    /// Sets the viewport rectangle.
    fn set_viewport(&self, viewport: Viewport);

    /// Sets the color the framebuffer clears to.
    fn set_clear_color(&self, color: ClearColor);

    // --- Uniform upload (the active program is the target) ---

    /// Uploads a single `i32`.
    fn set_uniform_i32(&self, location: UniformLocation, value: i32);

    /// Uploads a single `u32`.
    fn set_uniform_u32(&self, location: UniformLocation, value: u32);

    /// Uploads a single `f32`.
    fn set_uniform_f32(&self, location: UniformLocation, value: f32);

    /// Uploads an `i32` array; the element count is the slice length.
    fn set_uniform_i32_array(&self, location: UniformLocation, values: &[i32]);

    /// Uploads a `u32` array; the element count is the slice length.
    fn set_uniform_u32_array(&self, location: UniformLocation, values: &[u32]);

    /// Uploads an `f32` array; the element count is the slice length.
    fn set_uniform_f32_array(&self, location: UniformLocation, values: &[f32]);

    /// Uploads a flattened vec2 array; two floats per element.
    fn set_uniform_vec2_array(&self, location: UniformLocation, values: &[f32]);

    /// Uploads a flattened vec3 array; three floats per element.
    fn set_uniform_vec3_array(&self, location: UniformLocation, values: &[f32]);

    /// Uploads a flattened vec4 array; four floats per element.
    fn set_uniform_vec4_array(&self, location: UniformLocation, values: &[f32]);

    /// Uploads a flattened, column-major mat3 array; nine floats per element.
    fn set_uniform_mat3_array(&self, location: UniformLocation, values: &[f32]);

    /// Uploads a flattened, column-major mat4 array; sixteen floats per element.
    fn set_uniform_mat4_array(&self, location: UniformLocation, values: &[f32]);

    // --- Program introspection ---
    //
    // The per-uniform queries are batched over an index slice rather than
    // issued per attribute per uniform; one device round-trip answers one
    // property for every active uniform at once.

    /// The number of active uniforms in the linked program.
    fn active_uniform_count(&self, program: ProgramId) -> u32;

    /// The names of the uniforms at `indices`, stripped of the device's
    /// trailing terminator.
    fn uniform_names(&self, program: ProgramId, indices: &[u32]) -> Vec<String>;

    /// The element types of the uniforms at `indices`.
    fn uniform_kinds(&self, program: ProgramId, indices: &[u32]) -> Vec<UniformKind>;

    /// The declared array lengths of the uniforms at `indices` (`1` for
    /// non-arrays).
    fn uniform_array_lengths(&self, program: ProgramId, indices: &[u32]) -> Vec<i32>;

    /// For each uniform at `indices`, the index of the uniform block
    /// containing it, or `-1` for standalone uniforms.
    fn uniform_block_indices(&self, program: ProgramId, indices: &[u32]) -> Vec<i32>;

    /// For each uniform at `indices`, its byte offset within its owning
    /// block (`-1` for standalone uniforms).
    fn uniform_byte_offsets(&self, program: ProgramId, indices: &[u32]) -> Vec<i32>;

    /// Resolves a uniform's binding slot by name;
    /// [`UniformLocation::INACTIVE`] if the name is not active.
    fn uniform_location(&self, program: ProgramId, name: &str) -> UniformLocation;

    /// The number of active uniform blocks in the linked program.
    fn active_uniform_block_count(&self, program: ProgramId) -> u32;

    /// The name of the uniform block at `block_index`.
    fn uniform_block_name(&self, program: ProgramId, block_index: u32) -> String;

    /// The total buffer size, in bytes, of the block at `block_index`.
    fn uniform_block_size(&self, program: ProgramId, block_index: u32) -> i32;

    /// The device-wide uniform-buffer offset alignment, in bytes.
    ///
    /// A device constant; queried once per reflection pass, not per block.
    fn uniform_buffer_offset_alignment(&self) -> i32;

    /// Assigns the block at `block_index` to buffer binding point `binding`.
    fn set_uniform_block_binding(&self, program: ProgramId, block_index: u32, binding: u32);

    // --- Shader objects ---

    /// Creates an empty shader object for `stage`.
    fn create_shader(&self, stage: ShaderStage) -> ShaderId;

    /// Replaces the shader object's source text.
    fn shader_source(&self, shader: ShaderId, source: &str);

    /// Compiles the shader object.
    fn compile_shader(&self, shader: ShaderId);

    /// Whether the last compile of `shader` succeeded.
    fn shader_compile_status(&self, shader: ShaderId) -> bool;

    /// The driver's diagnostic log for `shader`.
    fn shader_info_log(&self, shader: ShaderId) -> String;

    /// Deletes a shader object.
    fn delete_shader(&self, shader: ShaderId);

    /// Creates an empty program object.
    fn create_program(&self) -> ProgramId;

    /// Attaches a compiled shader object to `program`.
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);

    /// Links the attached shader objects into a program.
    fn link_program(&self, program: ProgramId);

    /// Whether the last link of `program` succeeded.
    fn program_link_status(&self, program: ProgramId) -> bool;

    /// The driver's diagnostic log for `program`.
    fn program_info_log(&self, program: ProgramId) -> String;

    /// Deletes a program object.
    fn delete_program(&self, program: ProgramId);

    // --- Buffers ---

    /// Creates a buffer object.
    fn create_buffer(&self) -> BufferId;

    /// Binds `buffer` to `target`.
    fn bind_buffer(&self, target: BufferTarget, buffer: BufferId);

    /// Unbinds whatever buffer is bound to `target`.
    fn unbind_buffer(&self, target: BufferTarget);

    /// Allocates `byte_size` bytes of undefined content for the buffer
    /// bound to `target`.
    fn buffer_allocate(&self, target: BufferTarget, byte_size: usize, usage: BufferUsage);

    /// Uploads `data` into the buffer bound to `target`, replacing its
    /// allocation.
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    /// Uploads `data` into a sub-range of the buffer bound to `target`.
    fn buffer_sub_data(&self, target: BufferTarget, byte_offset: usize, data: &[u8]);

    /// Deletes a buffer object.
    fn delete_buffer(&self, buffer: BufferId);

    // --- Textures ---

    /// Creates a texture object.
    fn create_texture(&self) -> TextureId;

    /// Binds `texture` as the active 2D texture.
    fn bind_texture(&self, texture: TextureId);

    /// Unbinds the active 2D texture.
    fn unbind_texture(&self);

    /// Selects the zero-based texture unit subsequent binds land on.
    fn set_active_texture_unit(&self, unit: u32);

    /// Sets the bound texture's minification and magnification filters.
    fn set_texture_filter(&self, min: TextureFilter, mag: TextureFilter);

    /// Sets the bound texture's wrap modes.
    fn set_texture_wrap(&self, wrap_s: TextureWrap, wrap_t: TextureWrap);

    /// Uploads RGBA8 pixels into the bound texture, or allocates
    /// undefined storage when `pixels` is `None`.
    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: Option<&[u8]>);

    /// Generates the bound texture's mipmap chain.
    fn generate_mipmaps(&self);

    /// Deletes a texture object.
    fn delete_texture(&self, texture: TextureId);

    // --- Framebuffers ---

    /// Creates a framebuffer object.
    fn create_framebuffer(&self) -> FramebufferId;

    /// Attaches `texture` to `attachment` of the bound framebuffer.
    fn framebuffer_texture_2d(&self, attachment: Attachment, texture: TextureId);

    /// The completeness status of the bound framebuffer.
    fn check_framebuffer_status(&self) -> FramebufferStatus;

    /// Selects which attachments fragment outputs write to.
    fn set_draw_buffers(&self, attachments: &[Attachment]);

    /// Deletes a framebuffer object.
    fn delete_framebuffer(&self, framebuffer: FramebufferId);

    // --- Vertex arrays and draws ---

    /// Creates a vertex array object.
    fn create_vertex_array(&self) -> VertexArrayId;

    /// Binds `vertex_array`.
    fn bind_vertex_array(&self, vertex_array: VertexArrayId);

    /// Unbinds the active vertex array.
    fn unbind_vertex_array(&self);

    /// Enables the vertex attribute at `index`.
    fn enable_vertex_attribute(&self, index: u32);

    /// Describes the layout of the attribute at `index` within the bound
    /// vertex buffer.
    fn vertex_attribute_pointer(&self, index: u32, attribute: &VertexAttribute);

    /// Advances the attribute at `index` once per `divisor` instances
    /// instead of once per vertex.
    fn set_attribute_divisor(&self, index: u32, divisor: u32);

    /// Deletes a vertex array object.
    fn delete_vertex_array(&self, vertex_array: VertexArrayId);

    /// Draws consecutive vertices from the bound vertex array.
    fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32);

    /// Draws consecutive vertices, `instances` times.
    fn draw_arrays_instanced(&self, mode: DrawMode, first: i32, count: i32, instances: i32);

    /// Draws indexed vertices from the bound vertex array.
    fn draw_elements(&self, mode: DrawMode, count: i32, kind: IndexKind, byte_offset: usize);

    /// Draws indexed vertices, `instances` times.
    fn draw_elements_instanced(
        &self,
        mode: DrawMode,
        count: i32,
        kind: IndexKind,
        byte_offset: usize,
        instances: i32,
    );
}
