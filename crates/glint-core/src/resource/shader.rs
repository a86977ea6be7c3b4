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

//! Shader program compilation, linking, and reflected uniform access.

use crate::api::{ProgramId, ShaderId, ShaderStage, UniformBlockDescriptor, UniformDescriptor,
    UniformValue};
use crate::binding;
use crate::error::{ShaderError, UniformError};
use crate::reflect::{reflect, IndexBindingPolicy};
use crate::traits::RenderDevice;
use std::collections::HashMap;

/// A linked shader program and its reflected descriptor sets.
///
/// Building one compiles each stage, links, deletes the stage objects,
/// and reflects the result, so the descriptor maps always describe the
/// current link. Relinking is expressed by building a new program.
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    descriptors: HashMap<String, UniformDescriptor>,
    block_descriptors: HashMap<String, UniformBlockDescriptor>,
}

impl ShaderProgram {
    /// Compiles and links a vertex + fragment program.
    pub fn vert_frag(
        device: &dyn RenderDevice,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self, ShaderError> {
        Self::from_stages(
            device,
            &[(ShaderStage::Vertex, vertex), (ShaderStage::Fragment, fragment)],
        )
    }

    /// Compiles the given stages and links them into a program.
    ///
    /// On compile failure the error carries the failing stage and the
    /// driver's compiler log; on link failure, the linker log. Either way
    /// every intermediate device object is deleted before returning.
    pub fn from_stages(
        device: &dyn RenderDevice,
        stages: &[(ShaderStage, &str)],
    ) -> Result<Self, ShaderError> {
        let program = device.create_program();
        let mut compiled: Vec<ShaderId> = Vec::with_capacity(stages.len());

        for &(stage, source) in stages {
            match compile_stage(device, stage, source) {
                Ok(shader) => {
                    device.attach_shader(program, shader);
                    compiled.push(shader);
                }
                Err(err) => {
                    for shader in compiled {
                        device.delete_shader(shader);
                    }
                    device.delete_program(program);
                    return Err(err);
                }
            }
        }

        device.link_program(program);
        let linked = device.program_link_status(program);

        // The stage objects have served their purpose whether or not the
        // link succeeded.
        for shader in compiled {
            device.delete_shader(shader);
        }

        if !linked {
            let log = device.program_info_log(program);
            device.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        log::debug!("linked program {:?} ({} stages)", program, stages.len());

        let (descriptors, block_descriptors) = reflect(device, program, &IndexBindingPolicy);

        Ok(ShaderProgram {
            id: program,
            descriptors,
            block_descriptors,
        })
    }

    /// The linked program's handle.
    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Uploads a uniform value through the program's descriptors.
    ///
    /// The program must currently be active; on the draw path the
    /// technique's context application guarantees it.
    pub fn set_uniform(
        &self,
        device: &dyn RenderDevice,
        name: &str,
        value: &UniformValue,
    ) -> Result<(), UniformError> {
        binding::set_uniform(device, &self.descriptors, name, value)
    }

    /// The reflected standalone uniforms, keyed by name.
    pub fn uniform_descriptors(&self) -> &HashMap<String, UniformDescriptor> {
        &self.descriptors
    }

    /// The reflected uniform blocks, keyed by name.
    pub fn uniform_block_descriptors(&self) -> &HashMap<String, UniformBlockDescriptor> {
        &self.block_descriptors
    }

    /// Deletes the program object and empties the descriptor maps.
    pub fn destroy(&mut self, device: &dyn RenderDevice) {
        if self.id == ProgramId(0) {
            log::warn!("ShaderProgram::destroy called twice");
            return;
        }
        device.delete_program(self.id);
        self.id = ProgramId(0);
        self.descriptors.clear();
        self.block_descriptors.clear();
    }
}

fn compile_stage(
    device: &dyn RenderDevice,
    stage: ShaderStage,
    source: &str,
) -> Result<ShaderId, ShaderError> {
    let shader = device.create_shader(stage);
    device.shader_source(shader, source);
    device.compile_shader(shader);
    if !device.shader_compile_status(shader) {
        let log = device.shader_info_log(shader);
        device.delete_shader(shader);
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader)
}
