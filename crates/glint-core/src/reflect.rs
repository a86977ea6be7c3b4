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

//! Reconstructs uniform and uniform-block descriptor sets from a linked
//! program, with no compile-time knowledge of the shader's contents.

use crate::api::{ProgramId, UniformBlockDescriptor, UniformDescriptor};
use crate::traits::RenderDevice;
use std::collections::HashMap;

/// Assigns buffer binding points to uniform blocks during reflection.
///
/// Reflection asks the policy once per discovered block and forwards the
/// answer to the device. Replacing the policy (say, with a least-recently-
/// used slot allocator) needs no change to reflection itself.
pub trait BlockBindingPolicy {
    /// The binding point for the block at `block_index`.
    fn binding_for(&self, block_index: u32) -> u32;
}

/// The default policy: binding point = block index.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBindingPolicy;

impl BlockBindingPolicy for IndexBindingPolicy {
    fn binding_for(&self, block_index: u32) -> u32 {
        block_index
    }
}

/// Reflects a linked program into name-keyed descriptor maps.
///
/// Must be called only after a successful link; on an unlinked or failed
/// program the device's answers, and therefore the result, are undefined.
///
/// Each per-uniform property is queried for all active uniforms in one
/// batched call, so the device round-trip count is per property, not per
/// uniform. As a side effect each discovered block is assigned a buffer
/// binding point through `policy`.
pub fn reflect(
    device: &dyn RenderDevice,
    program: ProgramId,
    policy: &dyn BlockBindingPolicy,
) -> (
    HashMap<String, UniformDescriptor>,
    HashMap<String, UniformBlockDescriptor>,
) {
    let uniform_count = device.active_uniform_count(program);
    let indices: Vec<u32> = (0..uniform_count).collect();

    let names = device.uniform_names(program, &indices);
    let kinds = device.uniform_kinds(program, &indices);
    let counts = device.uniform_array_lengths(program, &indices);
    let parent_blocks = device.uniform_block_indices(program, &indices);
    let offsets = device.uniform_byte_offsets(program, &indices);

    let mut descriptors = HashMap::new();
    for index in 0..uniform_count as usize {
        // Uniforms owned by a block have no standalone location; they are
        // addressed through their block's buffer instead.
        if parent_blocks[index] != -1 {
            continue;
        }
        let name = names[index].clone();
        let location = device.uniform_location(program, &name);
        descriptors.insert(
            name.clone(),
            UniformDescriptor {
                name,
                kind: kinds[index],
                count: counts[index],
                location,
            },
        );
    }

    let block_count = device.active_uniform_block_count(program);
    // The offset alignment is a device-wide constant, so one query covers
    // every block.
    let alignment = device.uniform_buffer_offset_alignment();

    let mut blocks = HashMap::new();
    for block_index in 0..block_count {
        let name = device.uniform_block_name(program, block_index);
        let byte_size = device.uniform_block_size(program, block_index);

        let mut member_offsets = HashMap::new();
        for index in 0..uniform_count as usize {
            if parent_blocks[index] == block_index as i32 {
                member_offsets.insert(names[index].clone(), offsets[index]);
            }
        }

        device.set_uniform_block_binding(program, block_index, policy.binding_for(block_index));

        blocks.insert(
            name.clone(),
            UniformBlockDescriptor {
                name,
                block_index,
                byte_size,
                member_offsets,
                alignment,
            },
        );
    }

    log::debug!(
        "reflected program {:?}: {} standalone uniforms, {} blocks",
        program,
        descriptors.len(),
        blocks.len()
    );

    (descriptors, blocks)
}
