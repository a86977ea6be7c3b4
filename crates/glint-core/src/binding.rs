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

//! Dispatches typed uniform values to the matching device upload call.

use crate::api::{UniformDescriptor, UniformKind, UniformValue};
use crate::error::UniformError;
use crate::traits::RenderDevice;
use std::collections::HashMap;

/// Resolves `name` against `descriptors` and uploads `value` through the
/// one device call its declared type selects.
///
/// The caller must have activated the owning program; technique ordering
/// guarantees this on the draw path. On success exactly one device call is
/// issued. On any failure no device call is issued:
///
/// - a name absent from `descriptors` is [`UniformError::UnknownUniform`]
///   (inactive uniforms are optimized away by the device and look exactly
///   like absent ones);
/// - a value variant disagreeing with the declared kind is
///   [`UniformError::TypeMismatch`];
/// - an array value of the wrong length is
///   [`UniformError::LengthMismatch`].
///
/// Scalar int/uint/float uniforms dispatch through the scalar call when
/// the declared array length is 1 and the array call otherwise; vector and
/// matrix uniforms always dispatch through the array-style call (the
/// device has no scalar-vector form). Samplers are bound as a scalar i32
/// holding the zero-based texture unit.
pub fn set_uniform(
    device: &dyn RenderDevice,
    descriptors: &HashMap<String, UniformDescriptor>,
    name: &str,
    value: &UniformValue,
) -> Result<(), UniformError> {
    let descriptor = descriptors
        .get(name)
        .ok_or_else(|| UniformError::UnknownUniform {
            name: name.to_string(),
        })?;

    let location = descriptor.location;
    let declared = descriptor.count.max(1) as usize;

    match descriptor.kind {
        UniformKind::Sampler2d | UniformKind::SamplerCube => match value {
            UniformValue::Int(unit) => {
                device.set_uniform_i32(location, *unit);
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::Int => {
            if descriptor.count > 1 {
                match value {
                    UniformValue::IntArray(values) => {
                        check_len(descriptor, declared, values.len())?;
                        device.set_uniform_i32_array(location, values);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            } else {
                match value {
                    UniformValue::Int(v) => {
                        device.set_uniform_i32(location, *v);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            }
        }
        UniformKind::UInt => {
            if descriptor.count > 1 {
                match value {
                    UniformValue::UIntArray(values) => {
                        check_len(descriptor, declared, values.len())?;
                        device.set_uniform_u32_array(location, values);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            } else {
                match value {
                    UniformValue::UInt(v) => {
                        device.set_uniform_u32(location, *v);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            }
        }
        UniformKind::Float => {
            if descriptor.count > 1 {
                match value {
                    UniformValue::FloatArray(values) => {
                        check_len(descriptor, declared, values.len())?;
                        device.set_uniform_f32_array(location, values);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            } else {
                match value {
                    UniformValue::Float(v) => {
                        device.set_uniform_f32(location, *v);
                        Ok(())
                    }
                    other => Err(mismatch(descriptor, other)),
                }
            }
        }
        UniformKind::FloatVec2 => match value {
            UniformValue::FloatVec2(values) => {
                check_len(descriptor, declared, values.len())?;
                device.set_uniform_vec2_array(location, bytemuck::cast_slice(values));
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::FloatVec3 => match value {
            UniformValue::FloatVec3(values) => {
                check_len(descriptor, declared, values.len())?;
                device.set_uniform_vec3_array(location, bytemuck::cast_slice(values));
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::FloatVec4 => match value {
            UniformValue::FloatVec4(values) => {
                check_len(descriptor, declared, values.len())?;
                device.set_uniform_vec4_array(location, bytemuck::cast_slice(values));
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::FloatMat3 => match value {
            UniformValue::Mat3(values) => {
                check_len(descriptor, declared, values.len())?;
                device.set_uniform_mat3_array(location, bytemuck::cast_slice(values));
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::FloatMat4 => match value {
            UniformValue::Mat4(values) => {
                check_len(descriptor, declared, values.len())?;
                device.set_uniform_mat4_array(location, bytemuck::cast_slice(values));
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        UniformKind::Unsupported => Err(UniformError::UnsupportedKind {
            name: descriptor.name.clone(),
        }),
    }
}

fn mismatch(descriptor: &UniformDescriptor, supplied: &UniformValue) -> UniformError {
    UniformError::TypeMismatch {
        name: descriptor.name.clone(),
        expected: descriptor.kind,
        supplied: supplied.variant_name(),
    }
}

fn check_len(
    descriptor: &UniformDescriptor,
    expected: usize,
    actual: usize,
) -> Result<(), UniformError> {
    if expected == actual {
        Ok(())
    } else {
        Err(UniformError::LengthMismatch {
            name: descriptor.name.clone(),
            expected,
            actual,
        })
    }
}
