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

//! Integration tests for the uniform binder.

mod common;

use common::{DeviceCall, RecordingDevice};
use glint_core::api::*;
use glint_core::binding::set_uniform;
use glint_core::error::UniformError;
use std::collections::HashMap;

fn descriptor(name: &str, kind: UniformKind, count: i32, location: i32) -> UniformDescriptor {
    UniformDescriptor {
        name: name.to_string(),
        kind,
        count,
        location: UniformLocation(location),
    }
}

fn descriptors(entries: Vec<UniformDescriptor>) -> HashMap<String, UniformDescriptor> {
    entries
        .into_iter()
        .map(|descriptor| (descriptor.name.clone(), descriptor))
        .collect()
}

#[test]
fn unknown_uniform_is_rejected_with_zero_device_calls() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_time", UniformKind::Float, 1, 0)]);

    let err = set_uniform(&device, &map, "doesNotExist", &UniformValue::Float(1.0)).unwrap_err();

    assert!(matches!(
        err,
        UniformError::UnknownUniform { ref name } if name == "doesNotExist"
    ));
    assert!(device.calls().is_empty());
}

#[test]
fn scalar_dispatch_issues_exactly_one_call() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![
        descriptor("u_frame", UniformKind::Int, 1, 0),
        descriptor("u_seed", UniformKind::UInt, 1, 1),
        descriptor("u_time", UniformKind::Float, 1, 2),
    ]);

    set_uniform(&device, &map, "u_frame", &UniformValue::Int(9)).unwrap();
    set_uniform(&device, &map, "u_seed", &UniformValue::UInt(42)).unwrap();
    set_uniform(&device, &map, "u_time", &UniformValue::Float(0.25)).unwrap();

    assert_eq!(
        device.calls(),
        vec![
            DeviceCall::UniformI32(UniformLocation(0), 9),
            DeviceCall::UniformU32(UniformLocation(1), 42),
            DeviceCall::UniformF32(UniformLocation(2), 0.25),
        ]
    );
}

#[test]
fn declared_arrays_dispatch_through_the_array_call() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_weights", UniformKind::Float, 3, 5)]);

    set_uniform(
        &device,
        &map,
        "u_weights",
        &UniformValue::FloatArray(vec![0.2, 0.3, 0.5]),
    )
    .unwrap();

    assert_eq!(
        device.calls(),
        vec![DeviceCall::UniformF32Array(
            UniformLocation(5),
            vec![0.2, 0.3, 0.5]
        )]
    );
}

#[test]
fn vectors_always_use_the_array_call() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_tint", UniformKind::FloatVec4, 1, 3)]);

    set_uniform(
        &device,
        &map,
        "u_tint",
        &UniformValue::from([0.1f32, 0.2, 0.3, 1.0]),
    )
    .unwrap();

    assert_eq!(
        device.calls(),
        vec![DeviceCall::UniformVec4Array(
            UniformLocation(3),
            vec![0.1, 0.2, 0.3, 1.0]
        )]
    );
}

#[test]
fn matrix_arrays_flatten_in_order() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_bones", UniformKind::FloatMat4, 2, 7)]);

    let first = [1.0f32; 16];
    let second = [2.0f32; 16];
    set_uniform(
        &device,
        &map,
        "u_bones",
        &UniformValue::Mat4(vec![first, second]),
    )
    .unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&first);
    expected.extend_from_slice(&second);
    assert_eq!(
        device.calls(),
        vec![DeviceCall::UniformMat4Array(UniformLocation(7), expected)]
    );
}

#[test]
fn samplers_bind_as_texture_unit_integers() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![
        descriptor("u_albedo", UniformKind::Sampler2d, 1, 0),
        descriptor("u_sky", UniformKind::SamplerCube, 1, 1),
    ]);

    set_uniform(&device, &map, "u_albedo", &UniformValue::Int(0)).unwrap();
    set_uniform(&device, &map, "u_sky", &UniformValue::Int(3)).unwrap();

    assert_eq!(
        device.calls(),
        vec![
            DeviceCall::UniformI32(UniformLocation(0), 0),
            DeviceCall::UniformI32(UniformLocation(1), 3),
        ]
    );
}

#[test]
fn variant_kind_disagreement_is_a_type_mismatch() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_model", UniformKind::FloatMat4, 1, 0)]);

    let err = set_uniform(&device, &map, "u_model", &UniformValue::Float(1.0)).unwrap_err();

    assert!(matches!(
        err,
        UniformError::TypeMismatch {
            ref name,
            expected: UniformKind::FloatMat4,
            supplied: "Float",
        } if name == "u_model"
    ));
    assert!(device.calls().is_empty());
}

#[test]
fn scalar_value_for_declared_array_is_a_type_mismatch() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_weights", UniformKind::Float, 3, 0)]);

    let err = set_uniform(&device, &map, "u_weights", &UniformValue::Float(1.0)).unwrap_err();

    assert!(matches!(err, UniformError::TypeMismatch { .. }));
    assert!(device.calls().is_empty());
}

#[test]
fn wrong_array_length_is_a_length_mismatch() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_lights", UniformKind::FloatVec3, 4, 0)]);

    let err = set_uniform(
        &device,
        &map,
        "u_lights",
        &UniformValue::FloatVec3(vec![[0.0; 3]; 2]),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        UniformError::LengthMismatch {
            expected: 4,
            actual: 2,
            ..
        }
    ));
    assert!(device.calls().is_empty());
}

#[test]
fn unsupported_kind_is_reported_not_swallowed() {
    let device = RecordingDevice::new();
    let map = descriptors(vec![descriptor("u_flag", UniformKind::Unsupported, 1, 0)]);

    let err = set_uniform(&device, &map, "u_flag", &UniformValue::Int(1)).unwrap_err();

    assert!(matches!(err, UniformError::UnsupportedKind { .. }));
    assert!(device.calls().is_empty());
}
