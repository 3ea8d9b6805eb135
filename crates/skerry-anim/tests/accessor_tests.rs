use skerry_anim::accessor::{
    Accessor, AccessorError, ElementType, read_quats, read_scalars, read_vec3s,
};
use skerry_anim::{Channel, ChannelTarget};

fn bytes_of(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn packed_scalars_round_trip() {
    let buf = bytes_of(&[0.0, 0.5, 1.0]);
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: None,
        ty: ElementType::Scalar,
        count: 3,
    };
    assert_eq!(read_scalars(&acc, &buf).unwrap(), vec![0.0, 0.5, 1.0]);
}

#[test]
fn offset_and_stride_skip_interleaved_data() {
    // Element stream interleaved with one f32 of padding per element.
    let buf = bytes_of(&[99.0, 1.0, -1.0, 2.0, -1.0, 3.0]);
    let acc = Accessor {
        byte_offset: 4,
        byte_stride: Some(8),
        ty: ElementType::Scalar,
        count: 3,
    };
    assert_eq!(read_scalars(&acc, &buf).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn vec3_and_quat_grouping() {
    let buf = bytes_of(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: None,
        ty: ElementType::Vec3,
        count: 2,
    };
    let v = read_vec3s(&acc, &buf).unwrap();
    assert_eq!(v[0].x, 1.0);
    assert_eq!(v[1].z, 6.0);

    let buf = bytes_of(&[0.0, 0.0, 0.0, 1.0]);
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: None,
        ty: ElementType::Vec4,
        count: 1,
    };
    let q = read_quats(&acc, &buf).unwrap();
    assert_eq!(q[0].w, 1.0);
}

#[test]
fn short_buffer_is_an_error_not_a_panic() {
    let buf = bytes_of(&[1.0, 2.0]);
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: None,
        ty: ElementType::Vec3,
        count: 1,
    };
    assert_eq!(
        read_vec3s(&acc, &buf).unwrap_err(),
        AccessorError::OutOfBounds { needed: 12, len: 8 }
    );
}

#[test]
fn undersized_stride_is_rejected() {
    let buf = bytes_of(&[1.0; 8]);
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: Some(8),
        ty: ElementType::Vec3,
        count: 2,
    };
    assert_eq!(
        read_scalars(
            &Accessor {
                ty: ElementType::Scalar,
                ..acc
            },
            &buf
        )
        .is_ok(),
        true
    );
    assert_eq!(
        read_vec3s(&acc, &buf).unwrap_err(),
        AccessorError::StrideTooSmall {
            stride: 8,
            element: 12
        }
    );
}

#[test]
fn zero_count_reads_nothing() {
    let acc = Accessor {
        byte_offset: 0,
        byte_stride: None,
        ty: ElementType::Scalar,
        count: 0,
    };
    assert!(read_scalars(&acc, &[]).unwrap().is_empty());
}

#[test]
fn channel_decodes_from_buffers() {
    let times = bytes_of(&[0.0, 1.0]);
    let values = bytes_of(&[0.0, 0.0, 0.0, 5.0, 0.0, 0.0]);
    let ch = Channel::from_buffers(
        ChannelTarget::Translation,
        &Accessor {
            byte_offset: 0,
            byte_stride: None,
            ty: ElementType::Scalar,
            count: 2,
        },
        &Accessor {
            byte_offset: 0,
            byte_stride: None,
            ty: ElementType::Vec3,
            count: 2,
        },
        &times,
        &values,
    )
    .unwrap();
    assert_eq!(ch.last_time(), 1.0);
}
