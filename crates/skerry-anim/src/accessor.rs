//! Typed reads over interchange byte buffers. Numeric interpretation is
//! decoupled from storage layout: callers describe an element stream
//! (offset, stride, type, count) and get typed values back, never raw
//! offset arithmetic at use sites.

use skerry_geom::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Scalar,
    Vec3,
    Vec4,
}

impl ElementType {
    #[inline]
    pub fn components(self) -> usize {
        match self {
            ElementType::Scalar => 1,
            ElementType::Vec3 => 3,
            ElementType::Vec4 => 4,
        }
    }
}

/// Description of a packed or interleaved f32 element stream inside a
/// larger buffer. `byte_stride = None` means tightly packed.
#[derive(Clone, Copy, Debug)]
pub struct Accessor {
    pub byte_offset: usize,
    pub byte_stride: Option<usize>,
    pub ty: ElementType,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorError {
    /// The described stream runs past the end of the buffer.
    OutOfBounds { needed: usize, len: usize },
    /// An explicit stride smaller than one element would alias components.
    StrideTooSmall { stride: usize, element: usize },
}

impl std::fmt::Display for AccessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessorError::OutOfBounds { needed, len } => {
                write!(f, "accessor needs {} bytes but buffer has {}", needed, len)
            }
            AccessorError::StrideTooSmall { stride, element } => {
                write!(f, "stride {} smaller than element size {}", stride, element)
            }
        }
    }
}

impl std::error::Error for AccessorError {}

fn read_components(acc: &Accessor, buffer: &[u8]) -> Result<Vec<f32>, AccessorError> {
    let comps = acc.ty.components();
    let element = comps * 4;
    let stride = acc.byte_stride.unwrap_or(element);
    if stride < element {
        return Err(AccessorError::StrideTooSmall { stride, element });
    }
    if acc.count > 0 {
        let needed = acc.byte_offset + (acc.count - 1) * stride + element;
        if needed > buffer.len() {
            return Err(AccessorError::OutOfBounds {
                needed,
                len: buffer.len(),
            });
        }
    }
    let mut out = Vec::with_capacity(acc.count * comps);
    for i in 0..acc.count {
        let base = acc.byte_offset + i * stride;
        for c in 0..comps {
            let at = base + c * 4;
            out.push(bytemuck::pod_read_unaligned::<f32>(&buffer[at..at + 4]));
        }
    }
    Ok(out)
}

pub fn read_scalars(acc: &Accessor, buffer: &[u8]) -> Result<Vec<f32>, AccessorError> {
    debug_assert_eq!(acc.ty, ElementType::Scalar);
    read_components(acc, buffer)
}

pub fn read_vec3s(acc: &Accessor, buffer: &[u8]) -> Result<Vec<Vec3>, AccessorError> {
    debug_assert_eq!(acc.ty, ElementType::Vec3);
    let raw = read_components(acc, buffer)?;
    Ok(raw
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

/// Quaternions stored x, y, z, w per element (interchange layout).
pub fn read_quats(acc: &Accessor, buffer: &[u8]) -> Result<Vec<Quat>, AccessorError> {
    debug_assert_eq!(acc.ty, ElementType::Vec4);
    let raw = read_components(acc, buffer)?;
    Ok(raw
        .chunks_exact(4)
        .map(|c| Quat::new(c[0], c[1], c[2], c[3]))
        .collect())
}
