//! Raylib GPU binding: conversions and heightfield mesh upload.
// Unsafe is required for Raylib mesh/model upload operations in this crate.

use raylib::prelude::*;
use skerry_terrain::Heightfield;

pub mod conv {
    use skerry_geom::{Mat4, Vec3};

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn mat4_to_rl(m: Mat4) -> raylib::prelude::Matrix {
        raylib::prelude::Matrix {
            m0: m.m[0],
            m1: m.m[1],
            m2: m.m[2],
            m3: m.m[3],
            m4: m.m[4],
            m5: m.m[5],
            m6: m.m[6],
            m7: m.m[7],
            m8: m.m[8],
            m9: m.m[9],
            m10: m.m[10],
            m11: m.m[11],
            m12: m.m[12],
            m13: m.m[13],
            m14: m.m[14],
            m15: m.m[15],
        }
    }
}

/// Uploaded terrain: one model per row band (16-bit index meshes cap out
/// near 65k vertices, so wide grids are split by grid row).
pub struct TerrainRender {
    pub models: Vec<raylib::core::models::Model>,
}

const MAX_BAND_VERTS: usize = 65_000;

// Elevation tints for the default untextured material, banded by
// normalized height.
const SHORE_TINT: [u8; 4] = [214, 198, 160, 255];
const FIELD_TINT: [u8; 4] = [92, 158, 82, 255];
const SUMMIT_TINT: [u8; 4] = [235, 240, 245, 255];
const SHORE_MAX: f32 = 0.22;
const SUMMIT_MIN: f32 = 0.62;

fn elevation_tint(height: f32, max_height: f32) -> [u8; 4] {
    let span = max_height.abs().max(f32::EPSILON) * 2.0;
    let t = (height + max_height.abs()) / span;
    if t < SHORE_MAX {
        SHORE_TINT
    } else if t > SUMMIT_MIN {
        SUMMIT_TINT
    } else {
        FIELD_TINT
    }
}

/// Upload the heightfield's flat arrays into raylib models. Returns `None`
/// when a single grid row alone exceeds the index budget or when model
/// creation fails; callers degrade to an empty terrain.
pub fn upload_heightfield(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    hf: &Heightfield,
) -> Option<TerrainRender> {
    let row_verts = (hf.width() + 1) as usize;
    // A band needs at least two vertex rows to hold any cells.
    if row_verts * 2 > MAX_BAND_VERTS {
        return None;
    }
    let rows_per_band = (MAX_BAND_VERTS / row_verts - 1).max(1) as i32;

    let mut models = Vec::new();
    let mut z0 = 0i32;
    while z0 < hf.depth() {
        let z1 = (z0 + rows_per_band).min(hf.depth());
        let band_rows = (z1 - z0 + 1) as usize;
        let v_count = band_rows * row_verts;
        let cell_rows = (z1 - z0) as usize;
        let tri_count = cell_rows * hf.width() as usize * 2;

        let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
        raw.vertexCount = v_count as i32;
        raw.triangleCount = tri_count as i32;
        unsafe {
            let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
            let tbytes = (v_count * 2 * std::mem::size_of::<f32>()) as u32;
            let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
            let ibytes = (tri_count * 3 * std::mem::size_of::<u16>()) as u32;
            raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
            raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
            raw.indices = raylib::ffi::MemAlloc(ibytes) as *mut u16;

            let first = z0 as usize * row_verts;
            for i in 0..v_count {
                let p = hf.positions()[first + i];
                let n = hf.normals()[first + i];
                let uv = hf.uvs()[first + i];
                let tint = elevation_tint(p.y, hf.max_height());
                *raw.vertices.add(i * 3) = p.x;
                *raw.vertices.add(i * 3 + 1) = p.y;
                *raw.vertices.add(i * 3 + 2) = p.z;
                *raw.normals.add(i * 3) = n.x;
                *raw.normals.add(i * 3 + 1) = n.y;
                *raw.normals.add(i * 3 + 2) = n.z;
                *raw.texcoords.add(i * 2) = uv[0];
                *raw.texcoords.add(i * 2 + 1) = uv[1];
                for (c, byte) in tint.iter().enumerate() {
                    *raw.colors.add(i * 4 + c) = *byte;
                }
            }

            let mut write = 0usize;
            for z in 0..cell_rows {
                for x in 0..hf.width() as usize {
                    let top_left = (z * row_verts + x) as u16;
                    let top_right = top_left + 1;
                    let bottom_left = ((z + 1) * row_verts + x) as u16;
                    let bottom_right = bottom_left + 1;
                    let tris = [
                        top_left,
                        bottom_left,
                        top_right,
                        top_right,
                        bottom_left,
                        bottom_right,
                    ];
                    std::ptr::copy_nonoverlapping(tris.as_ptr(), raw.indices.add(write), 6);
                    write += 6;
                }
            }
        }

        let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
        unsafe {
            mesh.upload(false);
        }
        let model = rl
            .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
            .ok()?;
        models.push(model);
        z0 = z1;
    }

    Some(TerrainRender { models })
}
