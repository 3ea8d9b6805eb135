//! Heightfield terrain: grid synthesis, surface normals, spatial queries.
#![forbid(unsafe_code)]

use serde::Deserialize;
use skerry_geom::{Aabb, Vec3};

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct HeightfieldParams {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_depth")]
    pub depth: i32,
    #[serde(default = "default_max_height")]
    pub max_height: f32,
    #[serde(default = "default_uv_repeat")]
    pub uv_repeat: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_width() -> i32 {
    200
}
fn default_depth() -> i32 {
    200
}
fn default_max_height() -> f32 {
    30.0
}
fn default_uv_repeat() -> f32 {
    100.0
}
fn default_frequency() -> f32 {
    0.03
}

impl Default for HeightfieldParams {
    fn default() -> Self {
        Self {
            width: default_width(),
            depth: default_depth(),
            max_height: default_max_height(),
            uv_repeat: default_uv_repeat(),
            frequency: default_frequency(),
        }
    }
}

/// Regular-grid elevation field, `(width+1) x (depth+1)` samples laid out
/// row-major by z then x, centered on the world origin. Built once, never
/// mutated.
pub struct Heightfield {
    width: i32,
    depth: i32,
    max_height: f32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl Heightfield {
    pub fn build(params: &HeightfieldParams) -> Heightfield {
        let w = params.width.max(1);
        let d = params.depth.max(1);
        let k = params.frequency;
        let half_w = w as f32 / 2.0;
        let half_d = d as f32 / 2.0;

        let vert_count = ((w + 1) * (d + 1)) as usize;
        let mut positions = Vec::with_capacity(vert_count);
        let mut uvs = Vec::with_capacity(vert_count);
        for z in 0..=d {
            for x in 0..=w {
                let world_x = x as f32 - half_w;
                let world_z = z as f32 - half_d;
                let height = (world_x * k).sin() * (world_z * k).cos() * params.max_height;
                positions.push(Vec3::new(world_x, height, world_z));
                uvs.push([
                    x as f32 / w as f32 * params.uv_repeat,
                    z as f32 / d as f32 * params.uv_repeat,
                ]);
            }
        }

        let mut indices = Vec::with_capacity((w * d * 6) as usize);
        for z in 0..d {
            for x in 0..w {
                let top_left = (z * (w + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (w + 1) + x) as u32;
                let bottom_right = bottom_left + 1;
                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        // Accumulate face normals into the three corners of each triangle,
        // then normalize once. Sign chosen so normals leave the +Y side.
        let mut normals = vec![Vec3::ZERO; vert_count];
        for tri in indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let e1 = positions[i1] - positions[i0];
            let e2 = positions[i2] - positions[i0];
            let mut face = e1.cross(e2);
            if face.y < 0.0 {
                face = Vec3::ZERO - face;
            }
            normals[i0] += face;
            normals[i1] += face;
            normals[i2] += face;
        }
        for n in &mut normals {
            *n = n.normalized();
        }

        Heightfield {
            width: w,
            depth: d,
            max_height: params.max_height,
            positions,
            normals,
            uvs,
            indices,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// World-space bounding box: the grid extent spanned by the lowest and
    /// highest samples.
    pub fn bounds(&self) -> Aabb {
        let half_w = self.width as f32 / 2.0;
        let half_d = self.depth as f32 / 2.0;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for p in &self.positions {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Aabb::new(
            Vec3::new(-half_w, min_y, -half_d),
            Vec3::new(half_w, max_y, half_d),
        )
    }

    /// Whether `(x, z)` lies within the terrain's world extent.
    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        let half_w = self.width as f32 / 2.0;
        let half_d = self.depth as f32 / 2.0;
        x >= -half_w && x <= half_w && z >= -half_d && z <= half_d
    }

    /// Bilinearly interpolated surface height at world `(x, z)`.
    ///
    /// Out-of-extent queries are reported and answered with a sentinel
    /// height of 0 so callers can proceed.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        if !self.contains(x, z) {
            log::warn!(
                "height query ({:.2}, {:.2}) outside terrain extent {}x{}",
                x,
                z,
                self.width,
                self.depth
            );
            return 0.0;
        }

        let gx = x + self.width as f32 / 2.0;
        let gz = z + self.depth as f32 / 2.0;
        let x0 = (gx.floor() as i32).clamp(0, self.width);
        let z0 = (gz.floor() as i32).clamp(0, self.depth);
        // Edge samples keep their far neighbor in range.
        let x1 = (x0 + 1).min(self.width);
        let z1 = (z0 + 1).min(self.depth);
        let tx = gx - x0 as f32;
        let tz = gz - z0 as f32;

        let stride = (self.width + 1) as usize;
        let h00 = self.positions[z0 as usize * stride + x0 as usize].y;
        let h10 = self.positions[z0 as usize * stride + x1 as usize].y;
        let h01 = self.positions[z1 as usize * stride + x0 as usize].y;
        let h11 = self.positions[z1 as usize * stride + x1 as usize].y;

        let top = h00 + (h10 - h00) * tx;
        let bottom = h01 + (h11 - h01) * tx;
        top + (bottom - top) * tz
    }

    /// The `n` highest grid vertices, height-descending. Equal heights keep
    /// their grid scan order. Asking for more vertices than exist returns
    /// them all.
    pub fn highest_points(&self, n: usize) -> Vec<Vec3> {
        let mut sorted = self.positions.clone();
        sorted.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal));
        sorted.truncate(n);
        sorted
    }
}
