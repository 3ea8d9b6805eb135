//! Static instance placement over a heightfield: rejection scatter and
//! peak clustering. Instances are transform records over shared assets.
#![forbid(unsafe_code)]

use serde::Deserialize;
use skerry_geom::Vec3;
use skerry_terrain::Heightfield;

pub mod lod;
pub mod rng;

use rng::RandStream;

/// One placed copy of a shared model: position, yaw, uniform scale, and a
/// variant id into the shared resource set. Static instances never mutate
/// after placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedInstance {
    pub pos: Vec3,
    pub yaw_deg: f32,
    pub scale: f32,
    pub kind: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScatterParams {
    #[serde(default = "default_scatter_count")]
    pub count: usize,
    #[serde(default = "default_altitude_max")]
    pub altitude_max: f32,
    #[serde(default = "default_scale_min")]
    pub scale_min: f32,
    #[serde(default = "default_scale_max")]
    pub scale_max: f32,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_scatter_count() -> usize {
    2500
}
fn default_altitude_max() -> f32 {
    10.0
}
fn default_scale_min() -> f32 {
    1.0
}
fn default_scale_max() -> f32 {
    1.7
}
fn default_max_attempts() -> usize {
    25_000
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: default_scatter_count(),
            altitude_max: default_altitude_max(),
            scale_min: default_scale_min(),
            scale_max: default_scale_max(),
            max_attempts: default_max_attempts(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClusterParams {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    #[serde(default = "default_base_sink")]
    pub base_sink: f32,
    #[serde(default = "default_height_weights")]
    pub height_weights: Vec<u32>,
    #[serde(default = "default_variant_count")]
    pub variant_count: u32,
}

fn default_rows() -> i32 {
    4
}
fn default_cols() -> i32 {
    4
}
fn default_cell_size() -> f32 {
    2.0
}
fn default_spacing() -> f32 {
    4.0
}
fn default_base_sink() -> f32 {
    4.0
}
fn default_height_weights() -> Vec<u32> {
    vec![50, 50, 30, 20, 10, 5, 5]
}
fn default_variant_count() -> u32 {
    5
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            cell_size: default_cell_size(),
            spacing: default_spacing(),
            base_sink: default_base_sink(),
            height_weights: default_height_weights(),
            variant_count: default_variant_count(),
        }
    }
}

/// Uniform rejection scatter across the terrain extent: a sample is kept
/// only while the surface under it sits at or below `altitude_max`. Scale
/// and yaw are drawn independently per accepted instance.
///
/// The loop is bounded by `max_attempts` total samples; a pool that comes
/// up short is reported and returned as-is. No minimum-distance check is
/// made, so instances may overlap.
pub fn scatter(hf: &Heightfield, params: &ScatterParams, seed: u32) -> Vec<PlacedInstance> {
    let half_w = hf.width() as f32 / 2.0;
    let half_d = hf.depth() as f32 / 2.0;
    let mut pos_rand = RandStream::new(seed, 0x5CA7_7E01);
    let mut attr_rand = RandStream::new(seed, 0x5CA7_7E02);

    let mut out = Vec::with_capacity(params.count);
    let mut attempts = 0usize;
    while out.len() < params.count && attempts < params.max_attempts {
        attempts += 1;
        let x = pos_rand.range(-half_w, half_w);
        let z = pos_rand.range(-half_d, half_d);
        let altitude = hf.height_at(x, z);
        if altitude <= params.altitude_max {
            out.push(PlacedInstance {
                pos: Vec3::new(x, altitude, z),
                yaw_deg: attr_rand.range(0.0, 360.0),
                scale: attr_rand.range(params.scale_min, params.scale_max),
                kind: 0,
            });
        }
    }
    if out.len() < params.count {
        log::warn!(
            "scatter accepted {}/{} instances after {} attempts (altitude_max {})",
            out.len(),
            params.count,
            attempts,
            params.altitude_max
        );
    }
    out
}

/// Grid clusters centered on the `n_clusters` highest terrain points. Each
/// cell's vertical extent is `cell_size` times a factor drawn from the
/// weighted discrete distribution (factor = weighted index + 1), and the
/// cell is lifted by its extent minus `base_sink` so the base meets the
/// ground at the anchor.
pub fn cluster_at_peaks(
    hf: &Heightfield,
    n_clusters: usize,
    params: &ClusterParams,
    seed: u32,
) -> Vec<PlacedInstance> {
    let anchors = hf.highest_points(n_clusters);
    let mut rand = RandStream::new(seed, 0xC1_7135);

    let pitch = params.cell_size + params.spacing;
    let mut out = Vec::with_capacity(anchors.len() * (params.rows * params.cols) as usize);
    for anchor in &anchors {
        let start_x = anchor.x - (params.cols / 2) as f32 * pitch;
        let start_z = anchor.z - (params.rows / 2) as f32 * pitch;
        for i in 0..params.rows {
            for j in 0..params.cols {
                let factor = (rand.weighted_index(&params.height_weights) + 1) as f32;
                let extent = params.cell_size * factor;
                let kind = rand.index(params.variant_count.max(1) as usize) as u32;
                out.push(PlacedInstance {
                    pos: Vec3::new(
                        start_x + j as f32 * pitch,
                        anchor.y + extent - params.base_sink,
                        start_z + i as f32 * pitch,
                    ),
                    yaw_deg: 0.0,
                    scale: factor,
                    kind,
                });
            }
        }
    }
    out
}
