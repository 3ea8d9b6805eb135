use hashbrown::HashMap;
use skerry_actor::{Actor, CircularPath, LinearPath, PathKind, Pose};
use skerry_anim::{AnimClip, Channel, ChannelError, ChannelTarget, ChannelValues};
use skerry_geom::{Quat, Vec3};
use skerry_scatter::lod::LodBands;
use skerry_scatter::rng::RandStream;
use skerry_scatter::{PlacedInstance, cluster_at_peaks, scatter};
use skerry_terrain::Heightfield;

use crate::config::WorldConfig;

// Camera altitude below which the light dims toward the dark factor.
pub const LIGHT_DIM_THRESHOLD: f32 = 20.0;
pub const LIGHT_DARK_FACTOR: f32 = 0.01;

/// Scale on the global light intensity for a camera at height `cam_y`:
/// full strength above the threshold, fading toward the dark factor as the
/// camera descends.
pub fn light_factor(cam_y: f32) -> f32 {
    if cam_y < LIGHT_DIM_THRESHOLD {
        LIGHT_DARK_FACTOR.max(cam_y / LIGHT_DIM_THRESHOLD)
    } else {
        1.0
    }
}

/// Everything the world simulates: immutable terrain and static instance
/// pools, plus the mobile actors that mutate each tick. Clips are owned
/// here and shared read-only by every actor that plays them.
pub struct Scene {
    pub terrain: Heightfield,
    pub forest: Vec<PlacedInstance>,
    pub forest_lod: LodBands,
    pub buildings: Vec<PlacedInstance>,
    pub city_anchors: Vec<Vec3>,
    pub clips: Vec<AnimClip>,
    clip_ids: HashMap<String, usize>,
    pub birds: Vec<Actor>,
    pub cars: Vec<Actor>,
}

#[derive(Clone, Copy, Debug)]
pub struct SceneStats {
    pub terrain_vertices: usize,
    pub trees: usize,
    pub buildings: usize,
    pub birds: usize,
    pub cars: usize,
}

impl Scene {
    pub fn build(cfg: &WorldConfig, seed: u32) -> Scene {
        let terrain = Heightfield::build(&cfg.terrain);

        let forest = scatter(&terrain, &cfg.forest.scatter, seed);
        let forest_lod = LodBands::from_cuts(&cfg.forest.lod_cuts);

        let buildings = cluster_at_peaks(&terrain, cfg.city.clusters, &cfg.city.layout, seed);
        let per_cluster = (cfg.city.layout.rows * cfg.city.layout.cols).max(1) as usize;
        let city_anchors: Vec<Vec3> = buildings
            .chunks(per_cluster)
            .filter_map(|c| c.first())
            .map(|b| b.pos)
            .collect();

        let mut clips = Vec::new();
        let mut clip_ids = HashMap::new();
        match wing_flap_clip() {
            Ok(clip) => {
                clip_ids.insert(clip.name.clone(), clips.len());
                clips.push(clip);
            }
            Err(e) => {
                log::error!("wing flap clip rejected: {}; birds fly unanimated", e);
            }
        }
        let flap = clip_ids.get("wing-flap").copied();

        let birds = spawn_birds(&terrain, cfg, flap, seed);
        let cars = spawn_cars(&city_anchors, cfg, seed);

        Scene {
            terrain,
            forest,
            forest_lod,
            buildings,
            city_anchors,
            clips,
            clip_ids,
            birds,
            cars,
        }
    }

    pub fn clip_id(&self, name: &str) -> Option<usize> {
        self.clip_ids.get(name).copied()
    }

    /// One simulation tick: every mobile actor advances by `dt` seconds.
    /// Static pools and the terrain never change.
    pub fn update(&mut self, dt: f32) {
        for bird in &mut self.birds {
            bird.update(dt, &self.clips);
        }
        for car in &mut self.cars {
            car.update(dt, &self.clips);
        }
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            terrain_vertices: self.terrain.positions().len(),
            trees: self.forest.len(),
            buildings: self.buildings.len(),
            birds: self.birds.len(),
            cars: self.cars.len(),
        }
    }
}

/// Built-in wing-flap clip: a scale pulse with a matching roll sway.
/// Model import is the asset loader's job; the demo scene only needs this
/// one clip, so it is constructed through the public channel API.
fn wing_flap_clip() -> Result<AnimClip, ChannelError> {
    let scale = Channel::new(
        ChannelTarget::Scale,
        vec![0.0, 0.25, 0.5],
        ChannelValues::Vec3(vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.35, 1.6),
            Vec3::new(1.0, 1.0, 1.0),
        ]),
    )?;
    let roll = Channel::new(
        ChannelTarget::Rotation,
        vec![0.0, 0.25, 0.5],
        ChannelValues::Quat(vec![
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), -18.0),
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 18.0),
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), -18.0),
        ]),
    )?;
    Ok(AnimClip::new("wing-flap", vec![scale, roll]))
}

/// Flocks orbit the highest terrain points: one anchor per flock, ring
/// radius growing per member so flock mates do not share an orbit.
fn spawn_birds(
    terrain: &Heightfield,
    cfg: &WorldConfig,
    clip: Option<usize>,
    seed: u32,
) -> Vec<Actor> {
    let b = &cfg.birds;
    let mut rand = RandStream::new(seed, 0xB17D_0001);
    let mut out = Vec::new();
    for hilltop in terrain.highest_points(b.flocks) {
        let span = b.flock_max.saturating_sub(b.flock_min);
        let flock = b.flock_min + if span > 0 { rand.index(span + 1) } else { 0 };
        let mut radius = rand.range(b.orbit_radius_min, b.orbit_radius_max);
        for i in 0..flock {
            radius += i as f32;
            let speed = rand.range(b.orbit_speed_min, b.orbit_speed_max);
            let path = CircularPath::new(hilltop, radius, speed);
            let pose = Pose {
                pos: hilltop,
                rotation_deg: Vec3::ZERO,
                scale: Vec3::splat(b.scale),
            };
            out.push(Actor::new(PathKind::Circular(path), clip, pose));
        }
    }
    out
}

/// Patrol routes between distinct city anchors at cruise height. Fewer
/// than two anchors means no routes exist; the car subsystem degrades to
/// empty with a logged error.
fn spawn_cars(city_anchors: &[Vec3], cfg: &WorldConfig, seed: u32) -> Vec<Actor> {
    let c = &cfg.cars;
    if city_anchors.len() < 2 {
        log::error!(
            "{} city anchor(s) is not enough to route cars",
            city_anchors.len()
        );
        return Vec::new();
    }
    let mut rand = RandStream::new(seed, 0xCA2_0001);
    let mut out = Vec::with_capacity(c.count);
    for _ in 0..c.count {
        let start_idx = rand.index(city_anchors.len());
        let mut end_idx = rand.index(city_anchors.len());
        while end_idx == start_idx {
            end_idx = rand.index(city_anchors.len());
        }
        let mut start = city_anchors[start_idx];
        let mut end = city_anchors[end_idx];
        start.y = c.cruise_height;
        end.y = c.cruise_height;

        let path = LinearPath::new(start, end, c.speed);
        let mut pose = Pose {
            pos: start,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        };
        if let Some(yaw) = skerry_actor::yaw_towards(start, end) {
            pose.rotation_deg.y = yaw;
        }
        out.push(Actor::new(PathKind::Linear(path), None, pose));
    }
    out
}
