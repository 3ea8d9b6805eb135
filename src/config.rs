use serde::Deserialize;
use skerry_scatter::{ClusterParams, ScatterParams};
use skerry_terrain::HeightfieldParams;
use std::error::Error;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub terrain: HeightfieldParams,
    #[serde(default)]
    pub forest: ForestConfig,
    #[serde(default)]
    pub city: CityConfig,
    #[serde(default)]
    pub birds: BirdsConfig,
    #[serde(default)]
    pub cars: CarsConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            terrain: HeightfieldParams::default(),
            forest: ForestConfig::default(),
            city: CityConfig::default(),
            birds: BirdsConfig::default(),
            cars: CarsConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ForestConfig {
    #[serde(default)]
    pub scatter: ScatterParams,
    #[serde(default = "default_lod_cuts")]
    pub lod_cuts: Vec<f32>,
}

fn default_lod_cuts() -> Vec<f32> {
    vec![0.0, 50.0, 100.0, 1000.0]
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            scatter: ScatterParams::default(),
            lod_cuts: default_lod_cuts(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CityConfig {
    #[serde(default = "default_clusters")]
    pub clusters: usize,
    #[serde(default)]
    pub layout: ClusterParams,
    #[serde(default = "default_city_radius")]
    pub render_radius: f32,
}

fn default_clusters() -> usize {
    20
}
fn default_city_radius() -> f32 {
    800.0
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            layout: ClusterParams::default(),
            render_radius: default_city_radius(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BirdsConfig {
    #[serde(default = "default_flocks")]
    pub flocks: usize,
    #[serde(default = "default_flock_min")]
    pub flock_min: usize,
    #[serde(default = "default_flock_max")]
    pub flock_max: usize,
    #[serde(default = "default_orbit_radius_min")]
    pub orbit_radius_min: f32,
    #[serde(default = "default_orbit_radius_max")]
    pub orbit_radius_max: f32,
    #[serde(default = "default_orbit_speed_min")]
    pub orbit_speed_min: f32,
    #[serde(default = "default_orbit_speed_max")]
    pub orbit_speed_max: f32,
    #[serde(default = "default_bird_scale")]
    pub scale: f32,
    #[serde(default = "default_birds_radius")]
    pub render_radius: f32,
}

fn default_flocks() -> usize {
    40
}
fn default_flock_min() -> usize {
    1
}
fn default_flock_max() -> usize {
    5
}
fn default_orbit_radius_min() -> f32 {
    40.0
}
fn default_orbit_radius_max() -> f32 {
    70.0
}
fn default_orbit_speed_min() -> f32 {
    50.0
}
fn default_orbit_speed_max() -> f32 {
    150.0
}
fn default_bird_scale() -> f32 {
    0.3
}
fn default_birds_radius() -> f32 {
    300.0
}

impl Default for BirdsConfig {
    fn default() -> Self {
        Self {
            flocks: default_flocks(),
            flock_min: default_flock_min(),
            flock_max: default_flock_max(),
            orbit_radius_min: default_orbit_radius_min(),
            orbit_radius_max: default_orbit_radius_max(),
            orbit_speed_min: default_orbit_speed_min(),
            orbit_speed_max: default_orbit_speed_max(),
            scale: default_bird_scale(),
            render_radius: default_birds_radius(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CarsConfig {
    #[serde(default = "default_cars")]
    pub count: usize,
    #[serde(default = "default_cruise_height")]
    pub cruise_height: f32,
    #[serde(default = "default_car_speed")]
    pub speed: f32,
    #[serde(default = "default_cars_radius")]
    pub render_radius: f32,
}

fn default_cars() -> usize {
    50
}
fn default_cruise_height() -> f32 {
    50.0
}
fn default_car_speed() -> f32 {
    10.0
}
fn default_cars_radius() -> f32 {
    200.0
}

impl Default for CarsConfig {
    fn default() -> Self {
        Self {
            count: default_cars(),
            cruise_height: default_cruise_height(),
            speed: default_car_speed(),
            render_radius: default_cars_radius(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldConfig, Box<dyn Error>> {
    let s = std::fs::read_to_string(path)?;
    let cfg: WorldConfig = toml::from_str(&s)?;
    Ok(cfg)
}

/// Load the config, falling back to defaults (with a log line) when the
/// file is missing or malformed. A broken config degrades, never aborts.
pub fn load_or_default(path: &Path) -> WorldConfig {
    match load_config_from_path(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("config {} not usable ({}); using defaults", path.display(), e);
            WorldConfig::default()
        }
    }
}
