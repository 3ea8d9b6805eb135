use std::path::PathBuf;

use crate::config::WorldConfig;
use crate::scene::Scene;

/// Explicit application state threaded through the update loop; nothing
/// lives at file scope.
pub struct GameState {
    pub tick: u64,
    pub seed: u32,
    pub config_path: PathBuf,
    pub config: WorldConfig,
    pub scene: Scene,
}

impl GameState {
    pub fn new(config_path: PathBuf, config: WorldConfig, seed: u32) -> Self {
        let scene = Scene::build(&config, seed);
        Self {
            tick: 0,
            seed,
            config_path,
            config,
            scene,
        }
    }

    /// Rebuild the world from the current config and seed.
    pub fn regenerate(&mut self) {
        self.scene = Scene::build(&self.config, self.seed);
    }
}
