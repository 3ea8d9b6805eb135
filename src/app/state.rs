use std::sync::mpsc::Receiver;

use raylib::prelude::*;
use skerry_render_raylib::TerrainRender;

use crate::camera::FlyCamera;
use crate::event::EventQueue;
use crate::gamestate::GameState;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub cam: FlyCamera,
    pub light: f32,
    pub terrain_render: Option<TerrainRender>,
    pub bird_model: Option<Model>,
    pub car_model: Option<Model>,
    pub(crate) config_event_rx: Option<Receiver<()>>,
    // Held so the watch callback keeps firing; dropping it ends the watch.
    #[allow(dead_code)]
    pub(crate) watcher: Option<notify::RecommendedWatcher>,
}
