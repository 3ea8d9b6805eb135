use raylib::prelude::*;

use super::App;
use crate::camera::FlyCamera;
use crate::event::EventQueue;
use crate::gamestate::GameState;
use crate::scene;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        gs: GameState,
        watch_config: bool,
    ) -> Self {
        let spawn = Vector3::new(0.0, gs.config.terrain.max_height + 30.0, 120.0);
        let cam = FlyCamera::new(spawn);
        rl.disable_cursor();

        let terrain_render = upload_terrain(rl, thread, &gs);

        // One shared mesh per mobile actor type; instances only carry
        // transforms.
        let bird_model = load_box_model(rl, thread, 4.0, 0.8, 1.6);
        let car_model = load_box_model(rl, thread, 2.0, 1.0, 4.5);

        let (config_event_rx, watcher) = if watch_config {
            match super::watchers::watch_config(&gs.config_path) {
                Ok((rx, w)) => (Some(rx), Some(w)),
                Err(e) => {
                    log::warn!("config watcher unavailable: {}", e);
                    (None, None)
                }
            }
        } else {
            (None, None)
        };

        Self {
            gs,
            queue: EventQueue::new(),
            cam,
            light: scene::light_factor(spawn.y),
            terrain_render,
            bird_model,
            car_model,
            config_event_rx,
            watcher,
        }
    }
}

pub(super) fn upload_terrain(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    gs: &GameState,
) -> Option<skerry_render_raylib::TerrainRender> {
    let render = skerry_render_raylib::upload_heightfield(rl, thread, &gs.scene.terrain);
    if render.is_none() {
        log::error!("terrain mesh upload failed; world renders without ground");
    }
    render
}

fn load_box_model(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    w: f32,
    h: f32,
    l: f32,
) -> Option<Model> {
    let mesh = Mesh::gen_mesh_cube(thread, w, h, l);
    match rl.load_model_from_mesh(thread, unsafe { mesh.make_weak() }) {
        Ok(model) => Some(model),
        Err(e) => {
            log::error!("actor mesh upload failed: {}", e);
            None
        }
    }
}
