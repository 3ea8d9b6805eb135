use raylib::prelude::*;

use super::App;
use crate::config;
use crate::event::{Event, RegenCause};
use crate::scene;
use skerry_render_raylib::conv::vec3_to_rl;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, dt: f32) {
        self.queue.advance_tick();
        self.gs.tick = self.queue.tick;

        self.collect_input(rl);
        if let Some(rx) = &self.config_event_rx {
            if rx.try_iter().next().is_some() {
                self.queue.emit(Event::RegenerateRequested {
                    cause: RegenCause::ConfigReload,
                });
            }
        }

        while let Some(ev) = self.queue.pop() {
            match ev {
                Event::MovementRequested {
                    wish,
                    yaw_delta,
                    pitch_delta,
                    sprint,
                } => {
                    self.cam
                        .apply_movement(vec3_to_rl(wish), yaw_delta, pitch_delta, sprint, dt);
                }
                Event::CaptureToggled => {
                    self.cam.captured = !self.cam.captured;
                    if self.cam.captured {
                        rl.disable_cursor();
                    } else {
                        rl.enable_cursor();
                    }
                }
                Event::RegenerateRequested { cause } => {
                    log::info!("[tick {}] RegenerateRequested {:?}", self.gs.tick, cause);
                    if cause == RegenCause::ConfigReload {
                        self.gs.config = config::load_or_default(&self.gs.config_path);
                    }
                    self.gs.regenerate();
                    self.terrain_render = super::init::upload_terrain(rl, thread, &self.gs);
                }
            }
        }

        self.gs.scene.update(dt);
        self.light = scene::light_factor(self.cam.position.y);
    }

    /// Translate this frame's raw input into queued commands.
    fn collect_input(&mut self, rl: &mut RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.queue.emit(Event::CaptureToggled);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            self.queue.emit(Event::RegenerateRequested {
                cause: RegenCause::Manual,
            });
        }

        let mut wish = skerry_geom::Vec3::ZERO;
        if rl.is_key_down(KeyboardKey::KEY_W) {
            wish.z += 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_S) {
            wish.z -= 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_D) {
            wish.x += 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_A) {
            wish.x -= 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_E) {
            wish.y += 1.0;
        }
        if rl.is_key_down(KeyboardKey::KEY_Q) {
            wish.y -= 1.0;
        }
        let md = rl.get_mouse_delta();
        let sprint = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT);
        if wish != skerry_geom::Vec3::ZERO || md.x != 0.0 || md.y != 0.0 {
            self.queue.emit(Event::MovementRequested {
                wish,
                yaw_delta: md.x,
                pitch_delta: md.y,
                sprint,
            });
        }
    }
}
