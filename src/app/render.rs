use raylib::prelude::*;

use super::App;
use skerry_render_raylib::conv::{mat4_to_rl, vec3_from_rl, vec3_to_rl};

// Facade tints indexed by building variant id.
const FACADES: [(u8, u8, u8); 5] = [
    (120, 128, 140),
    (150, 140, 120),
    (100, 110, 126),
    (136, 120, 136),
    (110, 134, 128),
];

const TRUNK: (u8, u8, u8) = (110, 84, 58);
const CANOPY: (u8, u8, u8) = (66, 130, 62);

fn tint(rgb: (u8, u8, u8), light: f32) -> Color {
    Color::new(
        (rgb.0 as f32 * light) as u8,
        (rgb.1 as f32 * light) as u8,
        (rgb.2 as f32 * light) as u8,
        255,
    )
}

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let cam3d = self.cam.to_camera3d();
        let cam_pos = vec3_from_rl(self.cam.position);
        let light = self.light;
        let scene = &self.gs.scene;
        let city_cell = self.gs.config.city.layout.cell_size;
        let city_radius = self.gs.config.city.render_radius;
        let bird_radius = self.gs.config.birds.render_radius;
        let car_radius = self.gs.config.cars.render_radius;

        let mut d = rl.begin_drawing(thread);
        d.clear_background(tint((118, 170, 200), light.max(0.25)));

        {
            let mut d3 = d.begin_mode3D(cam3d);

            if let Some(terrain) = &self.terrain_render {
                for model in &terrain.models {
                    d3.draw_model(model, Vector3::zero(), 1.0, tint((255, 255, 255), light));
                }
            }

            let trunk = tint(TRUNK, light);
            let canopy = tint(CANOPY, light);
            for inst in &scene.forest {
                let dist = inst.pos.distance(cam_pos);
                let p = vec3_to_rl(inst.pos);
                let s = inst.scale;
                match scene.forest_lod.select(dist) {
                    Some(0) => {
                        d3.draw_cylinder(p, 0.12 * s, 0.2 * s, 1.4 * s, 7, trunk);
                        d3.draw_sphere(
                            Vector3::new(p.x, p.y + 1.8 * s, p.z),
                            0.9 * s,
                            canopy,
                        );
                    }
                    Some(1) => {
                        d3.draw_cylinder(p, 0.0, 0.7 * s, 2.4 * s, 5, canopy);
                    }
                    Some(2) => {
                        d3.draw_cube(
                            Vector3::new(p.x, p.y + 1.2 * s, p.z),
                            0.5 * s,
                            2.4 * s,
                            0.5 * s,
                            canopy,
                        );
                    }
                    // Beyond the outermost band: culled this frame.
                    _ => {}
                }
            }

            for b in &scene.buildings {
                if b.pos.distance(cam_pos) > city_radius {
                    continue;
                }
                let extent = city_cell * b.scale;
                let facade = FACADES[b.kind as usize % FACADES.len()];
                d3.draw_cube(
                    vec3_to_rl(b.pos),
                    city_cell * 2.0,
                    extent * 2.0,
                    city_cell * 2.0,
                    tint(facade, light),
                );
            }

            if let Some(model) = self.bird_model.as_mut() {
                for bird in &scene.birds {
                    if bird.pose.pos.distance(cam_pos) > bird_radius {
                        continue;
                    }
                    model.set_transform(&mat4_to_rl(bird.model_matrix()));
                    d3.draw_model(&*model, Vector3::zero(), 1.0, tint((240, 240, 250), light));
                }
            }
            if let Some(model) = self.car_model.as_mut() {
                for car in &scene.cars {
                    if car.pose.pos.distance(cam_pos) > car_radius {
                        continue;
                    }
                    model.set_transform(&mat4_to_rl(car.model_matrix()));
                    d3.draw_model(&*model, Vector3::zero(), 1.0, tint((200, 60, 60), light));
                }
            }
        }

        let stats = scene.stats();
        d.draw_text(
            &format!(
                "trees {}  buildings {}  birds {}  cars {}",
                stats.trees, stats.buildings, stats.birds, stats.cars
            ),
            12,
            36,
            20,
            Color::DARKGRAY,
        );
        d.draw_fps(12, 12);
    }
}
