use raylib::prelude::*;

pub struct FlyCamera {
    pub position: Vector3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub captured: bool,
}

impl FlyCamera {
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            yaw: -45.0,
            pitch: -15.0,
            move_speed: 40.0,
            mouse_sensitivity: 0.1,
            captured: true,
        }
    }

    pub fn to_camera3d(&self) -> Camera3D {
        let forward = self.forward();
        Camera3D::perspective(
            self.position,
            self.position + forward,
            Vector3::new(0.0, 1.0, 0.0),
            70.0,
        )
    }

    pub fn forward(&self) -> Vector3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vector3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalized()
    }

    pub fn right(&self) -> Vector3 {
        self.forward().cross(Vector3::up()).normalized()
    }

    /// Apply one tick's worth of movement command. `wish` is camera-space
    /// (x right, y up, z forward) and gets normalized here.
    pub fn apply_movement(
        &mut self,
        wish: Vector3,
        yaw_delta: f32,
        pitch_delta: f32,
        sprint: bool,
        dt: f32,
    ) {
        if self.captured {
            self.yaw += yaw_delta * self.mouse_sensitivity;
            self.pitch -= pitch_delta * self.mouse_sensitivity;
            self.pitch = self.pitch.clamp(-89.9, 89.9);
        }

        let mut dir = Vector3::zero();
        dir += self.forward() * wish.z;
        dir += self.right() * wish.x;
        dir += Vector3::up() * wish.y;
        if dir.length() > 0.0 {
            let speed = if sprint {
                self.move_speed * 3.0
            } else {
                self.move_speed
            };
            self.position += dir.normalized() * speed * dt;
        }
    }
}
