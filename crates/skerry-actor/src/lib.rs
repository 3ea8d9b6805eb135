//! Mobile actors: procedural path drivers composed with sampled keyframe
//! animation. Motion is purely kinematic.
#![forbid(unsafe_code)]

use skerry_anim::{AnimClip, TransformSample, wrap_time};
use skerry_geom::{Mat4, Vec3};

/// Position, Euler rotation (degrees), and scale of one renderable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Pose {
    pub fn matrix(&self) -> Mat4 {
        Mat4::compose_trs(self.pos, self.rotation_deg, self.scale)
    }
}

/// Yaw (degrees) that faces `from` toward `to`, measured the way the
/// imported models expect: atan2 over (dx, dz) plus a 180-degree forward
/// correction. A degenerate direction reports `None` so the caller keeps
/// its previous heading.
pub fn yaw_towards(from: Vec3, to: Vec3) -> Option<f32> {
    let dir = to - from;
    if dir.length() <= f32::EPSILON {
        return None;
    }
    let dir = dir.normalized();
    Some(dir.x.atan2(dir.z).to_degrees() + 180.0)
}

/// Constant-rate orbit in the horizontal plane. Heading is derived by
/// evaluating the path a small step ahead and yawing toward that point,
/// which keeps the turn smooth without storing a velocity.
#[derive(Clone, Copy, Debug)]
pub struct CircularPath {
    pub center: Vec3,
    pub radius: f32,
    /// Angular speed in degrees per second.
    pub speed_deg: f32,
    pub phase_deg: f32,
    /// Lookahead expressed as a multiple of the per-frame phase step.
    pub lookahead: f32,
}

impl CircularPath {
    pub fn new(center: Vec3, radius: f32, speed_deg: f32) -> Self {
        Self {
            center,
            radius,
            speed_deg,
            phase_deg: 0.0,
            lookahead: 10.0,
        }
    }

    fn point_at(&self, phase_deg: f32) -> Vec3 {
        let r = phase_deg.to_radians();
        Vec3::new(
            self.center.x + self.radius * r.cos(),
            self.center.y,
            self.center.z + self.radius * r.sin(),
        )
    }

    /// Advance by `dt` seconds; returns the new position and, when the
    /// lookahead direction is non-degenerate, the new yaw.
    pub fn advance(&mut self, dt: f32) -> (Vec3, Option<f32>) {
        let step = self.speed_deg * dt;
        self.phase_deg = (self.phase_deg + step).rem_euclid(360.0);
        let pos = self.point_at(self.phase_deg);
        let ahead = self.point_at((self.phase_deg + step * self.lookahead).rem_euclid(360.0));
        (pos, yaw_towards(pos, ahead))
    }
}

/// Back-and-forth patrol between two endpoints at constant speed. On
/// arrival (within `arrive_eps`) the target flips to the opposite
/// endpoint; the traversal never terminates.
#[derive(Clone, Copy, Debug)]
pub struct LinearPath {
    pub start: Vec3,
    pub end: Vec3,
    pub speed: f32,
    pub target: Vec3,
    pub moving_forward: bool,
    pub arrive_eps: f32,
}

impl LinearPath {
    pub fn new(start: Vec3, end: Vec3, speed: f32) -> Self {
        Self {
            start,
            end,
            speed,
            target: end,
            moving_forward: true,
            arrive_eps: 0.1,
        }
    }

    /// Advance `pos` by `dt` seconds toward the current target; returns
    /// the new position and yaw toward the target.
    pub fn advance(&mut self, pos: Vec3, dt: f32) -> (Vec3, Option<f32>) {
        if self.target.distance(pos) < self.arrive_eps {
            self.moving_forward = !self.moving_forward;
            self.target = if self.moving_forward {
                self.end
            } else {
                self.start
            };
        }
        let dir = (self.target - pos).normalized();
        let next = pos + dir * (self.speed * dt);
        (next, yaw_towards(next, self.target))
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PathKind {
    Circular(CircularPath),
    Linear(LinearPath),
}

/// Per-actor animation clock: elapsed clip-local time, wrapped against the
/// shared clip's duration every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimState {
    pub time: f32,
}

impl AnimState {
    pub fn advance(&mut self, dt: f32, clip: &AnimClip) -> TransformSample {
        self.time = wrap_time(self.time + dt, clip.duration());
        clip.sample(self.time)
    }
}

/// One mobile actor: a path driver, an optional shared clip reference, and
/// the pose the renderer consumes. The clip pool is owned elsewhere; the
/// actor stores only its index.
pub struct Actor {
    pub path: PathKind,
    pub clip: Option<usize>,
    pub anim: AnimState,
    pub pose: Pose,
    local: TransformSample,
}

impl Actor {
    pub fn new(path: PathKind, clip: Option<usize>, pose: Pose) -> Actor {
        Actor {
            path,
            clip,
            anim: AnimState::default(),
            pose,
            local: TransformSample::default(),
        }
    }

    /// One simulation tick: advance the path, advance and wrap the clip
    /// clock, refresh pose and the local animation contribution.
    pub fn update(&mut self, dt: f32, clips: &[AnimClip]) {
        match &mut self.path {
            PathKind::Circular(c) => {
                let (pos, yaw) = c.advance(dt);
                self.pose.pos = pos;
                if let Some(yaw) = yaw {
                    self.pose.rotation_deg.y = yaw;
                }
            }
            PathKind::Linear(l) => {
                let (pos, yaw) = l.advance(self.pose.pos, dt);
                self.pose.pos = pos;
                if let Some(yaw) = yaw {
                    self.pose.rotation_deg.y = yaw;
                }
            }
        }
        self.local = match self.clip.and_then(|i| clips.get(i)) {
            Some(clip) => self.anim.advance(dt, clip),
            None => TransformSample::default(),
        };
    }

    /// World transform: path pose times the sampled local pose. The two
    /// sources are independent and compose multiplicatively.
    pub fn model_matrix(&self) -> Mat4 {
        let local = Mat4::compose_trs(
            self.local.translation.unwrap_or(Vec3::ZERO),
            self.local.rotation_deg.unwrap_or(Vec3::ZERO),
            self.local.scale.unwrap_or(Vec3::ONE),
        );
        self.pose.matrix().mul(&local)
    }
}
