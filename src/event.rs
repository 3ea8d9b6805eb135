use skerry_geom::Vec3;
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RegenCause {
    ConfigReload,
    Manual,
}

/// Commands the frame loop feeds the app. Input is translated into these
/// rather than mutating state from callbacks.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    MovementRequested {
        /// Wish direction in camera space: x = right, y = up, z = forward.
        wish: Vec3,
        yaw_delta: f32,
        pitch_delta: f32,
        sprint: bool,
    },
    CaptureToggled,
    RegenerateRequested {
        cause: RegenCause,
    },
}

/// FIFO command queue drained once per tick.
pub struct EventQueue {
    q: VecDeque<Event>,
    pub tick: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            q: VecDeque::new(),
            tick: 0,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, ev: Event) {
        self.q.push_back(ev);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.q.pop_front()
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
