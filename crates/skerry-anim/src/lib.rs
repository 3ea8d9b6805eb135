//! Keyframe animation clips and a stateless interpolating sampler.
#![forbid(unsafe_code)]

use skerry_geom::{Quat, Vec3};

pub mod accessor;

use accessor::{Accessor, AccessorError, read_quats, read_scalars, read_vec3s};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelTarget {
    Translation,
    Rotation,
    Scale,
}

#[derive(Clone, Debug)]
pub enum ChannelValues {
    Vec3(Vec<Vec3>),
    Quat(Vec<Quat>),
}

impl ChannelValues {
    fn len(&self) -> usize {
        match self {
            ChannelValues::Vec3(v) => v.len(),
            ChannelValues::Quat(v) => v.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelError {
    Empty,
    /// `times[index]` does not strictly increase past its predecessor.
    UnsortedTimes { index: usize },
    LengthMismatch { times: usize, values: usize },
    /// Rotation channels carry quaternions; translation/scale carry Vec3.
    WrongArity,
    Accessor(AccessorError),
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::Empty => write!(f, "channel has no keyframes"),
            ChannelError::UnsortedTimes { index } => {
                write!(f, "keyframe time at index {} does not increase", index)
            }
            ChannelError::LengthMismatch { times, values } => {
                write!(f, "{} keyframe times but {} values", times, values)
            }
            ChannelError::WrongArity => write!(f, "value type does not match channel target"),
            ChannelError::Accessor(e) => write!(f, "accessor: {}", e),
        }
    }
}

impl std::error::Error for ChannelError {}

impl From<AccessorError> for ChannelError {
    fn from(e: AccessorError) -> Self {
        ChannelError::Accessor(e)
    }
}

/// One animated property: a sorted run of timestamped samples. Times are
/// validated strictly increasing at construction; malformed channels are
/// rejected rather than silently repaired.
#[derive(Clone, Debug)]
pub struct Channel {
    target: ChannelTarget,
    times: Vec<f32>,
    values: ChannelValues,
}

impl Channel {
    pub fn new(
        target: ChannelTarget,
        times: Vec<f32>,
        values: ChannelValues,
    ) -> Result<Channel, ChannelError> {
        if times.is_empty() {
            return Err(ChannelError::Empty);
        }
        if times.len() != values.len() {
            return Err(ChannelError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        for (i, pair) in times.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ChannelError::UnsortedTimes { index: i + 1 });
            }
        }
        let arity_ok = match (target, &values) {
            (ChannelTarget::Rotation, ChannelValues::Quat(_)) => true,
            (ChannelTarget::Translation, ChannelValues::Vec3(_)) => true,
            (ChannelTarget::Scale, ChannelValues::Vec3(_)) => true,
            _ => false,
        };
        if !arity_ok {
            return Err(ChannelError::WrongArity);
        }
        Ok(Channel {
            target,
            times,
            values,
        })
    }

    /// Decode a channel straight from interchange byte buffers through the
    /// typed accessor layer.
    pub fn from_buffers(
        target: ChannelTarget,
        time_acc: &Accessor,
        value_acc: &Accessor,
        time_buf: &[u8],
        value_buf: &[u8],
    ) -> Result<Channel, ChannelError> {
        let times = read_scalars(time_acc, time_buf)?;
        let values = match target {
            ChannelTarget::Rotation => ChannelValues::Quat(read_quats(value_acc, value_buf)?),
            ChannelTarget::Translation | ChannelTarget::Scale => {
                ChannelValues::Vec3(read_vec3s(value_acc, value_buf)?)
            }
        };
        Channel::new(target, times, values)
    }

    #[inline]
    pub fn target(&self) -> ChannelTarget {
        self.target
    }

    #[inline]
    pub fn last_time(&self) -> f32 {
        *self.times.last().unwrap_or(&0.0)
    }

    /// Bracketing keyframe pair for clip-local time `t`: `times[prev] <= t
    /// < times[next]`, clamped to the first/last key outside the range.
    /// Channels are short, so a linear scan is enough.
    fn bracket(&self, t: f32) -> (usize, usize) {
        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return (0, 0);
        }
        if t >= self.times[last] {
            return (last, last);
        }
        for i in 0..last {
            if t >= self.times[i] && t < self.times[i + 1] {
                return (i, i + 1);
            }
        }
        (last, last)
    }

    fn alpha(&self, t: f32, prev: usize, next: usize) -> f32 {
        let span = self.times[next] - self.times[prev];
        if span > 0.0 { (t - self.times[prev]) / span } else { 0.0 }
    }
}

/// Interpolated contribution of one clip at one instant. Untouched
/// properties stay `None` so a clip with no channels contributes identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformSample {
    pub translation: Option<Vec3>,
    /// Euler degrees in the engine's working rotation order.
    pub rotation_deg: Option<Vec3>,
    pub scale: Option<Vec3>,
}

/// A named set of channels, shared read-only by every actor instance that
/// plays it.
#[derive(Clone, Debug)]
pub struct AnimClip {
    pub name: String,
    channels: Vec<Channel>,
}

impl AnimClip {
    pub fn new(name: impl Into<String>, channels: Vec<Channel>) -> AnimClip {
        AnimClip {
            name: name.into(),
            channels,
        }
    }

    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Max final keyframe time across channels; 0 for an empty clip.
    pub fn duration(&self) -> f32 {
        self.channels
            .iter()
            .map(|c| c.last_time())
            .fold(0.0, f32::max)
    }

    /// Stateless sample at clip-local `t` (already wrapped into
    /// `[0, duration)` by the owner). Translation and scale lerp
    /// component-wise; rotation slerps over unit quaternions and lands in
    /// Euler degrees for composition with other transform sources.
    pub fn sample(&self, t: f32) -> TransformSample {
        let mut out = TransformSample::default();
        for ch in &self.channels {
            let (prev, next) = ch.bracket(t);
            let a = ch.alpha(t, prev, next);
            match (&ch.values, ch.target) {
                (ChannelValues::Vec3(vals), ChannelTarget::Translation) => {
                    out.translation = Some(vals[prev].lerp(vals[next], a));
                }
                (ChannelValues::Vec3(vals), ChannelTarget::Scale) => {
                    out.scale = Some(vals[prev].lerp(vals[next], a));
                }
                (ChannelValues::Quat(vals), ChannelTarget::Rotation) => {
                    out.rotation_deg = Some(vals[prev].slerp(vals[next], a).to_euler_deg());
                }
                // Construction rejects mismatched arity.
                _ => {}
            }
        }
        out
    }
}

/// Wrap an advancing clock into `[0, duration)`. Non-positive durations
/// pin the clock to 0.
#[inline]
pub fn wrap_time(t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let m = t % duration;
    if m < 0.0 { m + duration } else { m }
}
