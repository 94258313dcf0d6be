use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// 0 -> 1
    FadeIn,
    /// 0 -> 1 -> 0, each leg lasting the full duration
    Flash,
}

/// Interpolation advanced by an external per-frame tick. Dropping it cancels it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    duration: f32,
    elapsed: f32,
    easing: Easing,
    shape: Shape,
}

impl Transition {
    pub fn fade_in(duration: f32, easing: Easing) -> Self {
        Self::with_shape(duration, easing, Shape::FadeIn)
    }

    pub fn flash(duration: f32, easing: Easing) -> Self {
        Self::with_shape(duration, easing, Shape::Flash)
    }

    fn with_shape(duration: f32, easing: Easing, shape: Shape) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        Self {
            duration,
            elapsed: 0.0,
            easing,
            shape,
        }
    }

    pub fn total_duration(&self) -> f32 {
        match self.shape {
            Shape::FadeIn => self.duration,
            Shape::Flash => 2.0 * self.duration,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    pub fn tick(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.total_duration());
        }
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return match self.shape {
                Shape::FadeIn => 1.0,
                Shape::Flash => 0.0,
            };
        }
        let t = self.elapsed / self.duration;
        match self.shape {
            Shape::FadeIn => self.easing.apply(t),
            Shape::Flash if t <= 1.0 => self.easing.apply(t),
            Shape::Flash => self.easing.apply(2.0 - t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/camo/transition.rs"]
mod tests;
