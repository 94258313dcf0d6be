use std::fmt;

use serde::Serialize;

use crate::model::color::Hsv;
use crate::model::config::RatingMode;
use crate::pipeline::stage2_classify::ClassifiedPixel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Target,
    Background,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Target => f.write_str("target"),
            Group::Background => f.write_str("background"),
        }
    }
}

/// Running sums for one pixel group. Luminance uses the first channel only;
/// HSV uses hue, saturation, value in order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateStats {
    pub count: usize,
    sums: [f64; 3],
}

impl AggregateStats {
    fn push(&mut self, values: [f32; 3]) {
        self.count += 1;
        for (sum, v) in self.sums.iter_mut().zip(values) {
            *sum += v as f64;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn mean(&self, channel: usize) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        Some((self.sums[channel] / self.count as f64) as f32)
    }

    pub fn mean_luminance(&self) -> Option<f32> {
        self.mean(0)
    }

    pub fn mean_hsv(&self) -> Option<Hsv> {
        Some(Hsv {
            h: self.mean(0)?,
            s: self.mean(1)?,
            v: self.mean(2)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulated {
    pub mode: RatingMode,
    pub background: AggregateStats,
    pub target: AggregateStats,
}

impl Accumulated {
    pub fn group(&self, group: Group) -> &AggregateStats {
        match group {
            Group::Target => &self.target,
            Group::Background => &self.background,
        }
    }

    /// First group without samples, target checked before background.
    pub fn empty_group(&self) -> Option<Group> {
        if self.target.is_empty() {
            Some(Group::Target)
        } else if self.background.is_empty() {
            Some(Group::Background)
        } else {
            None
        }
    }
}

pub fn accumulate<I>(pixels: I, mode: RatingMode) -> Accumulated
where
    I: IntoIterator<Item = ClassifiedPixel>,
{
    let mut background = AggregateStats::default();
    let mut target = AggregateStats::default();

    match mode {
        RatingMode::Luminance => {
            for px in pixels {
                // background covers every pixel, target included
                background.push([px.general.luminance(), 0.0, 0.0]);
                if px.is_target {
                    target.push([px.target.luminance(), 0.0, 0.0]);
                }
            }
        }
        RatingMode::Hsv => {
            for px in pixels {
                if !px.general.approx_eq(&px.target) {
                    let hsv = px.general.to_hsv();
                    background.push([hsv.h, hsv.s, hsv.v]);
                }
                if px.is_target {
                    let hsv = px.target.to_hsv();
                    target.push([hsv.h, hsv.s, hsv.v]);
                }
            }
        }
    }

    Accumulated {
        mode,
        background,
        target,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_accumulate.rs"]
mod tests;
