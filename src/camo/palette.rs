use serde::Serialize;

use crate::model::color::PixelSample;

pub const SLOT_COUNT: usize = 4;

/// Samples an environment colour for one palette slot, e.g. from a ray hit.
/// `None` means nothing usable was hit.
pub trait ColorProbe {
    fn sample(&mut self, slot: usize) -> Option<PixelSample>;
}

impl<F> ColorProbe for F
where
    F: FnMut(usize) -> Option<PixelSample>,
{
    fn sample(&mut self, slot: usize) -> Option<PixelSample> {
        self(slot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShaderColor {
    pub name: String,
    pub color: PixelSample,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: [PixelSample; SLOT_COUNT],
    old_colors: [PixelSample; SLOT_COUNT],
}

impl Palette {
    pub fn new(colors: [PixelSample; SLOT_COUNT]) -> Self {
        Self {
            colors,
            old_colors: colors,
        }
    }

    pub fn colors(&self) -> &[PixelSample; SLOT_COUNT] {
        &self.colors
    }

    pub fn old_colors(&self) -> &[PixelSample; SLOT_COUNT] {
        &self.old_colors
    }

    /// Returns how many slots received a new colour.
    pub fn pick(&mut self, probe: &mut dyn ColorProbe) -> usize {
        let mut updated = 0;
        for slot in 0..SLOT_COUNT {
            match probe.sample(slot) {
                Some(color) => {
                    self.old_colors[slot] = self.colors[slot];
                    self.colors[slot] = color;
                    updated += 1;
                }
                None => {
                    tracing::debug!(slot, "probe hit nothing, keeping colour");
                }
            }
        }
        updated
    }

    /// Rotates right: `[a, b, c, d]` becomes `[d, a, b, c]`.
    pub fn roll(&mut self) {
        self.old_colors = self.colors;
        self.colors.rotate_right(1);
    }

    pub fn shader_params(&self) -> Vec<ShaderColor> {
        let mut out = Vec::with_capacity(SLOT_COUNT * 2);
        for slot in 0..SLOT_COUNT {
            out.push(ShaderColor {
                name: format!("color_{:02}", slot + 1),
                color: self.colors[slot],
            });
            out.push(ShaderColor {
                name: format!("old_color_{:02}", slot + 1),
                color: self.old_colors[slot],
            });
        }
        out
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([PixelSample::grey(0.5); SLOT_COUNT])
    }
}

/// Cycles through the available camouflage ramps, wrapping to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampCycler {
    count: usize,
    current: usize,
}

impl RampCycler {
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { count, current: 0 })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/camo/palette.rs"]
mod tests;
