pub mod palette;
pub mod transition;

use serde::Serialize;

use crate::model::color::PixelSample;
use palette::{ColorProbe, Palette, RampCycler, ShaderColor};
use transition::{Easing, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    /// Seconds to blend from the old palette to the new one.
    pub fade_duration: f32,
    pub flash_enabled: bool,
    /// Seconds per flash leg (in, then out).
    pub flash_duration: f32,
    pub update_flash: PixelSample,
    pub switch_flash: PixelSample,
    pub roll_flash: PixelSample,
    pub easing: Easing,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            fade_duration: 1.0,
            flash_enabled: true,
            flash_duration: 0.2,
            update_flash: PixelSample::rgb(1.0, 1.0, 1.0),
            switch_flash: PixelSample::rgb(0.2, 0.6, 1.0),
            roll_flash: PixelSample::rgb(1.0, 0.8, 0.2),
            easing: Easing::Linear,
        }
    }
}

/// Values the host copies into its camouflage material each frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShaderState {
    pub colors: Vec<ShaderColor>,
    pub color_transition: f32,
    pub emission_transition: f32,
    pub flash_color: Option<PixelSample>,
    pub ramp: usize,
}

/// Adaptive camouflage: a sampled palette, the ramp selection, and the
/// fade/flash animations that accompany each change.
#[derive(Debug, Clone)]
pub struct OpticCamo {
    palette: Palette,
    ramps: RampCycler,
    settings: EffectSettings,
    fade: Option<Transition>,
    flash: Option<(Transition, PixelSample)>,
}

impl OpticCamo {
    pub fn new(palette: Palette, ramp_count: usize, settings: EffectSettings) -> Option<Self> {
        Some(Self {
            palette,
            ramps: RampCycler::new(ramp_count)?,
            settings,
            fade: None,
            flash: None,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn update_colors(&mut self, probe: &mut dyn ColorProbe) -> usize {
        let updated = self.palette.pick(probe);
        tracing::debug!(updated, "palette sampled");
        self.start_flash(self.settings.update_flash);
        self.start_fade();
        updated
    }

    pub fn roll_colors(&mut self) {
        self.palette.roll();
        self.start_flash(self.settings.roll_flash);
        self.start_fade();
    }

    pub fn switch_ramp(&mut self) -> usize {
        self.start_flash(self.settings.switch_flash);
        let ramp = self.ramps.advance();
        tracing::debug!(ramp, "switched camouflage ramp");
        ramp
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_some() || self.flash.is_some()
    }

    pub fn tick(&mut self, dt: f32) -> ShaderState {
        let color_transition = match self.fade.as_mut() {
            Some(fade) => fade.tick(dt),
            None => 1.0,
        };
        let (emission_transition, flash_color) = match self.flash.as_mut() {
            Some((flash, color)) => (flash.tick(dt), Some(*color)),
            None => (0.0, None),
        };

        if self.fade.is_some_and(|f| f.is_finished()) {
            self.fade = None;
        }
        if self.flash.is_some_and(|(f, _)| f.is_finished()) {
            self.flash = None;
        }

        ShaderState {
            colors: self.palette.shader_params(),
            color_transition,
            emission_transition,
            flash_color,
            ramp: self.ramps.current(),
        }
    }

    fn start_fade(&mut self) {
        self.fade = Some(Transition::fade_in(
            self.settings.fade_duration,
            self.settings.easing,
        ));
    }

    fn start_flash(&mut self, color: PixelSample) {
        if !self.settings.flash_enabled {
            return;
        }
        self.flash = Some((
            Transition::flash(self.settings.flash_duration, self.settings.easing),
            color,
        ));
    }
}
