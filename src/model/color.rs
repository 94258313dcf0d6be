use serde::{Deserialize, Serialize};

/// Squared RGBA distance under which two samples compare equal.
pub const COLOR_EQ_EPSILON_SQ: f32 = 9.999_999_4e-11;

/// ITU-R BT.601 luma weights.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Marks "no target here" in the target-only render.
pub const SENTINEL: PixelSample = PixelSample::rgba(0.0, 0.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in turns, [0, 1).
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl PixelSample {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn grey(l: f32) -> Self {
        Self::rgb(l, l, l)
    }

    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self::rgba(
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
            px[3] as f32 / 255.0,
        )
    }

    pub fn from_rgb8(px: [u8; 3]) -> Self {
        Self::from_rgba8([px[0], px[1], px[2], u8::MAX])
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    pub fn approx_eq(&self, other: &PixelSample) -> bool {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        dr * dr + dg * dg + db * db + da * da < COLOR_EQ_EPSILON_SQ
    }

    pub fn is_sentinel(&self) -> bool {
        self.approx_eq(&SENTINEL)
    }

    pub fn luminance(&self) -> f32 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }

    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }
}

pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };
    if delta <= 0.0 {
        return Hsv { h: 0.0, s, v: max };
    }

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let mut h = sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    if h >= 1.0 {
        h -= 1.0;
    }
    Hsv { h, s, v: max }
}

pub fn hsv_to_rgb(hsv: Hsv) -> PixelSample {
    let Hsv { h, s, v } = hsv;
    if s <= 0.0 {
        return PixelSample::grey(v);
    }
    let h6 = (h - h.floor()) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => PixelSample::rgb(v, t, p),
        1 => PixelSample::rgb(q, v, p),
        2 => PixelSample::rgb(p, v, t),
        3 => PixelSample::rgb(p, q, v),
        4 => PixelSample::rgb(t, p, v),
        _ => PixelSample::rgb(v, p, q),
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
