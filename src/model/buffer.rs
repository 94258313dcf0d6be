use serde::Serialize;

use crate::error::CamoError;
use crate::model::color::PixelSample;

/// Pixel rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major colour samples of one rectangular render or crop.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    width: u32,
    height: u32,
    pixels: Vec<PixelSample>,
}

impl ColorBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<PixelSample>) -> Result<Self, CamoError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(CamoError::InvalidBuffer(format!(
                "{}x{} needs {} pixels, got {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Single-row buffer, handy when only the sample order matters.
    pub fn from_samples(pixels: Vec<PixelSample>) -> Self {
        Self {
            width: pixels.len() as u32,
            height: u32::from(!pixels.is_empty()),
            pixels,
        }
    }

    pub fn filled(width: u32, height: u32, color: PixelSample) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[PixelSample] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&PixelSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    pub fn crop(&self, rect: CropRect) -> Result<ColorBuffer, CamoError> {
        let fits = rect.x.checked_add(rect.width).is_some_and(|r| r <= self.width)
            && rect.y.checked_add(rect.height).is_some_and(|b| b <= self.height);
        if !fits {
            return Err(CamoError::CropOutOfBounds {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                buffer_width: self.width,
                buffer_height: self.height,
            });
        }

        let mut out = Vec::with_capacity(rect.area());
        let stride = self.width as usize;
        for row in rect.y..rect.y + rect.height {
            let start = row as usize * stride + rect.x as usize;
            out.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Ok(ColorBuffer {
            width: rect.width,
            height: rect.height,
            pixels: out,
        })
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba8());
        }
        out
    }

    pub fn into_pixels(self) -> Vec<PixelSample> {
        self.pixels
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/buffer.rs"]
mod tests;
