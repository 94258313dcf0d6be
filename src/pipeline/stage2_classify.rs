use std::iter::Zip;
use std::slice::Iter;

use crate::error::CamoError;
use crate::model::buffer::ColorBuffer;
use crate::model::color::PixelSample;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedPixel {
    pub general: PixelSample,
    pub target: PixelSample,
    pub is_target: bool,
}

/// Lazy pass over two equal-length buffers. Cloning restarts from the current position.
#[derive(Debug, Clone)]
pub struct Classified<'a> {
    pairs: Zip<Iter<'a, PixelSample>, Iter<'a, PixelSample>>,
}

impl Iterator for Classified<'_> {
    type Item = ClassifiedPixel;

    fn next(&mut self) -> Option<Self::Item> {
        let (general, target) = self.pairs.next()?;
        Some(ClassifiedPixel {
            general: *general,
            target: *target,
            is_target: !target.is_sentinel(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for Classified<'_> {}

pub fn classify<'a>(
    general: &'a ColorBuffer,
    target: &'a ColorBuffer,
) -> Result<Classified<'a>, CamoError> {
    if general.len() != target.len()
        || general.width() != target.width()
        || general.height() != target.height()
    {
        return Err(CamoError::shape_mismatch(general, target));
    }
    Ok(Classified {
        pairs: general.pixels().iter().zip(target.pixels().iter()),
    })
}
