use crate::constants::{CROP_USAGE, RESIZE_USAGE};
use crate::error::{Seq2GifError, Result};

/// A crop box in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSpec {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropSpec {
    /// Builds a crop box, rejecting empty or overflowing regions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        let right = x.checked_add(width);
        let bottom = y.checked_add(height);
        match (right, bottom) {
            (Some(r), Some(b)) if x < r && y < b => Ok(Self {
                x,
                y,
                width,
                height,
            }),
            _ => Err(Seq2GifError::InvalidGeometry(format!(
                "crop box {}x{}+{}+{} is empty or out of range. Usage: {}",
                width, height, x, y, CROP_USAGE
            ))),
        }
    }

    /// Parses `WIDTH HEIGHT` (anchored at the origin) or `X Y WIDTH HEIGHT`.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let values = tokens
            .iter()
            .map(|t| parse_pixels(t.as_ref(), CROP_USAGE))
            .collect::<Result<Vec<u32>>>()?;

        match values.as_slice() {
            [width, height] => Self::new(0, 0, *width, *height),
            [x, y, width, height] => Self::new(*x, *y, *width, *height),
            _ => Err(Seq2GifError::InvalidGeometry(format!(
                "expected 2 or 4 crop values, got {}. Usage: {}",
                values.len(),
                CROP_USAGE
            ))),
        }
    }
}

/// How to scale each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeSpec {
    /// Scale both axes by `percent / 100`.
    Percent(f64),
    /// Fixed width, height follows the aspect ratio.
    Width(u32),
    Exact { width: u32, height: u32 },
}

impl ResizeSpec {
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        match tokens {
            [single] => {
                let single = single.as_ref().trim();
                if let Some(number) = single.strip_suffix('%') {
                    let percent: f64 = number.trim().parse().map_err(|_| {
                        Seq2GifError::InvalidGeometry(format!(
                            "invalid percentage '{}'. Usage: {}",
                            single, RESIZE_USAGE
                        ))
                    })?;
                    if !percent.is_finite() || percent <= 0.0 {
                        return Err(Seq2GifError::InvalidGeometry(format!(
                            "percentage must be greater than 0, got '{}'. Usage: {}",
                            single, RESIZE_USAGE
                        )));
                    }
                    Ok(ResizeSpec::Percent(percent))
                } else {
                    Ok(ResizeSpec::Width(parse_positive(single, RESIZE_USAGE)?))
                }
            }
            [width, height] => Ok(ResizeSpec::Exact {
                width: parse_positive(width.as_ref(), RESIZE_USAGE)?,
                height: parse_positive(height.as_ref(), RESIZE_USAGE)?,
            }),
            _ => Err(Seq2GifError::InvalidGeometry(format!(
                "expected 1 or 2 resize values, got {}. Usage: {}",
                tokens.len(),
                RESIZE_USAGE
            ))),
        }
    }

    /// Dimensions a `width`x`height` image takes after this resize. Never below 1x1.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ResizeSpec::Percent(percent) => {
                let factor = percent / 100.0;
                (scale(width, factor), scale(height, factor))
            }
            ResizeSpec::Width(new_width) => {
                let factor = new_width as f64 / width.max(1) as f64;
                (new_width, scale(height, factor))
            }
            ResizeSpec::Exact { width, height } => (width, height),
        }
    }
}

fn scale(value: u32, factor: f64) -> u32 {
    let scaled = (value as f64 * factor).round();
    scaled.clamp(1.0, u32::MAX as f64) as u32
}

fn parse_pixels(token: &str, usage: &str) -> Result<u32> {
    token.trim().parse().map_err(|_| {
        Seq2GifError::InvalidGeometry(format!(
            "'{}' is not a pixel value. Usage: {}",
            token, usage
        ))
    })
}

fn parse_positive(token: &str, usage: &str) -> Result<u32> {
    match parse_pixels(token, usage)? {
        0 => Err(Seq2GifError::InvalidGeometry(format!(
            "size must be greater than 0. Usage: {}",
            usage
        ))),
        value => Ok(value),
    }
}
