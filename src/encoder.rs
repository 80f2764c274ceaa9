use crate::constants::{MAX_ENCODER_SPEED, MIN_ENCODER_SPEED};
use crate::error::{Seq2GifError, Result};
use crate::interrupt::Interrupt;
use image::codecs::gif::{GifEncoder, Repeat};
use crate::verbose;
use image::{Delay, Frame as GifFrame, RgbaImage};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GifSettings {
    pub fps: f64,
    /// Quantizer speed passed to the encoder, 1 (best) to 30 (fastest).
    pub speed: i32,
}

impl GifSettings {
    pub fn new(fps: f64, speed: i32) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(Seq2GifError::InvalidFrameRate(fps));
        }
        if !(MIN_ENCODER_SPEED..=MAX_ENCODER_SPEED).contains(&speed) {
            return Err(Seq2GifError::InvalidSpeed(
                speed,
                MIN_ENCODER_SPEED,
                MAX_ENCODER_SPEED,
            ));
        }
        Ok(Self { fps, speed })
    }

    /// How long each frame is shown: `1 / fps` seconds.
    pub fn frame_delay(&self) -> Delay {
        Delay::from_saturating_duration(Duration::from_secs_f64(1.0 / self.fps))
    }
}

/// Encodes `frames` into an infinitely looping GIF held in memory.
///
/// `interrupt` is polled before every frame; once set, encoding stops with
/// [`Seq2GifError::UserAbort`].
pub fn encode_gif(
    frames: Vec<RgbaImage>,
    settings: &GifSettings,
    interrupt: &dyn Interrupt,
) -> Result<Vec<u8>> {
    let delay = settings.frame_delay();
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, settings.speed);
        encoder.set_repeat(Repeat::Infinite)?;
        for pixels in frames {
            interrupt.check()?;
            encoder.encode_frame(GifFrame::from_parts(pixels, 0, 0, delay))?;
        }
    }
    Ok(bytes)
}

/// Encodes the whole animation, writes it to a temp file in the output's
/// directory and renames that over `output`. An interrupted or failed run
/// never leaves a truncated GIF, and an existing file is only replaced once
/// the new one is complete.
pub fn write_gif(
    frames: Vec<RgbaImage>,
    output: &Path,
    settings: &GifSettings,
    interrupt: &dyn Interrupt,
) -> Result<()> {
    let bytes = encode_gif(frames, settings, interrupt)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&bytes)?;
    staged.as_file().sync_all()?;
    verbose!("Staged {} bytes at {}", bytes.len(), staged.path().display());

    staged.persist(output)?;
    Ok(())
}
