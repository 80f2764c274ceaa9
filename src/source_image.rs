use crate::error::{Seq2GifError, Result};
use crate::geometry::{CropSpec, ResizeSpec};
use crate::resolver::absolutize;
use crate::verbose;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// One input of the sequence.
///
/// `source_path` is fixed at construction. `current_path` is the file that
/// will be decoded into a GIF frame: the source itself, or a transformed
/// copy produced by [`Frame::write_temp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    source_path: PathBuf,
    current_path: PathBuf,
}

impl SourceImage {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Seq2GifError::FileNotFound(path.to_path_buf()));
        }
        let source_path = absolutize(path)?;
        Ok(Self {
            current_path: source_path.clone(),
            source_path,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn is_materialized(&self) -> bool {
        self.current_path != self.source_path
    }

    /// The same input, now read from `path`.
    pub fn materialized(&self, path: PathBuf) -> Self {
        Self {
            source_path: self.source_path.clone(),
            current_path: path,
        }
    }

    pub fn file_name(&self) -> String {
        self.current_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.current_path.display().to_string())
    }

    /// Decodes the source file for transformation.
    pub fn load(&self) -> Result<Frame> {
        let image = ImageReader::open(&self.source_path)?
            .with_guessed_format()?
            .decode()?;
        Ok(Frame::new(image, self.source_path.clone()))
    }

    /// Decodes `current_path` into RGBA pixels ready for the GIF encoder.
    pub fn decode_rgba(&self) -> Result<RgbaImage> {
        let image = ImageReader::open(&self.current_path)?
            .with_guessed_format()?
            .decode()?;
        Ok(image.into_rgba8())
    }
}

/// Decoded pixels of a source image. Transforms return a new `Frame`.
#[derive(Debug, Clone)]
pub struct Frame {
    image: DynamicImage,
    origin: PathBuf,
}

impl Frame {
    pub fn new(image: DynamicImage, origin: PathBuf) -> Self {
        Self { image, origin }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Cuts `spec` out of the frame. The result is always exactly
    /// `spec.width` x `spec.height`; any part of the box past the image edge
    /// is filled with black (transparent black when the source has alpha).
    pub fn crop(&self, spec: &CropSpec) -> Result<Frame> {
        let (width, height) = self.dimensions();
        let fits = spec.x < width
            && spec.y < height
            && spec.width <= width - spec.x
            && spec.height <= height - spec.y;
        if fits {
            let cropped = self.image.crop_imm(spec.x, spec.y, spec.width, spec.height);
            return Ok(Frame::new(cropped, self.origin.clone()));
        }

        verbose!(
            "Crop box {}x{}+{}+{} runs past the {}x{} image {}, padding",
            spec.width,
            spec.height,
            spec.x,
            spec.y,
            width,
            height,
            self.origin.display()
        );
        // crop_imm clamps, so this is the in-bounds part (possibly empty).
        let visible = self.image.crop_imm(spec.x, spec.y, spec.width, spec.height);
        let padded = if self.image.color().has_alpha() {
            let mut canvas = RgbaImage::new(spec.width, spec.height);
            imageops::replace(&mut canvas, &visible.to_rgba8(), 0, 0);
            DynamicImage::ImageRgba8(canvas)
        } else {
            let mut canvas = RgbImage::new(spec.width, spec.height);
            imageops::replace(&mut canvas, &visible.to_rgb8(), 0, 0);
            DynamicImage::ImageRgb8(canvas)
        };
        Ok(Frame::new(padded, self.origin.clone()))
    }

    pub fn resize(&self, spec: &ResizeSpec) -> Result<Frame> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(Seq2GifError::InvalidGeometry(format!(
                "cannot resize empty image {}",
                self.origin.display()
            )));
        }
        let (new_width, new_height) = spec.target_dimensions(width, height);
        if (new_width, new_height) == (width, height) {
            return Ok(self.clone());
        }
        let resized = self
            .image
            .resize_exact(new_width, new_height, FilterType::Lanczos3);
        Ok(Frame::new(resized, self.origin.clone()))
    }

    /// Saves the frame to a fresh file in the system temp directory named
    /// after the source with `suffix` inserted before the extension.
    ///
    /// The source format is kept when it can be written losslessly enough for
    /// re-reading; anything else is stored as PNG.
    pub fn write_temp(&self, suffix: &str) -> Result<TempPath> {
        let stem = self
            .origin
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());

        let (format, extension) = match ImageFormat::from_path(&self.origin) {
            Ok(
                format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Tiff),
            ) => {
                let extension = self
                    .origin
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| format.extensions_str()[0].to_string());
                (format, extension)
            }
            _ => (ImageFormat::Png, "png".to_string()),
        };

        let path = tempfile::Builder::new()
            .prefix(&format!("{}{}", stem, suffix))
            .suffix(&format!(".{}", extension))
            .tempfile()?
            .into_temp_path();

        if format == ImageFormat::Jpeg {
            DynamicImage::ImageRgb8(self.image.to_rgb8()).save_with_format(&path, format)?;
        } else {
            self.image.save_with_format(&path, format)?;
        }

        Ok(path)
    }
}
