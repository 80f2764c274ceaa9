use crate::constants::{DEFAULT_ENCODER_SPEED, DEFAULT_FPS, TEMP_SUFFIX};
use crate::encoder::{write_gif, GifSettings};
use crate::error::Result;
use crate::geometry::{CropSpec, ResizeSpec};
use crate::interrupt::Interrupt;
use crate::output::validate_output;
use crate::progress::ProgressReporter;
use crate::prompt::Confirm;
use crate::resolver::resolve_inputs;
use crate::source_image::SourceImage;
use crate::tempfiles::TempFiles;
use crate::viewer::open_in_viewer;
use crate::verbose;
use std::path::{Path, PathBuf};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub inputs: Vec<String>,
    pub output: String,
    pub gif: GifSettings,
    pub crop: Option<CropSpec>,
    pub resize: Option<ResizeSpec>,
    pub show: bool,
}

impl PipelineOptions {
    /// Checks everything that can be checked without touching the
    /// filesystem: frame rate, encoder speed, and crop/resize tokens.
    pub fn new(
        inputs: Vec<String>,
        output: String,
        fps: Option<f64>,
        speed: Option<i32>,
        crop: Option<&[String]>,
        resize: Option<&[String]>,
        show: bool,
    ) -> Result<Self> {
        let gif = GifSettings::new(
            fps.unwrap_or(DEFAULT_FPS),
            speed.unwrap_or(DEFAULT_ENCODER_SPEED),
        )?;
        let crop = crop.map(CropSpec::parse).transpose()?;
        let resize = resize.map(ResizeSpec::parse).transpose()?;

        Ok(Self {
            inputs,
            output,
            gif,
            crop,
            resize,
            show,
        })
    }

    pub fn has_transform(&self) -> bool {
        self.crop.is_some() || self.resize.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Created,
    InputResolved,
    OutputValidated,
    Transforming,
    Encoding,
    Done,
    Aborted,
    Failed,
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    pub frame_count: usize,
    /// Every temp file the run created. All of them are deleted by the time
    /// the report is returned.
    pub temp_files: Vec<PathBuf>,
}

/// Image sequence to GIF conversion for one invocation.
///
/// Construction resolves the inputs and validates the output, so a pipeline
/// that exists is ready to run; any validation failure is returned from
/// [`SequencePipeline::new`] before anything is written.
#[derive(Debug)]
pub struct SequencePipeline {
    images: Vec<SourceImage>,
    output: PathBuf,
    options: PipelineOptions,
    state: PipelineState,
}

impl SequencePipeline {
    pub fn new(options: PipelineOptions, confirm: &mut dyn Confirm) -> Result<Self> {
        let mut state = PipelineState::Created;
        verbose!("Pipeline state: {:?}", state);

        let images = resolve_inputs(&options.inputs)?
            .into_iter()
            .map(SourceImage::new)
            .collect::<Result<Vec<_>>>()?;
        state = PipelineState::InputResolved;
        verbose!("Pipeline state: {:?} ({} images)", state, images.len());

        let output = validate_output(&options.output, confirm)?;
        state = PipelineState::OutputValidated;
        verbose!("Pipeline state: {:?} ({})", state, output.display());

        Ok(Self {
            images,
            output,
            options,
            state,
        })
    }

    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Transforms, decodes and encodes every image, then writes the GIF.
    ///
    /// Temp files created along the way are removed before this returns,
    /// whether the run succeeded, failed or was interrupted. An interrupt
    /// surfaces as [`crate::Seq2GifError::UserAbort`].
    pub fn run(&mut self, interrupt: &dyn Interrupt, progress: &ProgressReporter) -> Result<RunReport> {
        let mut temps = TempFiles::new();
        let result = self.assemble(&mut temps, interrupt, progress);

        let temp_files = temps.paths();
        let removed = temps.cleanup();
        verbose!("Cleaned up {} of {} temp files", removed, temp_files.len());

        match result {
            Ok(frame_count) => {
                self.transition(PipelineState::Done);
                if self.options.show {
                    if let Err(e) = open_in_viewer(&self.output) {
                        crate::warn!("Could not open {} in a viewer: {}", self.output.display(), e);
                    }
                }
                Ok(RunReport {
                    output: self.output.clone(),
                    frame_count,
                    temp_files,
                })
            }
            Err(e) => {
                progress.abandon();
                if e.is_user_abort() {
                    self.transition(PipelineState::Aborted);
                } else {
                    self.transition(PipelineState::Failed);
                }
                Err(e)
            }
        }
    }

    fn assemble(
        &mut self,
        temps: &mut TempFiles,
        interrupt: &dyn Interrupt,
        progress: &ProgressReporter,
    ) -> Result<usize> {
        let total = self.images.len() + 1;
        let mut frames = Vec::with_capacity(self.images.len());

        self.transition(PipelineState::Transforming);
        for (index, image) in self.images.iter().enumerate() {
            interrupt.check()?;

            let current = if self.options.has_transform() {
                let materialized = self.materialize(image, temps)?;
                verbose!(
                    "Transformed {} -> {}",
                    image.source_path().display(),
                    materialized.current_path().display()
                );
                materialized
            } else {
                image.clone()
            };

            progress.report(index, total, &format!("reading image: {}", current.file_name()));
            frames.push(current.decode_rgba()?);
        }

        self.transition(PipelineState::Encoding);
        progress.report(
            self.images.len(),
            total,
            &format!("writing gif: {}", self.output.display()),
        );
        let frame_count = frames.len();
        write_gif(frames, &self.output, &self.options.gif, interrupt)?;

        progress.finish(&format!("Done writing: {}", self.output.display()));
        Ok(frame_count)
    }

    /// Crop, then resize, then persist to a tracked temp file.
    fn materialize(&self, image: &SourceImage, temps: &mut TempFiles) -> Result<SourceImage> {
        let mut frame = image.load()?;
        if let Some(crop) = &self.options.crop {
            frame = frame.crop(crop)?;
        }
        if let Some(resize) = &self.options.resize {
            frame = frame.resize(resize)?;
        }
        let temp = frame.write_temp(TEMP_SUFFIX)?;
        Ok(image.materialized(temps.track(temp)))
    }

    fn transition(&mut self, next: PipelineState) {
        verbose!("Pipeline state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
