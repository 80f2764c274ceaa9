pub mod cli;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod interrupt;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod resolver;
pub mod source_image;
pub mod tempfiles;
pub mod viewer;

pub use encoder::{encode_gif, write_gif, GifSettings};
pub use error::{Result, Seq2GifError};
pub use geometry::{CropSpec, ResizeSpec};
pub use interrupt::{Interrupt, InterruptFlag};
pub use output::{coerce_gif_extension, validate_output};
pub use pipeline::{PipelineOptions, PipelineState, RunReport, SequencePipeline};
pub use progress::ProgressReporter;
pub use prompt::{Confirm, TerminalConfirm};
pub use resolver::resolve_inputs;
pub use source_image::{Frame, SourceImage};
pub use tempfiles::TempFiles;
