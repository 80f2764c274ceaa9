pub const DEFAULT_FPS: f64 = 10.0;

pub const DEFAULT_ENCODER_SPEED: i32 = 10;
pub const MIN_ENCODER_SPEED: i32 = 1;
pub const MAX_ENCODER_SPEED: i32 = 30;

pub const PROGRESS_BAR_WIDTH: usize = 60;
pub const PROGRESS_CHARS: &str = "=-";

/// Inserted between the file stem and extension of transformed copies.
pub const TEMP_SUFFIX: &str = "_tmp";

pub const GIF_EXTENSION: &str = "gif";

/// Characters that turn a single `--input` value into a glob pattern.
pub const WILDCARD_CHARS: [char; 4] = ['*', '?', '[', ']'];

pub const CROP_USAGE: &str = "--crop WIDTH HEIGHT | --crop X Y WIDTH HEIGHT";
pub const RESIZE_USAGE: &str = "--resize PERCENT% | --resize WIDTH | --resize WIDTH HEIGHT";

pub const OVERWRITE_RETRY_MESSAGE: &str = "respond with 'yes' or 'no'";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const INFO_PREFIX: &str = "📋";
pub const OUTPUT_PREFIX: &str = "📁";
