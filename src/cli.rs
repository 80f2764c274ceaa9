use crate::constants::{DEFAULT_ENCODER_SPEED, DEFAULT_FPS};
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "seq2gif",
    about = "Convert an image sequence to an animated GIF",
    long_about = "seq2gif assembles a list of still images, or every file matching a wildcard \
                  pattern, into an animated GIF. Frames can be cropped and resized on the way in.",
    version,
    after_help = "EXAMPLES:\n  \
    seq2gif -i \"shots/frame_*.png\" -o anim.gif\n  \
    seq2gif -i a.jpg b.jpg c.jpg -o anim.gif -fps 5 -r 50%\n  \
    seq2gif -i \"~/render/*.png\" -o out.gif -c 125 125 250 250 -r 100 -s"
)]
pub struct Args {
    #[arg(
        short = 'o',
        long,
        help = "Output GIF file path",
        long_help = "Where the GIF is written. Any extension other than .gif is replaced with .gif. \
                     If the file exists you are asked before it is overwritten."
    )]
    pub output: String,

    #[arg(
        short = 'i',
        long,
        num_args = 1..,
        required = true,
        help = "Input images, or one pattern using * ? [ ] wildcards",
        long_help = "Two or more image files, used in the order given, or a single quoted wildcard \
                     pattern whose matches are sorted by name."
    )]
    pub input: Vec<String>,

    #[arg(
        long = "framesPerSecond",
        visible_alias = "fps",
        default_value_t = DEFAULT_FPS,
        help = "Frames per second (default: 10)",
        long_help = "Playback rate of the GIF. Each frame is shown for 1/fps seconds. \
                     Also accepted as -fps."
    )]
    pub fps: f64,

    #[arg(
        short = 'r',
        long,
        num_args = 1..,
        value_name = "SIZE",
        help = "Resize frames: PERCENT%, WIDTH, or WIDTH HEIGHT",
        long_help = "Resize every frame. '50%' scales both sides, a single WIDTH keeps the aspect \
                     ratio, WIDTH HEIGHT sets both sides exactly. Applied after --crop."
    )]
    pub resize: Option<Vec<String>>,

    #[arg(
        short = 'c',
        long,
        num_args = 1..,
        value_name = "BOX",
        help = "Crop frames: WIDTH HEIGHT, or X Y WIDTH HEIGHT",
        long_help = "Crop every frame. With two values the box starts at the top-left corner."
    )]
    pub crop: Option<Vec<String>>,

    #[arg(short = 's', long, help = "Open the GIF in the default viewer when done")]
    pub show: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_ENCODER_SPEED,
        help = "GIF encoder speed, 1 (best quality) to 30 (fastest)"
    )]
    pub speed: i32,

    #[arg(short = 'q', long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print every pipeline step")]
    pub verbose: bool,
}

/// Rewrites the single-dash `-fps` spelling to `--fps` so clap accepts it.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-fps") => OsString::from("--fps"),
            Some(s) if s.starts_with("-fps=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}
