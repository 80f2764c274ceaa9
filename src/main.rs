use anyhow::Context;
use clap::Parser;
use seq2gif::cli::{normalize_args, Args};
use seq2gif::constants::{INFO_PREFIX, OUTPUT_PREFIX, SUCCESS_PREFIX};
use seq2gif::logger::{self, Verbosity};
use seq2gif::{
    error, info, InterruptFlag, PipelineOptions, ProgressReporter, Seq2GifError, SequencePipeline,
    TerminalConfirm,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_user_abort(&e) => {
            info!("Aborted by user");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = PipelineOptions::new(
        args.input,
        args.output,
        Some(args.fps),
        Some(args.speed),
        args.crop.as_deref(),
        args.resize.as_deref(),
        args.show,
    )?;

    let mut confirm = TerminalConfirm::stdio();
    let mut pipeline = SequencePipeline::new(options, &mut confirm)?;

    info!("{} Found {} images", INFO_PREFIX, pipeline.images().len());
    info!("{} Output: {}", OUTPUT_PREFIX, pipeline.output().display());

    let interrupt = InterruptFlag::new();
    interrupt
        .install_ctrlc_handler()
        .context("failed to install Ctrl-C handler")?;

    let report = pipeline.run(&interrupt, &ProgressReporter::new())?;
    info!(
        "{} Wrote {} frames to {}",
        SUCCESS_PREFIX,
        report.frame_count,
        report.output.display()
    );
    Ok(())
}

fn is_user_abort(e: &anyhow::Error) -> bool {
    e.downcast_ref::<Seq2GifError>()
        .is_some_and(Seq2GifError::is_user_abort)
}
