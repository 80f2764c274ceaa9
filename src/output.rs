use crate::constants::GIF_EXTENSION;
use crate::error::{Seq2GifError, Result};
use crate::prompt::Confirm;
use crate::resolver::{absolutize, expand_home};
use crate::verbose;
use std::path::{Path, PathBuf};

/// Normalizes the destination path and checks it can be written.
///
/// Returns an absolute path ending in `.gif`. An existing file is only
/// overwritten after `confirm` agrees; a refusal is [`Seq2GifError::UserAbort`].
pub fn validate_output(raw: &str, confirm: &mut dyn Confirm) -> Result<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Seq2GifError::InvalidOutput(
            "output path is empty".to_string(),
        ));
    }

    let path = absolutize(&expand_home(trimmed))?;
    reject_directory(&path)?;

    let path = coerce_gif_extension(&path);
    reject_directory(&path)?;

    let parent = path.parent().ok_or_else(|| {
        Seq2GifError::InvalidOutput(format!("{} has no parent directory", path.display()))
    })?;
    if !parent.is_dir() {
        return Err(Seq2GifError::InvalidOutput(format!(
            "output directory \"{}\" does not exist",
            parent.display()
        )));
    }

    if path.is_file() {
        let question = format!(
            "File already exists: {}\nOverwrite? (y)es/(n)o?\n>> ",
            path.display()
        );
        if !confirm.confirm(&question)? {
            return Err(Seq2GifError::UserAbort);
        }
        verbose!("Overwriting existing file: {}", path.display());
    }

    Ok(path)
}

/// Replaces any extension other than a literal `.gif` with `.gif`.
pub fn coerce_gif_extension(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(GIF_EXTENSION) => path.to_path_buf(),
        _ => path.with_extension(GIF_EXTENSION),
    }
}

fn reject_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Seq2GifError::InvalidOutput(format!(
            "output must be a file, not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}
