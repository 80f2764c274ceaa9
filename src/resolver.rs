use crate::constants::WILDCARD_CHARS;
use crate::error::{Seq2GifError, Result};
use crate::verbose;
use glob::glob;
use std::path::{Path, PathBuf};

/// Turns `--input` values into the ordered list of frames to read.
///
/// * one value containing `*`, `?`, `[` or `]` is a glob pattern; matches are
///   sorted lexicographically
/// * two or more values are explicit files, kept in the given order
/// * anything else is not a sequence
pub fn resolve_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<PathBuf>> {
    match inputs {
        [] => Err(Seq2GifError::InsufficientInput(
            "no input images given".to_string(),
        )),
        [single] if is_pattern(single.as_ref()) => expand_pattern(single.as_ref()),
        [single] => Err(Seq2GifError::InsufficientInput(format!(
            "only one image given ({}). Use \"*\" as wildcard to detect an image sequence",
            single.as_ref()
        ))),
        many => many
            .iter()
            .map(|input| {
                let path = expand_home(input.as_ref());
                if !path.is_file() {
                    return Err(Seq2GifError::FileNotFound(path));
                }
                absolutize(&path)
            })
            .collect(),
    }
}

pub fn is_pattern(input: &str) -> bool {
    input.contains(&WILDCARD_CHARS[..])
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let absolute = absolutize(&expand_home(pattern))?;
    let absolute_pattern = absolute.to_string_lossy();
    verbose!("Expanding pattern: {}", absolute_pattern);

    let mut matches: Vec<PathBuf> = glob(&absolute_pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if matches.is_empty() {
        return Err(Seq2GifError::NoMatch(pattern.to_string()));
    }

    // Whole-path string order, not per-component `Path` order.
    matches.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    verbose!("Pattern matched {} files", matches.len());
    Ok(matches)
}

/// Replaces a leading `~` with the user's home directory.
pub fn expand_home(input: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_home_with(input, home.as_deref())
}

fn expand_home_with(input: &str, home: Option<&Path>) -> PathBuf {
    match (input, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if input.starts_with("~/") => home.join(&input[2..]),
        _ => PathBuf::from(input),
    }
}

/// Absolute form of `path` relative to the working directory. Symlinks are
/// left alone so the caller's paths come back recognizable.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
