use crate::error::Result;
use crate::verbose;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens `path` with the desktop's default application. Does not wait for
/// the viewer to exit.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    verbose!("Launching viewer: {:?}", command);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_command_passes_path_last() {
        let path = Path::new("/tmp/result.gif");
        let command = viewer_command(path);
        let last = command.get_args().last().unwrap();
        assert_eq!(last, path.as_os_str());
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_viewer_command_uses_xdg_open() {
        let command = viewer_command(Path::new("/tmp/result.gif"));
        assert_eq!(command.get_program(), "xdg-open");
    }
}
