//! Interactive display of the saved image
//!
//! Opens the image with the platform viewer when a user is watching. In
//! headless or piped runs this does nothing.

use std::path::Path;
use std::process::{Command, Stdio};

/// Set this to any value to suppress the viewer regardless of terminal state
pub const NO_SHOW_ENV: &str = "TRAIN_LOG_NO_SHOW";

/// Outcome of a display attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// A viewer process was spawned
    Opened,
    /// No interactive display is available
    Skipped,
    /// The viewer could not be started
    Failed,
}

/// Try to open `path` in the platform image viewer
///
/// Never fails: viewer problems are logged and the run continues.
pub fn show_image(path: &Path) -> DisplayOutcome {
    if !is_interactive() {
        log::debug!("No interactive display, not opening {:?}", path);
        return DisplayOutcome::Skipped;
    }

    let mut command = viewer_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.spawn() {
        Ok(child) => {
            log::debug!("Opened {:?} in viewer (pid {})", path, child.id());
            DisplayOutcome::Opened
        }
        Err(e) => {
            log::warn!("Could not open image viewer for {:?}: {}", path, e);
            DisplayOutcome::Failed
        }
    }
}

/// Whether a user can see a viewer window
pub fn is_interactive() -> bool {
    should_display(
        std::env::var_os(NO_SHOW_ENV).is_some(),
        atty::is(atty::Stream::Stdout),
        has_graphical_session(),
    )
}

/// Display decision from the observed environment
fn should_display(no_show_set: bool, stdout_is_tty: bool, graphical_session: bool) -> bool {
    !no_show_set && stdout_is_tty && graphical_session
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn has_graphical_session() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn has_graphical_session() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
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
