// Interactive chart display
// Opens saved charts in the platform image viewer when a display is present;
// headless runs fall back to save-only without error

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Whether to show saved charts on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Show when a display is detected
    #[default]
    Auto,
    /// Save only
    Never,
}

/// Open a saved chart in the platform viewer.
/// Returns true when a viewer was launched.
pub fn show(path: &Path, mode: DisplayMode) -> bool {
    if mode == DisplayMode::Never {
        return false;
    }

    if !display_available() {
        log::debug!("No display available, skipping preview of {}", path.display());
        return false;
    }

    let launched = viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match launched {
        Ok(mut child) => {
            // Reap the viewer without blocking report generation
            std::thread::spawn(move || child.wait());
            true
        }
        Err(e) => {
            log::warn!("Could not open viewer for {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn display_available() -> bool {
    true
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn display_available() -> bool {
    has_display(
        std::env::var_os("DISPLAY").as_deref(),
        std::env::var_os("WAYLAND_DISPLAY").as_deref(),
    )
}

/// X11 or Wayland session detection
#[cfg_attr(any(target_os = "macos", target_os = "windows"), allow(dead_code))]
fn has_display(x11: Option<&OsStr>, wayland: Option<&OsStr>) -> bool {
    [x11, wayland]
        .into_iter()
        .any(|var| var.is_some_and(|value| !value.is_empty()))
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
