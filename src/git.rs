use std::io::{self, ErrorKind, Write};
use std::process::{Command, Output};

use crate::{error::AppError, profile::Profile};

/// Applies a profile as the active global Git identity by setting
/// `user.name` and `user.email` through `git config --global`
pub fn apply_profile(profile: &Profile) -> Result<(), AppError> {
    set_global_config("user.name", &profile.name)?;
    set_global_config("user.email", &profile.email)?;
    Ok(())
}

/// Executes one `git config --global` set call, forwarding the command's
/// output to the user
fn set_global_config(key: &str, value: &str) -> Result<(), AppError> {
    let git_command_output: Output = Command::new("git")
        .args(["config", "--global", key, value])
        .output()
        .map_err(|err| classify_spawn_error(&err))?;

    forward_output(&git_command_output);

    if !git_command_output.status.success() {
        return Err(AppError::GitCommand(
            String::from_utf8_lossy(&git_command_output.stderr).trim().to_string(),
        ));
    }

    Ok(())
}

/// A missing git binary is its own failure mode, not a generic I/O error
fn classify_spawn_error(err: &io::Error) -> AppError {
    if err.kind() == ErrorKind::NotFound {
        AppError::GitUnavailable("'git' was not found on PATH".to_string())
    } else {
        AppError::GitUnavailable(err.to_string())
    }
}

/// Echoes the external tool's combined output line-for-line
fn forward_output(output: &Output) {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(&output.stdout);
    let _ = stdout.write_all(&output.stderr);
    let _ = stdout.flush();
}
