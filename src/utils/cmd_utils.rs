use std::error::Error;
use std::process::Command;

use crate::utils::error_utils;

/// Execute a command without capturing output; the child inherits stdout and
/// stderr so compose output streams through unmodified.
pub fn exec_cmd(program: &str, args: &[&str]) -> Result<(), Box<dyn Error>> {
    let status = Command::new(program).args(args).status().map_err(|e| {
        error_utils::into_boxed_error(e, &format!("Failed to execute '{}'", program))
    })?;

    if !status.success() {
        return Err(error_utils::new_error(&format!(
            "Command '{}' exited with non-zero status: {}",
            program, status
        )));
    }

    Ok(())
}
