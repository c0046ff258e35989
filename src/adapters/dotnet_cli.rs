use std::ffi::OsString;
use std::process::{Command, Output};

use crate::domain::AppError;
use crate::ports::{ArtifactBuilder, BuildRequest};

const OUTPUT_TAIL_LINES: usize = 20;

/// Runs `<program> publish -f <framework> <project>` as a child process.
#[derive(Debug, Clone)]
pub struct DotnetPublisher {
    program: String,
}

impl DotnetPublisher {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn args(request: &BuildRequest) -> Vec<OsString> {
        vec![
            "publish".into(),
            "-f".into(),
            request.target_framework.clone().into(),
            request.project_dir.clone().into_os_string(),
        ]
    }

    fn display_command(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

impl ArtifactBuilder for DotnetPublisher {
    fn publish(&self, request: &BuildRequest) -> Result<(), AppError> {
        let args = Self::args(request);
        let command_line = self.display_command(&args);
        tracing::info!(command = %command_line, "running build toolchain");

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            AppError::ToolchainUnavailable { program: self.program.clone(), details: e.to_string() }
        })?;

        if !output.status.success() {
            return Err(AppError::BuildFailed {
                command: command_line,
                status: output.status.to_string(),
                details: failure_details(&output),
            });
        }

        Ok(())
    }
}

// dotnet reports compiler errors on stdout, so both streams are considered.
fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stderr.trim().is_empty() { stdout } else { stderr };

    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return "Unknown error".to_string();
    }
    let start = lines.len().saturating_sub(OUTPUT_TAIL_LINES);
    lines[start..].join("\n")
}
