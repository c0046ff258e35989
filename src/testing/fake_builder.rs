use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, BuildFixConfig};
use crate::ports::{ArtifactBuilder, BuildRequest};

/// Writes a canned publish output where the real toolchain would.
pub struct FakeBuilder {
    output: Option<PublishOutput>,
    requests: Mutex<Vec<BuildRequest>>,
}

struct PublishOutput {
    publish_dir: PathBuf,
    library_name: String,
    library: Vec<u8>,
    runtimes_dir: Option<String>,
    runtime_files: Vec<(String, Vec<u8>)>,
}

impl FakeBuilder {
    pub fn publishing(config: &BuildFixConfig, library: &[u8]) -> Self {
        Self {
            output: Some(PublishOutput {
                publish_dir: config.publish_dir(),
                library_name: config.primary_library.clone(),
                library: library.to_vec(),
                runtimes_dir: Some(config.runtimes_dir.clone()),
                runtime_files: Vec::new(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Builder whose toolchain exits non-zero.
    pub fn failing() -> Self {
        Self { output: None, requests: Mutex::new(Vec::new()) }
    }

    pub fn with_runtime_file(mut self, relative: &str, contents: &[u8]) -> Self {
        if let Some(output) = self.output.as_mut() {
            output.runtime_files.push((relative.to_string(), contents.to_vec()));
        }
        self
    }

    pub fn without_runtimes(mut self) -> Self {
        if let Some(output) = self.output.as_mut() {
            output.runtimes_dir = None;
        }
        self
    }

    pub fn requests(&self) -> Vec<BuildRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ArtifactBuilder for FakeBuilder {
    fn publish(&self, request: &BuildRequest) -> Result<(), AppError> {
        self.requests.lock().unwrap().push(request.clone());

        let Some(output) = &self.output else {
            return Err(AppError::BuildFailed {
                command: "dotnet publish".to_string(),
                status: "exit status: 1".to_string(),
                details: "error MSB1009: Project file does not exist.".to_string(),
            });
        };

        fs::create_dir_all(&output.publish_dir)?;
        fs::write(output.publish_dir.join(&output.library_name), &output.library)?;

        if let Some(runtimes_dir) = &output.runtimes_dir {
            let runtimes = output.publish_dir.join(runtimes_dir);
            fs::create_dir_all(&runtimes)?;
            for (relative, contents) in &output.runtime_files {
                let path = runtimes.join(relative);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, contents)?;
            }
        }

        Ok(())
    }
}
