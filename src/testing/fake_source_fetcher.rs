use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::SourceFetcher;

/// Records each fetch and leaves a marker file in the destination.
#[derive(Default)]
pub struct FakeSourceFetcher {
    fail: bool,
    seen_entries: Mutex<Vec<Vec<String>>>,
}

impl FakeSourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetcher that behaves like an unreachable remote.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.seen_entries.lock().unwrap().len()
    }

    /// Directory entries found in the destination at the start of each fetch.
    pub fn seen_entries(&self) -> Vec<Vec<String>> {
        self.seen_entries.lock().unwrap().clone()
    }
}

impl SourceFetcher for FakeSourceFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        let mut names: Vec<String> = match fs::read_dir(dest) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        self.seen_entries.lock().unwrap().push(names);

        if self.fail {
            return Err(AppError::CloneFailed {
                url: url.to_string(),
                details: "could not resolve host".to_string(),
            });
        }

        fs::create_dir_all(dest.join(".git"))?;
        Ok(())
    }
}
