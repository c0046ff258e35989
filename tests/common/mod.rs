//! Shared harness for `resonite-fixes` integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use assert_cmd::Command;
use resonite_fixes::AppError;
use resonite_fixes::domain::FixerKind;
use resonite_fixes::ports::{
    ArchiveDownloader, ArtifactBuilder, BuildRequest, Reporter, SourceFetcher,
};
use tempfile::TempDir;
use url::Url;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Isolated filesystem for one test: installation, data home and scratch space.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("home/.local/share")).expect("Failed to create home");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn data_home(&self) -> PathBuf {
        self.home().join(".local/share")
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.root.path().join("scratch/resonite-brotli")
    }

    /// Create `<root>/<relative>` with `Plugins/` and `Managed/` subdirectories.
    pub fn installation(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        fs::create_dir_all(path.join("Plugins")).expect("Failed to create Plugins");
        fs::create_dir_all(path.join("Managed")).expect("Failed to create Managed");
        path
    }

    /// Build a command for the compiled binary with an isolated `$HOME`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("resonite-fixes").expect("Failed to locate binary");
        cmd.env("HOME", self.home()).env("XDG_DATA_HOME", self.data_home()).env_remove("RUST_LOG");
        cmd
    }
}

/// Clone stand-in that only creates the destination's `.git` directory.
#[derive(Default)]
pub struct StubFetcher {
    pub fail: bool,
    pub calls: Mutex<usize>,
}

impl SourceFetcher for StubFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::CloneFailed {
                url: url.to_string(),
                details: "network unreachable".to_string(),
            });
        }
        fs::create_dir_all(dest.join(".git"))?;
        Ok(())
    }
}

/// Toolchain stand-in writing a publish folder with one library and a runtimes tree.
pub struct StubPublisher {
    pub publish_dir: PathBuf,
    pub library_name: String,
    pub library: Vec<u8>,
    pub runtime_files: Vec<(String, Vec<u8>)>,
    pub calls: Mutex<Vec<BuildRequest>>,
}

impl ArtifactBuilder for StubPublisher {
    fn publish(&self, request: &BuildRequest) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(request.clone());
        fs::create_dir_all(self.publish_dir.join("runtimes"))?;
        fs::write(self.publish_dir.join(&self.library_name), &self.library)?;
        for (relative, contents) in &self.runtime_files {
            let path = self.publish_dir.join("runtimes").join(relative);
            fs::create_dir_all(path.parent().expect("runtime file has a parent"))?;
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

pub struct StubDownloader {
    pub body: Vec<u8>,
    pub calls: Mutex<usize>,
}

impl ArchiveDownloader for StubDownloader {
    fn download(&self, _url: &Url) -> Result<Vec<u8>, AppError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.body.clone())
    }
}

#[derive(Default)]
pub struct CapturingReporter {
    pub lines: Mutex<Vec<String>>,
}

impl CapturingReporter {
    pub fn output(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }
}

impl Reporter for CapturingReporter {
    fn step_started(&self, fixer: FixerKind) {
        self.lines.lock().unwrap().push(fixer.banner().to_string());
    }

    fn guidance(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// In-memory zip with the given entries, in order.
pub fn zip_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).expect("start zip entry");
        writer.write_all(contents).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}
