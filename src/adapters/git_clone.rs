use std::path::Path;

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};

use crate::domain::AppError;
use crate::ports::SourceFetcher;

/// Clones repositories with libgit2.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCloneFetcher;

impl GitCloneFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFetcher for GitCloneFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.transfer_progress(|progress| {
            tracing::debug!(
                received = progress.received_objects(),
                total = progress.total_objects(),
                bytes = progress.received_bytes(),
                "clone progress"
            );
            true
        });

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options);

        let repo = builder.clone(url, dest).map_err(|e| AppError::CloneFailed {
            url: url.to_string(),
            details: e.message().to_string(),
        })?;

        match repo.head().ok().and_then(|head| head.target()) {
            Some(oid) => tracing::info!(%url, head = %oid, "source cloned"),
            None => tracing::info!(%url, "source cloned"),
        }

        Ok(())
    }
}
