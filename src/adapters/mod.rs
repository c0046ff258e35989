pub mod console_reporter;
pub mod dotnet_cli;
pub mod git_clone;
pub mod http_download;

pub use console_reporter::ConsoleReporter;
pub use dotnet_cli::DotnetPublisher;
pub use git_clone::GitCloneFetcher;
pub use http_download::HttpArchiveDownloader;
