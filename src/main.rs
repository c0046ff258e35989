use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resonite-fixes")]
#[command(version)]
#[command(
    about = "Apply Linux fixes to a Resonite installation",
    long_about = "Apply Linux fixes to a Resonite installation:\n\
        symlinks libFreeImage, rebuilds Brotli.Core (requires `dotnet` on PATH)\n\
        and provisions the sRGB texture preload workaround."
)]
struct Cli {
    /// Absolute path to the Resonite_Data directory
    installation_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = resonite_fixes::apply(&cli.installation_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
