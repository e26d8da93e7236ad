use anyhow::{Context, Result};
use clap::Parser;
use relcut::roll_crate_changelog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "update-changelog")]
#[command(version, about = "move unreleased changelog entries under the crate's current version", long_about = None)]
struct Cli {
    /// path to the crate directory holding Cargo.toml and CHANGELOG.md
    crate_path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let outcome = roll_crate_changelog(&cli.crate_path)
        .with_context(|| format!("failed to update changelog in {}", cli.crate_path.display()))?;

    if outcome.released {
        println!(
            "changelog updated successfully for version {}",
            outcome.version
        );
    } else {
        // reported but not treated as a failure, so re-running a release job
        // for an already-filed version stays green
        eprintln!(
            "version {} already exists in the changelog, nothing to do",
            outcome.version
        );
    }

    Ok(())
}
