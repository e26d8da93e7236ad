use clap::Parser;
use relcut::crate_version;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crate-version")]
#[command(version, about = "print the version declared in a Cargo manifest", long_about = None)]
struct Cli {
    /// path to the Cargo.toml manifest
    manifest_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match crate_version(&cli.manifest_path) {
        Ok(version) => println!("{}", version),
        Err(_) => {
            eprintln!("error: could not read the crate version from the given manifest");
            std::process::exit(1);
        }
    }
}
