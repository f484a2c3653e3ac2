//! gltfpack - glTF geometry repacking tool
//!
//! Extracts mesh geometry from a glTF/GLB scene, bakes node world
//! transforms into the vertex data, and rewrites the result as .gltf+.bin
//! or .glb.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gltfpack")]
#[command(about = "glTF geometry repacking tool")]
#[command(version)]
struct Cli {
    /// Input scene (.gltf or .glb)
    input: PathBuf,

    /// Output file; the extension selects the layout (.gltf or .glb)
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests exit 0; real usage errors exit 1
            let usage_error = err.use_stderr();
            let _ = err.print();
            return if usage_error {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match gltfpack::convert(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
