//! Dispatchgen - Command line entry point
//!
//! Reads an API registry and writes the dispatch table header, the loader
//! source file and the C++ mixin header.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dispatchgen_domain::GeneratorSettings;
use dispatchgen_infrastructure::{FileSystemSink, GenerationPaths, generate_files, load_settings};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dispatchgen", version)]
#[command(about = "Generate dispatch tables, loaders and mixins from an API registry")]
struct Args {
    /// Registry XML file
    registry: PathBuf,

    /// Output C header
    header: PathBuf,

    /// Output C++ mixin header
    mixin_header: PathBuf,

    /// Output C source file
    source: PathBuf,

    /// JSON file overriding generator settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Target API name (overrides the settings file)
    #[arg(long, value_name = "NAME")]
    api: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => GeneratorSettings::default(),
    };
    if let Some(api) = args.api {
        settings = settings.with_api(api);
    }

    info!(registry = %args.registry.display(), api = %settings.api, "generating dispatch artifacts");

    let paths = GenerationPaths {
        registry: args.registry,
        header: args.header,
        mixin_header: args.mixin_header,
        source: args.source,
    };
    generate_files(&paths, &settings, &FileSystemSink::new())
        .with_context(|| format!("generation from {} failed", paths.registry.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals_and_options() {
        let args = Args::parse_from([
            "dispatchgen",
            "vk.xml",
            "out.h",
            "out.hpp",
            "out.c",
            "--api",
            "vulkansc",
            "-v",
        ]);
        assert_eq!(args.registry, PathBuf::from("vk.xml"));
        assert_eq!(args.header, PathBuf::from("out.h"));
        assert_eq!(args.mixin_header, PathBuf::from("out.hpp"));
        assert_eq!(args.source, PathBuf::from("out.c"));
        assert_eq!(args.api.as_deref(), Some("vulkansc"));
        assert!(args.verbose);
        assert!(args.settings.is_none());
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Args::try_parse_from(["dispatchgen", "vk.xml", "out.h"]).is_err());
    }
}
