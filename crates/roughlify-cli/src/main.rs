//! roughlify
//!
//! Replaces every drawing of an SVG/HTML file or URL with a hand-drawn version and writes the
//! result next to the input.

mod cli;
mod error;
mod input;
mod output;

use error::CliError;
use input::Source;
use roughlify::render::RoughSvg;
use roughlify::{Document, StyleOptions, roughlify_document};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, command-line flags on top.
fn style_options(cli: &cli::Cli) -> Result<StyleOptions, CliError> {
    let flags = cli.style.to_options();
    let Some(path) = &cli.config else {
        return Ok(flags);
    };
    let config_path = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: config_path.clone(),
        source,
    })?;
    let from_file = StyleOptions::from_json(&text).map_err(|source| CliError::Config {
        path: config_path,
        source,
    })?;
    Ok(from_file.merge(&flags))
}

fn run(cli: cli::Cli) -> Result<(), CliError> {
    let options = style_options(&cli)?;
    let source = Source::classify(&cli.input);
    let raw = source.read()?;

    let mut target = output::derive(&source.file_name());
    if target.fallback {
        tracing::warn!(
            "No extension found for '{}', falling back to HTML.",
            source.file_name()
        );
    }
    if let Some(path) = cli.output {
        target.path = path;
    }

    tracing::info!("Parsing input");
    let document = Document::parse_html(&raw);
    tracing::info!("Scribbling");
    let out = roughlify_document(document, &options, RoughSvg::new, target.scope);

    let out_path = target.path.display().to_string();
    std::fs::write(&target.path, out).map_err(|source| CliError::Write {
        path: out_path.clone(),
        source,
    })?;
    tracing::info!("Writing output to {out_path}");
    Ok(())
}

fn main() {
    let cli = cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
