use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use annokit::{init_logging, AnnotationEngine, Config, DrawingDocument, Script, BUILD_DATE, VERSION};

/// Replay a recorded gesture script and render the result to PNG.
#[derive(Parser, Debug)]
#[command(name = "annokit", version, about)]
struct Cli {
    /// Gesture script (JSON)
    script: PathBuf,

    /// Output PNG
    output: PathBuf,

    /// Configuration file (.json or .toml); defaults to the user config if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pixels per logical unit in the output image
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Drawing document to load before replaying the script
    #[arg(long)]
    load: Option<PathBuf>,

    /// Also save the resulting drawing as a document
    #[arg(long)]
    save_document: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Ok(Config::default())
            }
        },
    }
}

fn main() -> Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::debug!("annokit {} (built {})", VERSION, BUILD_DATE);

    let cli = Cli::parse();
    if !(cli.scale.is_finite() && cli.scale > 0.0) {
        anyhow::bail!("--scale must be a positive number, got {}", cli.scale);
    }

    let config = load_config(cli.config.as_ref())?;
    let mut engine = AnnotationEngine::with_config(&config).context("Invalid default style")?;

    if let Some(path) = &cli.load {
        let doc = DrawingDocument::load_from_file(path)
            .with_context(|| format!("Failed to load document {}", path.display()))?;
        doc.apply_to(&mut engine)?;
    }

    let script = Script::load_from_file(&cli.script)?;
    script.replay(&mut engine)?;

    let viewport = engine.viewport();
    let width = (viewport.width() * cli.scale).round() as u32;
    let height = (viewport.height() * cli.scale).round() as u32;
    let image = engine.render_to_image(width, height)?;
    image
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    tracing::info!(
        "Wrote {}x{} image to {}",
        width,
        height,
        cli.output.display()
    );

    if let Some(path) = &cli.save_document {
        let name = cli
            .script
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "drawing".to_string());
        DrawingDocument::from_engine(name, &engine)
            .save_to_file(path)
            .with_context(|| format!("Failed to save document {}", path.display()))?;
    }

    Ok(())
}
