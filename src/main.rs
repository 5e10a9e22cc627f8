use clap::{Parser, Subcommand, ValueEnum};
use dashgrid::{Dashboard, DashboardError, ImageFormat, PreviewConfig, PreviewRenderer};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds render trees and raster previews from dashboard JSON files.
#[derive(Parser, Debug)]
#[command(name = "dashgrid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-emits the normalized render tree and optionally writes a preview.
    Render {
        /// Path to a dashboard JSON file.
        input: PathBuf,
        /// Pretty-print the render tree.
        #[arg(long)]
        pretty: bool,
        /// Write a preview image to this path.
        #[arg(long)]
        preview: Option<PathBuf>,
        /// JPEG quality (0-100).
        #[arg(long)]
        quality: Option<u8>,
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Preview settings as JSON; flags override it.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Prints the preview canvas size of the dashboard layout.
    Size {
        input: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Jpeg,
    Png,
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Jpeg => ImageFormat::Jpeg,
            Format::Png => ImageFormat::Png,
        }
    }
}

fn load_dashboard(path: &Path) -> Result<Dashboard, DashboardError> {
    log::debug!("Loading dashboard from {}", path.display());
    Dashboard::from_json(&fs::read_to_string(path)?)
}

fn load_preview_config(path: Option<&Path>) -> Result<PreviewConfig, DashboardError> {
    let Some(path) = path else {
        return Ok(PreviewConfig::default());
    };
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| DashboardError::Config(format!("{}: {}", path.display(), e)))
}

fn main() -> Result<(), DashboardError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            input,
            pretty,
            preview,
            quality,
            format,
            config,
        } => {
            let dashboard = load_dashboard(&input)?;
            let json = if pretty {
                dashboard.to_json_pretty()?
            } else {
                dashboard.to_json()?
            };
            println!("{}", json);

            if let Some(out) = preview {
                let mut preview_config = load_preview_config(config.as_deref())?;
                if let Some(quality) = quality {
                    preview_config = preview_config.with_quality(quality);
                }
                if let Some(format) = format {
                    preview_config = preview_config.with_format(format.into());
                }
                if dashboard.layout.is_none() {
                    eprintln!("Dashboard has no layout; no preview written.");
                }
                dashboard.save_preview(&out, &preview_config)?;
            }
        }
        Command::Size { input, config } => {
            let dashboard = load_dashboard(&input)?;
            let renderer = PreviewRenderer::new(load_preview_config(config.as_deref())?);
            match dashboard.layout.as_ref() {
                Some(grid) => {
                    let size = renderer.canvas_size(grid);
                    println!("{}x{}", size.width, size.height);
                }
                None => println!("0x0"),
            }
        }
    }
    Ok(())
}
