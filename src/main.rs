//! Veles CLI - Command-line tool for inspecting DDS texture layouts.
//!
//! This is the main entry point for the Veles command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use veles::prelude::*;

/// Veles - DDS texture layout tool
#[derive(Parser)]
#[command(name = "veles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode DDS headers and print the subresource layout
    DdsInfo {
        /// DDS files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip mip levels larger than this size (0 keeps every level)
        #[arg(short, long, env = "VELES_MAX_SIZE", default_value_t = 0)]
        max_size: u32,

        /// Report the sRGB variant of the format
        #[arg(long)]
        force_srgb: bool,

        /// Print JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

/// Outcome of decoding one file.
#[derive(Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<TextureLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DdsInfo {
            files,
            max_size,
            force_srgb,
            json,
        } => {
            let options = DecodeOptions::new()
                .with_max_size(max_size)
                .with_force_srgb(force_srgb);
            cmd_dds_info(&files, options, json)?;
        }
    }

    Ok(())
}

fn cmd_dds_info(files: &[PathBuf], options: DecodeOptions, json: bool) -> Result<()> {
    let start = Instant::now();

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| match decode_file(path, options) {
            Ok(layout) => FileReport {
                path: path.clone(),
                layout: Some(layout),
                error: None,
            },
            Err(e) => FileReport {
                path: path.clone(),
                layout: None,
                error: Some(format!("{:#}", e)),
            },
        })
        .collect();

    tracing::debug!(files = reports.len(), elapsed = ?start.elapsed(), "decoded files");

    if json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} files failed to decode", failed, reports.len());
    }

    Ok(())
}

fn decode_file(path: &Path, options: DecodeOptions) -> Result<TextureLayout> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let texture = DdsTexture::parse_with(&data, options).context("Failed to decode DDS")?;
    Ok(texture.into_layout())
}

fn print_report(report: &FileReport) {
    println!("{}", report.path.display());

    if let Some(error) = &report.error {
        eprintln!("  error: {}", error);
        return;
    }
    let Some(layout) = &report.layout else {
        return;
    };

    println!(
        "  {:?} {}x{}x{} {:?}",
        layout.dimension(),
        layout.width(),
        layout.height(),
        layout.depth(),
        layout.format()
    );
    println!(
        "  mips: {}, array size: {}, cube: {}, alpha: {:?}",
        layout.mip_count(),
        layout.array_size(),
        layout.is_cube_map(),
        layout.alpha_mode()
    );
    println!("  {:>5} {:>5} {:>12} {:>10} {:>12}", "slice", "mip", "offset", "row pitch", "slice pitch");

    let mip_count = layout.mip_count().max(1) as usize;
    for (i, sub) in layout.subresources().iter().enumerate() {
        println!(
            "  {:>5} {:>5} {:>12} {:>10} {:>12}",
            i / mip_count,
            i % mip_count,
            sub.offset,
            sub.row_pitch,
            sub.slice_pitch
        );
    }
}
