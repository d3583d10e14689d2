//! Screenshot generator for the drop indicators
//!
//! Renders headless PNGs from YAML scenario definitions.
//!
//! Usage:
//!   cargo run --bin screenshot -- --scenario samples/scenarios/two-panels.yaml
//!   cargo run --bin screenshot -- --all
//!   cargo run --bin screenshot -- --all --out-dir screenshots/output

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use segdrop::scenario::Scenario;
use segdrop::view::Frame;

const BACKGROUND: u32 = 0xFF1E1F22;
const PANEL_BORDER: u32 = 0xFF4E5157;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "screenshot", about = "Render drop indicator scenarios to PNG")]
struct Args {
    /// Path to a single scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Run all scenarios in the scenarios directory
    #[arg(long)]
    all: bool,
    /// Directory containing scenario YAML files
    #[arg(long, default_value = "samples/scenarios")]
    scenarios_dir: PathBuf,
    /// Directory for output PNG files
    #[arg(long, default_value = "screenshots/output")]
    out_dir: PathBuf,
    /// Override width in pixels
    #[arg(long)]
    width: Option<i32>,
    /// Override height in pixels
    #[arg(long)]
    height: Option<i32>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_to_buffer(scenario: &Scenario) -> Result<Vec<u32>> {
    let overlay = scenario.run()?;

    let (width, height) = (scenario.width as usize, scenario.height as usize);
    let mut buffer = vec![BACKGROUND; width * height];
    {
        let mut frame = Frame::new(&mut buffer, width, height);
        for panel in overlay.host().panels() {
            let x = panel.x.max(0) as usize;
            let y = panel.y.max(0) as usize;
            frame.fill_rect_px(x, y, 1, panel.height.max(0) as usize, PANEL_BORDER);
            frame.fill_rect_px(x, y, panel.width.max(0) as usize, 1, PANEL_BORDER);
        }
        overlay.paint(&mut frame);
    }

    Ok(buffer)
}

// ---------------------------------------------------------------------------
// PNG output
// ---------------------------------------------------------------------------

fn save_png(buffer: &[u32], width: u32, height: u32, path: &Path) -> Result<()> {
    // Convert ARGB (0xAARRGGBB) to RGBA bytes
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for &pixel in buffer {
        rgba.push(((pixel >> 16) & 0xFF) as u8);
        rgba.push(((pixel >> 8) & 0xFF) as u8);
        rgba.push((pixel & 0xFF) as u8);
        rgba.push(((pixel >> 24) & 0xFF) as u8);
    }

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Scenario loading
// ---------------------------------------------------------------------------

fn collect_scenarios(args: &Args) -> Result<Vec<Scenario>> {
    if let Some(path) = &args.scenario {
        return Ok(vec![Scenario::load(path)?]);
    }

    if !args.all {
        anyhow::bail!("specify --scenario <file> or --all");
    }

    Scenario::load_dir(&args.scenarios_dir)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    segdrop::tracing::init();

    let args = Args::parse();
    let scenarios = collect_scenarios(&args)?;

    eprintln!(
        "Rendering {} scenario(s) → {}",
        scenarios.len(),
        args.out_dir.display()
    );

    for mut scenario in scenarios {
        if let Some(w) = args.width {
            scenario.width = w;
        }
        if let Some(h) = args.height {
            scenario.height = h;
        }

        eprint!("  {} ...", scenario.name);

        let buffer = render_to_buffer(&scenario)?;
        let out_path = args.out_dir.join(format!("indicators-{}.png", scenario.name));
        save_png(
            &buffer,
            scenario.width as u32,
            scenario.height as u32,
            &out_path,
        )?;
        eprintln!(" saved {}", out_path.display());
    }

    eprintln!("Done!");
    Ok(())
}
