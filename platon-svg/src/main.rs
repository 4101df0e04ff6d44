use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use platon_core::{progressed_count, RenderConfig, SolidKind};
use platon_svg::{render_document, SvgStyle};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "platon-svg",
    about = "Render a rotating Platonic solid to SVG documents"
)]
struct Cli {
    /// Solid kind: 4/tetra/tetrahedron/simplex, 6/hexa/hexahedron/cube,
    /// 8/octa/octahedron, 12/dodeca/dodecahedron, 20/icosa/icosahedron
    #[arg(short, long, default_value = "12")]
    solid: String,

    /// Rotation delta per tick around the X axis, in degrees
    #[arg(long, default_value_t = 1.0)]
    dx: f64,

    /// Rotation delta per tick around the Y axis, in degrees
    #[arg(long, default_value_t = 1.0)]
    dy: f64,

    /// Rotation delta per tick around the Z axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    dz: f64,

    /// Frames per second the tick cadence corresponds to
    #[arg(long, default_value_t = 40)]
    fps: u32,

    /// Display scale; the viewBox spans [-scale, scale] on both axes
    #[arg(long, default_value_t = 128.0)]
    scale: f64,

    /// Ticks to advance before the first emitted frame
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,

    /// Number of consecutive frames to emit, one tick apart
    #[arg(short, long, default_value_t = 1)]
    frames: u64,

    /// Progress value; colors the progressed share of faces
    #[arg(long)]
    progress: Option<u32>,

    /// Denominator for the progress value
    #[arg(long, default_value_t = 100)]
    progress_max: u32,

    /// Output file (stdout when omitted); with --frames > 1 the frame
    /// number is appended before the extension
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let kind: SolidKind = cli
        .solid
        .parse()
        .with_context(|| format!("invalid --solid {:?}", cli.solid))?;
    let config = RenderConfig {
        kind,
        dx: cli.dx,
        dy: cli.dy,
        dz: cli.dz,
        fps: cli.fps,
        scale: cli.scale,
        progress_max: cli.progress_max,
    };
    let scale = config.scale;
    let progress_max = config.progress_max;
    let mut scene = config.into_scene().context("invalid configuration")?;

    tracing::debug!(%kind, dx = cli.dx, dy = cli.dy, dz = cli.dz, "scene ready");

    for _ in 0..cli.ticks {
        scene.advance(cli.dx, cli.dy, cli.dz);
    }

    let progressed = match cli.progress {
        Some(value) => progressed_count(value, progress_max, scene.solid().face_count()),
        None => 0,
    };

    let style = SvgStyle::default();
    let frames = cli.frames.max(1);
    for frame_no in 0..frames {
        if frame_no > 0 {
            scene.advance(cli.dx, cli.dy, cli.dz);
        }
        let document = render_document(&scene.frame(), &style, scale, progressed);
        match &cli.out {
            None => print!("{document}"),
            Some(path) => {
                let target = if frames > 1 {
                    numbered(path, frame_no)
                } else {
                    path.clone()
                };
                fs::write(&target, &document)
                    .with_context(|| format!("writing {}", target.display()))?;
                tracing::info!(path = %target.display(), "wrote frame");
            }
        }
    }

    Ok(())
}

/// Inserts a zero-padded frame number before the file extension.
fn numbered(path: &PathBuf, frame_no: u64) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{stem}-{frame_no:04}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{frame_no:04}"),
    };
    path.with_file_name(name)
}
