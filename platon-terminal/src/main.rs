use anyhow::Context;
use clap::Parser;
use platon_core::{RenderConfig, SolidKind};
use platon_terminal::TerminalApp;

#[derive(Parser)]
#[command(
    name = "platon-terminal",
    about = "Animated terminal viewer for the five Platonic solids"
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

    /// Frames per second
    #[arg(long, default_value_t = 40)]
    fps: u32,

    /// Display scale of the solid
    #[arg(long, default_value_t = 128.0)]
    scale: f64,

    /// Progress value; fills the progressed share of faces distinctly
    #[arg(long)]
    progress: Option<u32>,

    /// Denominator for the progress value
    #[arg(long, default_value_t = 100)]
    progress_max: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

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
    config.validate().context("invalid configuration")?;

    let mut app = TerminalApp::new(config, cli.progress)?;
    app.run()?;
    Ok(())
}
