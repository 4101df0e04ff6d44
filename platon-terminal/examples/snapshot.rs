/// Example: print a single ASCII frame of a rotated solid
///
/// Usage: cargo run --example snapshot -- [solid] [ticks]
use std::env;
use std::io::{self, stdout, Write};

use platon_core::{RenderConfig, SolidKind};
use platon_terminal::PolygonRasterizer;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let kind_arg = args.get(1).map(String::as_str).unwrap_or("12");
    let ticks: u32 = args
        .get(2)
        .and_then(|t| t.parse().ok())
        .unwrap_or(30);

    let kind: SolidKind = kind_arg
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let config = RenderConfig {
        kind,
        ..RenderConfig::default()
    };
    let [dx, dy, dz] = config.deltas();
    let scale = config.scale;
    let mut scene = config
        .into_scene()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    for _ in 0..ticks {
        scene.advance(dx, dy, dz);
    }

    let mut rasterizer = PolygonRasterizer::new(72, 36, scale);
    rasterizer.render_frame(&scene.frame(), 0);

    let mut out = stdout();
    rasterizer.draw(&mut out)?;
    out.flush()?;

    println!(
        "{} after {} ticks (angles {:.0}, {:.0}, {:.0})",
        scene.solid().kind(),
        ticks,
        scene.rotation().x,
        scene.rotation().y,
        scene.rotation().z,
    );
    Ok(())
}
