use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cbox_renderer::{RenderConfig, Renderer, Scene};

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_png;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let base = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let config = args.apply(base);

    let scene = Scene::cornell_box(!args.no_light);
    let mut renderer = Renderer::new(config, scene).context("Failed to set up renderer")?;

    info!("Rendering {} frames to {}", args.frames, args.output.display());
    let start = Instant::now();

    for frame in 1..=args.frames {
        renderer.render_frame();

        if args.snapshot_every > 0 && frame % args.snapshot_every == 0 && frame < args.frames {
            save_png(renderer.buffer(), &args.output)?;
            let elapsed = start.elapsed().as_secs_f32();
            info!(
                "Frame {}/{} ({:.1} frames/s)",
                frame,
                args.frames,
                frame as f32 / elapsed.max(f32::EPSILON)
            );
        }
    }

    info!(
        "Rendered {} frames in {:?}",
        renderer.frame_count(),
        start.elapsed()
    );

    save_png(renderer.buffer(), &args.output)?;
    info!("Saved to {}", args.output.display());

    Ok(())
}
