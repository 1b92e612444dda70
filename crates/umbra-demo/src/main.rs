//! Headless driver for the sphere tessellator and shadow projector.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p umbra-demo -- --level 5 --frames 300`.

mod frame;

use std::path::Path;

use clap::Parser;
use glam::Vec4;
use tracing::{debug, info, warn};
use umbra_config::{CliArgs, Config, default_config_dir};
use umbra_mesh::{LevelOfDetail, MeshError, expected_counts};
use umbra_shadow::ShadowError;

use crate::frame::FrameState;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Shadow(#[from] ShadowError),
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    umbra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config, args.frames, &config_dir) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config, frames: u32, config_dir: &Path) -> Result<(), DemoError> {
    info!(config_dir = %config_dir.display(), "starting");

    let requested = config.tessellation.level;
    let lod = LevelOfDetail::new(requested, config.tessellation.max_level);
    if lod.level() as i32 != requested {
        warn!(
            requested,
            clamped = lod.level(),
            max = lod.max(),
            "subdivision level out of interactive range"
        );
    }

    let mesh = lod.tessellate()?;
    info!(
        level = lod.level(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        edges = mesh.edge_count(),
        vertex_bytes = mesh.vertex_bytes().len(),
        index_bytes = mesh.index_bytes().len(),
        "tessellated sphere"
    );
    debug_assert_eq!(
        expected_counts(lod.level()),
        Some((mesh.vertex_count(), mesh.triangle_count()))
    );

    let mut state = FrameState::from_config(config);
    for n in 0..frames {
        let frame = state.update(1.0)?;
        let caster = frame.model.w_axis;
        debug!(
            frame = n,
            light = %frame.light,
            caster_y = caster.y,
            caster_clip = %(frame.mvp * Vec4::W),
            shadow_clip = %(frame.planar_shadow_mvp * Vec4::W),
            reflection_clip = %(frame.reflection_mvp * Vec4::W),
            light_clip = %(frame.light_pv * caster),
            "frame updated"
        );
        if n + 1 == frames {
            info!(
                frames,
                light = %frame.light,
                orbit_angle = state.orbit.angle,
                uniform_bytes = std::mem::size_of_val(&frame.uniform),
                "simulation finished"
            );
        }
    }

    Ok(())
}
