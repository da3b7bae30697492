use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use clap::Parser;
use pc_render::RenderPlugin;
use pc_ui::UiPlugin;
use tracing::{Level, error, info};

mod cli;
mod config;
mod export;
mod plugins;

use cli::Args;
use config::{ConfigError, ViewerConfig};
use export::ExportError;
use plugins::ViewerCorePlugin;

#[derive(Debug, thiserror::Error)]
enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, ViewerError> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    config.apply_args(&args);

    let figure = config.figure_settings()?;
    if let Some(path) = &args.export_fur_texture {
        export::export_fur_texture(&figure.fur_texture, path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let core = ViewerCorePlugin {
        figure,
        lighting: config.lighting_settings()?,
        stage: config.stage_settings()?,
        orbit: config.orbit_camera(),
    };
    info!(
        pose = core.figure.pose.as_options_value(),
        lighting = core.lighting.preset.as_options_value(),
        "starting cat viewer"
    );

    let window = Window {
        title: config.window.title.clone(),
        resolution: WindowResolution::new(
            config.window.width.max(1) as f32,
            config.window.height.max(1) as f32,
        ),
        present_mode: if config.window.vsync {
            PresentMode::AutoVsync
        } else {
            PresentMode::AutoNoVsync
        },
        ..default()
    };

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                }),
        )
        .add_plugins((core, RenderPlugin, UiPlugin))
        .run();

    Ok(match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    })
}
