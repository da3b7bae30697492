use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "pc-viewer")]
#[command(version, about = "Procedural cat figure viewer")]
pub struct Args {
    /// TOML config file; CLI flags override its values
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Coat color as #rrggbb
    #[arg(long, value_name = "HEX")]
    pub fur_color: Option<String>,

    /// Initial pose: idle, sit or stand (unknown values select idle)
    #[arg(long)]
    pub pose: Option<String>,

    /// Start with the fur rendered as wireframe
    #[arg(long)]
    pub wireframe: bool,

    /// Seed for the fur normal map
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lighting preset: studio, warm or dramatic
    #[arg(long)]
    pub lighting: Option<String>,

    /// Write the fur normal map to a PNG and exit without opening a window
    #[arg(long, value_name = "PNG")]
    pub export_fur_texture: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
