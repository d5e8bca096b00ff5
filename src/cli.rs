// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "First-person free-look camera demo", long_about = None)]
pub struct Cli {
    /// Mouse sensitivity in degrees per pixel (overrides the tuning file)
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Movement speed in units per second (overrides the tuning file)
    #[arg(long)]
    pub speed: Option<f32>,

    /// JSON tuning file with `sensitivity` and `speed` fields
    #[arg(long)]
    pub tuning: Option<PathBuf>,

    /// Log the camera pose once per second
    #[arg(long = "log-pose", default_value = "false")]
    pub log_pose: bool,
}
