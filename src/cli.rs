use crate::config::Config;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum PanelKind {
    Gui,
    Console,
}

/// Smart home simulator
#[derive(Parser, Debug)]
#[command(name = "smart-home-simulator")]
#[command(about = "Drive a few simulated smart-home devices from a control panel", long_about = None)]
pub struct Args {
    /// Which control panel to open
    #[arg(long, value_enum, default_value_t = PanelKind::Gui)]
    pub panel: PanelKind,

    /// Room label shown for the light
    #[arg(long)]
    pub location: Option<String>,
}

impl Args {
    pub fn apply(&self, config: &mut Config) {
        if let Some(location) = &self.location {
            config.light_location = location.clone();
        }
    }
}
