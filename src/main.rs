use clap::Parser;
use cli::{Args, PanelKind};
use config::Config;
use control_panel::impl_console::ControlPanelConsole;
use control_panel::impl_gui::ControlPanelGui;
use control_panel::interface::ControlPanel;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use smart_home::setup::default_home;
use std::sync::Arc;

mod cli;
mod command;
mod config;
mod control_panel;
mod device;
mod library;
mod smart_home;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = Config::default();
    args.apply(&mut config);

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let controller = default_home(&config, logger.clone());

    logger.info(&format!(
        "Registered {} device(s), opening {:?} panel",
        controller.len(),
        args.panel
    ))?;

    let mut panel: Box<dyn ControlPanel> = match args.panel {
        PanelKind::Gui => Box::new(ControlPanelGui::new(&config)),
        PanelKind::Console => Box::new(ControlPanelConsole::stdio()),
    };

    panel.run(controller)?;

    Ok(())
}
