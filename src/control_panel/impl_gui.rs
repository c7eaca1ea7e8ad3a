use crate::config::Config;
use crate::control_panel::action::{perform, PanelAction};
use crate::control_panel::interface::ControlPanel;
use crate::smart_home::controller::SmartHomeController;
use std::error::Error;

struct ControlWindow {
    controller: SmartHomeController,
    readout: String,
}

impl eframe::App for ControlWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pressed = None;

        egui::TopBottomPanel::bottom("buttons").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for action in PanelAction::ALL {
                    if ui.button(action.label()).clicked() {
                        pressed = Some(action);
                    }
                }
            });
        });

        if let Some(action) = pressed {
            self.readout = perform(&mut self.controller, action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Read-only: a &str buffer cannot be edited.
                let mut readout = self.readout.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut readout)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
            });
        });
    }
}

/// Desktop window with the five buttons and a text readout. Blocks the calling
/// thread until the window is closed.
pub struct ControlPanelGui {
    title: String,
    size: [f32; 2],
}

impl ControlPanelGui {
    pub fn new(config: &Config) -> Self {
        Self {
            title: config.window_title.clone(),
            size: config.window_size,
        }
    }
}

impl ControlPanel for ControlPanelGui {
    fn run(&mut self, controller: SmartHomeController) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.size),
            ..Default::default()
        };

        let readout = controller.status_report();
        let window = ControlWindow {
            controller,
            readout,
        };

        eframe::run_native(&self.title, options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| format!("Control panel window failed: {}", e))?;

        Ok(())
    }
}
