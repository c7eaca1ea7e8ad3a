use crate::command::Command;
use crate::device::interface::Device;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceLight {
    powered: bool,
    location: String,
    cumulative_energy: f64,
    energy_per_on: f64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceLight {
    pub fn new(location: &str, energy_per_on: f64, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            powered: false,
            location: location.to_string(),
            cumulative_energy: 0.0,
            energy_per_on,
            logger: logger.with_namespace("light"),
        }
    }
}

impl Device for DeviceLight {
    fn apply_command(&mut self, command: &str) {
        match Command::parse(command) {
            // Charged on every ON, even when already powered.
            Command::On => {
                self.powered = true;
                self.cumulative_energy += self.energy_per_on;
                let _ = self.logger.info(&format!("{} light on", self.location));
            }
            Command::Off => {
                self.powered = false;
                let _ = self.logger.info(&format!("{} light off", self.location));
            }
            _ => {}
        }
    }

    fn status_text(&self) -> String {
        format!(
            "Light [{}] is {}",
            self.location,
            if self.powered { "ON" } else { "OFF" }
        )
    }

    fn energy_reading(&self) -> f64 {
        self.cumulative_energy
    }
}
