use crate::command::Command;
use crate::device::interface::Device;
use crate::library::format::format_real;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceClimateControl {
    powered: bool,
    target_temperature: f64,
    cumulative_energy: f64,
    energy_per_on: f64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceClimateControl {
    pub fn new(
        target_temperature: f64,
        energy_per_on: f64,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            powered: false,
            target_temperature,
            cumulative_energy: 0.0,
            energy_per_on,
            logger: logger.with_namespace("smart_ac"),
        }
    }

    fn set_temperature(&mut self, argument: &str) {
        match argument.parse::<f64>() {
            Ok(temperature) => {
                self.target_temperature = temperature;
                let _ = self.logger.info(&format!(
                    "Target temperature set to {}°C",
                    format_real(temperature)
                ));
            }
            Err(e) => {
                let _ = self.logger.warn(&format!(
                    "Invalid temperature command. {:?}: {}",
                    argument, e
                ));
            }
        }
    }
}

impl Device for DeviceClimateControl {
    fn apply_command(&mut self, command: &str) {
        match Command::parse(command) {
            // Charged on every ON, even when already powered.
            Command::On => {
                self.powered = true;
                self.cumulative_energy += self.energy_per_on;
                let _ = self.logger.info("Smart AC on");
            }
            Command::Off => {
                self.powered = false;
                let _ = self.logger.info("Smart AC off");
            }
            Command::SetTemperature(argument) => self.set_temperature(argument),
            _ => {}
        }
    }

    fn status_text(&self) -> String {
        if self.powered {
            format!("Smart AC is ON at {}°C", format_real(self.target_temperature))
        } else {
            "Smart AC is OFF".to_string()
        }
    }

    fn energy_reading(&self) -> f64 {
        self.cumulative_energy
    }
}
