use crate::device::interface::Device;
use crate::library::format::format_real;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Ordered registry of devices. Registration order is broadcast order and
/// report order.
pub struct SmartHomeController {
    devices: Vec<Box<dyn Device>>,
    total_energy: f64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SmartHomeController {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            devices: Vec::new(),
            total_energy: 0.0,
            logger: logger.with_namespace("controller"),
        }
    }

    pub fn register(&mut self, device: Box<dyn Device>) {
        self.devices.push(device);
    }

    /// Sends `command` unchanged to every device, then recomputes the total
    /// from the devices' current readings.
    pub fn broadcast(&mut self, command: &str) {
        let _ = self.logger.info(&format!(
            "Broadcasting {:?} to {} device(s)",
            command,
            self.devices.len()
        ));

        for device in self.devices.iter_mut() {
            device.apply_command(command);
        }

        self.total_energy = self
            .devices
            .iter()
            .map(|device| device.energy_reading())
            .sum();
    }

    /// Total as of the most recent broadcast; not recomputed here.
    pub fn status_report(&self) -> String {
        let mut report = String::new();
        for device in &self.devices {
            report.push_str(&device.status_text());
            report.push('\n');
        }
        report.push_str(&format!(
            "Total Energy Used: {}W\n",
            format_real(self.total_energy)
        ));
        report
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
