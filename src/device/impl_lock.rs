use crate::command::Command;
use crate::device::interface::Device;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct DeviceLock {
    locked: bool,
    energy_draw: f64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceLock {
    pub fn new(energy_draw: f64, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            locked: true,
            energy_draw,
            logger: logger.with_namespace("door_lock"),
        }
    }
}

impl Device for DeviceLock {
    fn apply_command(&mut self, command: &str) {
        match Command::parse(command) {
            Command::Lock => {
                self.locked = true;
                let _ = self.logger.info("Door locked");
            }
            Command::Unlock => {
                self.locked = false;
                let _ = self.logger.info("Door unlocked");
            }
            _ => {}
        }
    }

    fn status_text(&self) -> String {
        format!(
            "Door is {}",
            if self.locked { "LOCKED" } else { "UNLOCKED" }
        )
    }

    fn energy_reading(&self) -> f64 {
        self.energy_draw
    }
}
