use crate::config::Config;
use crate::device::impl_climate_control::DeviceClimateControl;
use crate::device::impl_light::DeviceLight;
use crate::device::impl_lock::DeviceLock;
use crate::library::logger::interface::Logger;
use crate::smart_home::controller::SmartHomeController;
use std::sync::Arc;

/// The startup home: one light, one air conditioner, one door lock.
pub fn default_home(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> SmartHomeController {
    let logger = logger.with_namespace("home");
    let mut controller = SmartHomeController::new(logger.clone());

    controller.register(Box::new(DeviceLight::new(
        &config.light_location,
        config.light_energy_per_on,
        logger.clone(),
    )));
    controller.register(Box::new(DeviceClimateControl::new(
        config.climate_control_default_temperature,
        config.climate_control_energy_per_on,
        logger.clone(),
    )));
    controller.register(Box::new(DeviceLock::new(config.lock_energy_draw, logger)));

    controller
}
