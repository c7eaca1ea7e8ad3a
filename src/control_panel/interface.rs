use crate::smart_home::controller::SmartHomeController;

/// A front end that owns the controller for the lifetime of the session.
pub trait ControlPanel {
    fn run(&mut self, controller: SmartHomeController)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
