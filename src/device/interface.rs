/// A simulated appliance. Every device receives every broadcast command and
/// ignores the ones it cannot act on.
pub trait Device {
    /// Applies a command string. Unknown commands are a no-op.
    fn apply_command(&mut self, command: &str);

    /// One human-readable line describing the current state.
    fn status_text(&self) -> String;

    /// Energy used so far (or the fixed draw, for devices that do not accumulate).
    fn energy_reading(&self) -> f64;
}
