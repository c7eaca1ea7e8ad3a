use chrono::Offset;

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub light_location: String,
    pub light_energy_per_on: f64,
    pub climate_control_energy_per_on: f64,
    pub climate_control_default_temperature: f64,
    pub lock_energy_draw: f64,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: chrono::Utc.fix(),
            light_location: "Living Room".to_string(),
            light_energy_per_on: 5.0,
            climate_control_energy_per_on: 50.0,
            climate_control_default_temperature: 24.0,
            lock_energy_draw: 0.5,
            window_title: "Smart Home Manager".to_string(),
            window_size: [400.0, 300.0],
        }
    }
}
