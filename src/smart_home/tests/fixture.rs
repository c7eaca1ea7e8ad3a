use crate::config::Config;
use crate::library::logger::impl_fake::LoggerFake;
use crate::smart_home::controller::SmartHomeController;
use crate::smart_home::setup::default_home;
use std::sync::Arc;

pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub controller: SmartHomeController,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn kitchen() -> Self {
        let mut config = Config::default();
        config.light_location = "Kitchen".to_string();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let logger = LoggerFake::new();
        let controller = default_home(&config, Arc::new(logger.clone()));

        Self {
            config,
            logger,
            controller,
        }
    }
}
