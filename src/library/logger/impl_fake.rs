use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Level {
    Info,
    Warn,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub namespace: Option<String>,
    pub message: String,
}

/// Records every line instead of printing it. Namespaced children share the
/// same record, so a test can hold the root and inspect everything.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == Level::Warn)
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        });
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(Level::Info, message);
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(Level::Warn, message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            entries: self.entries.clone(),
        })
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::*;

    #[test]
    fn test_namespaced_children_share_entries() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("home").with_namespace("ac");

        child.warn("Invalid temperature command.").unwrap();
        logger.info("started").unwrap();

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].namespace.as_deref(), Some("home:ac"));
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[1].namespace, None);
        assert_eq!(logger.warnings().len(), 1);
    }
}
