//! Construction options for the state units
//!
//! Deserialized from the `[event_log]` and `[transient]` tables of
//! `veneer.toml`. Every field has a default, so an empty table (or a missing
//! one) is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::event_log::DEFAULT_CAPACITY;
use crate::transient::DEFAULT_DELAY;

/// Options for [`BoundedEventLog`](crate::BoundedEventLog)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventLogConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Options for [`TransientStateFlag`](crate::TransientStateFlag)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransientConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    u64::try_from(DEFAULT_DELAY.as_millis()).unwrap_or(u64::MAX)
}

impl TransientConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// All state unit options
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StateConfig {
    #[serde(default)]
    pub event_log: EventLogConfig,
    #[serde(default)]
    pub transient: TransientConfig,
}

impl StateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.event_log.capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        if self.transient.delay_ms == 0 {
            return Err(Error::InvalidDelay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StateConfig::default();
        assert_eq!(config.event_log.capacity, 3);
        assert_eq!(config.transient.delay(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = StateConfig::default();
        config.event_log.capacity = 0;
        assert_eq!(config.validate(), Err(Error::InvalidCapacity));

        let mut config = StateConfig::default();
        config.transient.delay_ms = 0;
        assert_eq!(config.validate(), Err(Error::InvalidDelay));
    }
}
