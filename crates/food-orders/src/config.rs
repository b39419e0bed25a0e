use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Channel capacities for the running system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Inbox capacity of the catalog and order actors.
    pub actor_buffer: usize,
    /// Inbox capacity of the notification hub.
    pub hub_buffer: usize,
    /// Queue capacity of each notification listener.
    pub listener_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            hub_buffer: 256,
            listener_buffer: 64,
        }
    }
}

impl SystemConfig {
    /// Reads `FOOD_ACTOR_BUFFER`, `FOOD_HUB_BUFFER` and `FOOD_LISTENER_BUFFER`, loading `.env`
    /// first if present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            actor_buffer: capacity(&lookup, "FOOD_ACTOR_BUFFER", defaults.actor_buffer)?,
            hub_buffer: capacity(&lookup, "FOOD_HUB_BUFFER", defaults.hub_buffer)?,
            listener_buffer: capacity(&lookup, "FOOD_LISTENER_BUFFER", defaults.listener_buffer)?,
        };
        tracing::info!(?config, "System configuration loaded");
        Ok(config)
    }
}

fn capacity(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: format!("{e} ({raw:?})"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_unset_variables_use_defaults() {
        let config = SystemConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = SystemConfig::from_lookup(lookup_in(&[
            ("FOOD_ACTOR_BUFFER", "8"),
            ("FOOD_LISTENER_BUFFER", " 2 "),
        ]))
        .unwrap();
        assert_eq!(config.actor_buffer, 8);
        assert_eq!(config.hub_buffer, 256);
        assert_eq!(config.listener_buffer, 2);
    }

    #[test]
    fn test_zero_and_garbage_are_rejected() {
        let zero = SystemConfig::from_lookup(lookup_in(&[("FOOD_HUB_BUFFER", "0")]));
        assert!(matches!(
            zero,
            Err(ConfigError::Invalid {
                var: "FOOD_HUB_BUFFER",
                ..
            })
        ));

        let garbage = SystemConfig::from_lookup(lookup_in(&[("FOOD_ACTOR_BUFFER", "lots")]));
        assert!(matches!(
            garbage,
            Err(ConfigError::Invalid {
                var: "FOOD_ACTOR_BUFFER",
                ..
            })
        ));
    }
}
