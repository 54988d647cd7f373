use sharealarm_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code used to create new `Organization`s
    pub create_org_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// Maximum allowed duration in millis between now and the fire time
    /// of a new alarm. Alerts further out than this are rejected when
    /// they are scheduled, which keeps a mistyped event year from
    /// parking timers that would never reasonably fire.
    pub alarm_horizon_limit: i64,
    /// Whether this process is allowed to register exact one-shot
    /// timers. When not granted, every schedule call fails and a
    /// capability request is issued instead of silently degrading to
    /// inexact timers.
    pub exact_alarm_capability: bool,
}

impl Config {
    pub fn new() -> Self {
        let create_org_secret_code = match std::env::var("CREATE_ORG_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find CREATE_ORG_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!(
                    "Secret code for creating organizations was generated and set to: {}",
                    code
                );
                code
            }
        };
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let exact_alarm_capability = match std::env::var("EXACT_ALARM_CAPABILITY") {
            Ok(value) => match value.parse::<bool>() {
                Ok(granted) => granted,
                Err(_) => {
                    warn!(
                        "The given EXACT_ALARM_CAPABILITY: {} is not valid, falling back to: true.",
                        value
                    );
                    true
                }
            },
            Err(_) => true,
        };
        Self {
            create_org_secret_code,
            port,
            alarm_horizon_limit: 1000 * 60 * 60 * 24 * 365, // 365 days
            exact_alarm_capability,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn falls_back_to_default_port_on_invalid_value() {
        std::env::set_var("PORT", "not-a-port");
        let config = Config::new();
        assert_eq!(config.port, 5000);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn reads_exact_alarm_capability_from_env() {
        std::env::set_var("EXACT_ALARM_CAPABILITY", "false");
        assert!(!Config::new().exact_alarm_capability);

        std::env::set_var("EXACT_ALARM_CAPABILITY", "yes please");
        assert!(Config::new().exact_alarm_capability);

        std::env::remove_var("EXACT_ALARM_CAPABILITY");
        assert!(Config::new().exact_alarm_capability);
    }
}
