use std::env;

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Always binds every interface. Environment variables:
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::with_port(env::var("SERVICE_PORT").ok())
    }

    fn with_port(port: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            ip: defaults.ip,
            port: port.unwrap_or(defaults.port),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: "9090".to_string(),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:9090");
    }

    #[test]
    fn should_listen_on_port_8080_by_default() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn should_bind_all_interfaces_when_port_overridden() {
        let config = ServerConfig::with_port(Some("9090".to_string()));

        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn should_fall_back_to_8080_when_port_unset() {
        let config = ServerConfig::with_port(None);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
