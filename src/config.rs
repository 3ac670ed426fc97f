use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use sequenceit_notification::{EmailConfig, RelayConfig};
use serde::Deserialize;
use std::{
    env,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub root: RootConfig,
    pub email: EmailConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_days: u64,
}

/// Administrator account created at startup when missing.
#[derive(Debug, Deserialize, Clone)]
pub struct RootConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    /// Where the SMTP delivery channel posts submissions. Unset means this
    /// server's own `/api/send-email` on the address it is bound to.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ContactConfig {
    pub fn endpoint_for(&self, local_addr: SocketAddr) -> String {
        if let Some(endpoint) = &self.endpoint {
            return endpoint.to_owned();
        }

        let mut addr = local_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(match addr {
                SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
            });
        }

        format!("http://{addr}/api/send-email")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SEQUENCEIT__EMAIL__SMTP_PASSWORD, etc.)
    /// 2. Config file specified by path or CONFIG_PATH
    /// 3. Defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:sequenceit.db")?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.issuer", "sequenceit")?
            .set_default("jwt.audience", "sequenceit-admin")?
            .set_default("jwt.expiration_days", 7)?
            .set_default("root.email", "")?
            .set_default("root.password", "")?
            .set_default("email.smtp_host", "")?
            .set_default("email.smtp_port", 587)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.smtp_insecure", false)?
            .set_default("email.from_address", "")?
            .set_default("email.contact_address", "")?
            .set_default("relay.endpoint", "https://api.emailjs.com/api/v1.0/email/send")?
            .set_default("relay.public_key", "")?
            .set_default("relay.service_id", "")?
            .set_default("relay.template_id", "")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SEQUENCEIT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Checks every required setting and reports all missing ones at once.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = vec![];
        let required = [
            ("jwt.secret", &self.jwt.secret),
            ("root.email", &self.root.email),
            ("root.password", &self.root.password),
            ("email.smtp_host", &self.email.smtp_host),
            ("email.from_address", &self.email.from_address),
            ("email.contact_address", &self.email.contact_address),
            ("relay.endpoint", &self.relay.endpoint),
            ("relay.public_key", &self.relay.public_key),
            ("relay.service_id", &self.relay.service_id),
            ("relay.template_id", &self.relay.template_id),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                missing.push(key);
            }
        }

        if !self.email.smtp_insecure {
            if self.email.smtp_username.trim().is_empty() {
                missing.push("email.smtp_username");
            }
            if self.email.smtp_password.trim().is_empty() {
                missing.push("email.smtp_password");
            }
        }

        if !missing.is_empty() {
            return Err(format!("Missing required configuration: {}", missing.join(", ")));
        }

        if self.jwt.secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long".to_string());
        }
        if self.root.password.len() < 8 {
            return Err("Root password must be at least 8 characters long".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        for (key, address) in [
            ("email.from_address", &self.email.from_address),
            ("email.contact_address", &self.email.contact_address),
        ] {
            if address.parse::<lettre::message::Mailbox>().is_err() {
                return Err(format!("{key} is not a valid email address"));
            }
        }

        for (key, endpoint) in [
            ("relay.endpoint", Some(&self.relay.endpoint)),
            ("contact.endpoint", self.contact.endpoint.as_ref()),
        ] {
            let Some(endpoint) = endpoint else {
                continue;
            };

            match url::Url::parse(endpoint) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => return Err(format!("{key} must be an http(s) URL")),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite:test.db".to_string(),
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            issuer: "sequenceit".to_string(),
            audience: "sequenceit-admin".to_string(),
            expiration_days: 7,
        },
        root: RootConfig {
            email: "root@sequenceit.test".to_string(),
            password: "root-password".to_string(),
        },
        email: EmailConfig {
            smtp_host: "smtp.sequenceit.test".to_string(),
            smtp_port: 587,
            smtp_username: "mailer".to_string(),
            smtp_password: "secret".to_string(),
            smtp_insecure: false,
            from_address: "SequenceIT <noreply@sequenceit.test>".to_string(),
            contact_address: "hello@sequenceit.test".to_string(),
        },
        relay: RelayConfig {
            endpoint: "https://relay.sequenceit.test/send".to_string(),
            public_key: "pk".to_string(),
            service_id: "service".to_string(),
            template_id: "template".to_string(),
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}
