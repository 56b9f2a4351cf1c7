use thiserror::Error;

use crate::cli::Environment;

/// Raised before any network call when the configuration is unusable.
/// The process exits with code 2 on this error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {name}: pass {flag} or set {env}")]
    Missing {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },
    #[error("backend URL must start with http:// or https://: {0}")]
    InvalidUrl(String),
}

/// Fallbacks used only in the development environment. There is no
/// fallback password anywhere: the admin secret must always be
/// injected explicitly.
pub const DEV_DEFAULT_URL: &str = "http://localhost:8055";
pub const DEV_DEFAULT_EMAIL: &str = "admin@example.com";

/// Resolved configuration handed to the orchestrator.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub email: String,
    pub password: String,
    pub environment: Environment,
}

impl Settings {
    /// Resolve CLI/env inputs into a complete configuration. In
    /// production every value must be explicit; in development the
    /// URL and email fall back to local defaults.
    pub fn resolve(
        url: Option<String>,
        email: Option<String>,
        password: Option<String>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let url = match (url, environment) {
            (Some(u), _) => u,
            (None, Environment::Development) => DEV_DEFAULT_URL.to_string(),
            (None, Environment::Production) => {
                return Err(ConfigError::Missing {
                    name: "backend URL",
                    flag: "--url",
                    env: "DIRECTUS_URL",
                });
            }
        };
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(url));
        }

        let email = match (email, environment) {
            (Some(e), _) => e,
            (None, Environment::Development) => DEV_DEFAULT_EMAIL.to_string(),
            (None, Environment::Production) => {
                return Err(ConfigError::Missing {
                    name: "admin email",
                    flag: "--email",
                    env: "DIRECTUS_ADMIN_EMAIL",
                });
            }
        };

        let password = password.ok_or(ConfigError::Missing {
            name: "admin password",
            flag: "--password",
            env: "DIRECTUS_ADMIN_PASSWORD",
        })?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            email,
            password,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_defaults_url_and_email() {
        let settings = Settings::resolve(
            None,
            None,
            Some("secret".to_string()),
            Environment::Development,
        )
        .unwrap();
        assert_eq!(settings.url, DEV_DEFAULT_URL);
        assert_eq!(settings.email, DEV_DEFAULT_EMAIL);
    }

    #[test]
    fn password_is_never_defaulted() {
        let err = Settings::resolve(None, None, None, Environment::Development).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "admin password",
                ..
            }
        ));
    }

    #[test]
    fn production_requires_explicit_url() {
        let err = Settings::resolve(
            None,
            Some("ops@example.com".to_string()),
            Some("secret".to_string()),
            Environment::Production,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "backend URL",
                ..
            }
        ));
    }

    #[test]
    fn production_requires_explicit_email() {
        let err = Settings::resolve(
            Some("https://cms.example.com".to_string()),
            None,
            Some("secret".to_string()),
            Environment::Production,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "admin email",
                ..
            }
        ));
    }

    #[test]
    fn explicit_values_win_and_trailing_slash_is_trimmed() {
        let settings = Settings::resolve(
            Some("https://cms.example.com/".to_string()),
            Some("ops@example.com".to_string()),
            Some("secret".to_string()),
            Environment::Production,
        )
        .unwrap();
        assert_eq!(settings.url, "https://cms.example.com");
        assert_eq!(settings.email, "ops@example.com");
    }

    #[test]
    fn rejects_non_http_url() {
        let err = Settings::resolve(
            Some("cms.example.com".to_string()),
            None,
            Some("secret".to_string()),
            Environment::Development,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }
}
