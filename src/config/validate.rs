use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.cors_origin_list().is_empty() {
        errors.push("general.cors_origins must list at least one origin or '*'".to_string());
    }

    let database = cfg.database();
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    match cfg.auth.as_ref() {
        None => errors.push(
            "auth section is required (auth.jwt_secret, auth.admin_password)".to_string(),
        ),
        Some(auth) => {
            if auth.jwt_secret.trim().is_empty() {
                errors.push("auth.jwt_secret must not be empty".to_string());
            }

            if auth.token_ttl_secs <= 0 {
                errors.push("auth.token_ttl_secs must be > 0".to_string());
            }

            if auth.admin_email.trim().is_empty() || !auth.admin_email.contains('@') {
                errors.push("auth.admin_email must be an email address".to_string());
            }

            if auth.admin_password.len() < 8 {
                errors.push("auth.admin_password must be at least 8 characters".to_string());
            }

            if auth.admin_full_name.trim().is_empty() {
                errors.push("auth.admin_full_name must not be empty".to_string());
            }
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, AuthConfig, DatabaseConfig};

    fn auth() -> AuthConfig {
        AuthConfig {
            jwt_secret: "secret".to_string(),
            token_ttl_secs: 3600,
            admin_email: "admin@company.com".to_string(),
            admin_password: "adminpassword".to_string(),
            admin_full_name: "Administrator".to_string(),
        }
    }

    #[test]
    fn defaults_with_auth_are_valid() {
        let cfg = AppConfig {
            auth: Some(auth()),
            ..AppConfig::default()
        };

        validate(&cfg).expect("config should be valid");
    }

    #[test]
    fn reports_every_problem_at_once() {
        let cfg = AppConfig {
            database: Some(DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                min_idle: 4,
            }),
            auth: Some(AuthConfig {
                jwt_secret: "  ".to_string(),
                admin_password: "short".to_string(),
                ..auth()
            }),
            ..AppConfig::default()
        };

        let message = validate(&cfg).expect_err("config is invalid").to_string();
        assert!(message.contains("database.min_idle"), "{message}");
        assert!(message.contains("auth.jwt_secret"), "{message}");
        assert!(message.contains("auth.admin_password"), "{message}");
    }
}
