use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    clock::Clock,
    config::{AppConfig, AuthConfig},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth: AuthConfig,
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        db: DatabaseConnection,
        clock: Arc<dyn Clock>,
    ) -> anyhow::Result<Arc<Self>> {
        let auth = config.auth()?.clone();
        let jwt = JwtKeys::from_secret(auth.jwt_secret.as_bytes());
        Ok(Arc::new(Self {
            config,
            auth,
            db,
            jwt,
            clock,
        }))
    }

    pub fn token_ttl_secs(&self) -> usize {
        self.auth.token_ttl_secs.max(0) as usize
    }
}
