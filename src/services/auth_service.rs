use uuid::Uuid;

use super::user_service::UserService;
use crate::{
    auth::{
        Session, TokenBundle,
        jwt::{JwtKeys, decode_token, issue_token},
        password::verify_password_or_dummy,
    },
    config::AuthConfig,
    db::entities::user,
    error::AppError,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug)]
pub struct LoginOutcome {
    pub tokens: TokenBundle,
    pub user: user::Model,
}

#[derive(Clone)]
pub struct AuthService<'a> {
    users: UserService,
    keys: &'a JwtKeys,
    token_ttl_secs: usize,
}

impl<'a> AuthService<'a> {
    pub fn new(users: UserService, keys: &'a JwtKeys, token_ttl_secs: usize) -> Self {
        Self {
            users,
            keys,
            token_ttl_secs,
        }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let email = email.trim().to_lowercase();
        let user = self.users.find_by_email(&email).await?;

        let verified = verify_password_or_dummy(
            password,
            user.as_ref().map(|user| user.password_hash.as_str()),
        );
        let user = match user {
            Some(user) if verified => user,
            _ => return Err(AppError::authentication(INVALID_CREDENTIALS)),
        };

        let now = chrono::Utc::now().fixed_offset();
        self.users.record_login(user.id, now).await?;

        let tokens = issue_token(self.keys, &user.id, user.role(), self.token_ttl_secs)?;
        tracing::debug!(user_id = %user.id, "login succeeded");
        Ok(LoginOutcome { tokens, user })
    }

    pub fn verify(&self, access_token: &str) -> Result<Session, AppError> {
        session_from_token(self.keys, access_token)
    }

    pub async fn seed_admin(&self, cfg: &AuthConfig) -> anyhow::Result<()> {
        self.users
            .ensure_admin(&cfg.admin_email, &cfg.admin_password, &cfg.admin_full_name)
            .await
            .map_err(|err| anyhow::anyhow!("admin seed failed: {err}"))?;
        Ok(())
    }
}

pub fn session_from_token(keys: &JwtKeys, access_token: &str) -> Result<Session, AppError> {
    let claims = decode_token(keys, access_token)?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::authentication("Invalid or expired token"))?;
    Ok(Session::new(user_id, claims.role))
}
