use uuid::Uuid;

use super::validation;
use crate::{
    auth::{Operation, Role, Session, password::hash_password},
    db::dao::{DaoLayerError, NewUser, UserChanges, UserDao},
    db::entities::user,
    error::AppError,
};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub position: String,
    pub role: Role,
    pub hourly_rate: f64,
    pub hourly_rate_delegation: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hourly_rate_delegation: Option<f64>,
    pub password: Option<String>,
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    pub async fn record_login(
        &self,
        id: Uuid,
        at: chrono::DateTime<chrono::FixedOffset>,
    ) -> Result<(), AppError> {
        Ok(self.user_dao.set_last_login(id, at).await?)
    }

    /// Profile of the caller. A token whose user is gone no longer
    /// authenticates anyone.
    pub async fn me(&self, session: &Session) -> Result<user::Model, AppError> {
        match self.user_dao.get_user(session.user_id).await {
            Ok(user) => Ok(user),
            Err(DaoLayerError::NotFound { .. }) => {
                Err(AppError::authentication("Invalid or expired token"))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_user(&self, session: &Session, id: Uuid) -> Result<user::Model, AppError> {
        session.authorize(Operation::ReadUser, Some(id))?;
        Ok(self.user_dao.get_user(id).await?)
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<user::Model>, AppError> {
        session.authorize(Operation::ListUsers, None)?;
        Ok(self.user_dao.list_users().await?)
    }

    pub async fn create_user(
        &self,
        session: &Session,
        input: CreateUserInput,
    ) -> Result<user::Model, AppError> {
        session.authorize(Operation::CreateUser, None)?;
        let user = self.insert(input).await?;
        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            created_by = %session.user_id,
            "user created"
        );
        Ok(user)
    }

    pub async fn update_user(
        &self,
        session: &Session,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<user::Model, AppError> {
        session.authorize(Operation::UpdateUser, Some(id))?;

        let changes = UserChanges {
            full_name: input
                .full_name
                .map(|name| validation::required_text("full_name", &name))
                .transpose()?,
            position: input.position.map(|position| position.trim().to_string()),
            hourly_rate: input
                .hourly_rate
                .map(|rate| validation::rate("hourly_rate", rate))
                .transpose()?,
            hourly_rate_delegation: input
                .hourly_rate_delegation
                .map(|rate| validation::rate("hourly_rate_delegation", rate))
                .transpose()?,
            password_hash: input
                .password
                .map(|password| hash_password(&password))
                .transpose()?,
        };

        Ok(self.user_dao.update_user(id, changes).await?)
    }

    /// Deletes the user and, atomically, all of their time entries.
    pub async fn delete_user(&self, session: &Session, id: Uuid) -> Result<u64, AppError> {
        session.authorize(Operation::DeleteUser, Some(id))?;
        if id == session.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        let removed_entries = self.user_dao.delete_user(id).await?;
        tracing::info!(
            user_id = %id,
            removed_entries,
            deleted_by = %session.user_id,
            "user deleted"
        );
        Ok(removed_entries)
    }

    /// Creates the configured administrator unless the email is taken.
    /// Returns whether a user was created.
    pub async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<bool, AppError> {
        let email = validation::normalize_email(email)?;
        if let Some(existing) = self.user_dao.find_by_email(&email).await? {
            tracing::info!("admin user already present: {}", existing.email);
            return Ok(false);
        }

        let user = self
            .insert(CreateUserInput {
                email,
                password: password.to_string(),
                full_name: full_name.to_string(),
                position: full_name.to_string(),
                role: Role::Admin,
                hourly_rate: 0.0,
                hourly_rate_delegation: 0.0,
            })
            .await?;
        tracing::info!("seeded admin user {}", user.email);
        Ok(true)
    }

    async fn insert(&self, input: CreateUserInput) -> Result<user::Model, AppError> {
        let new_user = NewUser {
            email: validation::normalize_email(&input.email)?,
            full_name: validation::required_text("full_name", &input.full_name)?,
            position: input.position.trim().to_string(),
            role: input.role,
            hourly_rate: validation::rate("hourly_rate", input.hourly_rate)?,
            hourly_rate_delegation: validation::rate(
                "hourly_rate_delegation",
                input.hourly_rate_delegation,
            )?,
            password_hash: hash_password(&input.password)?,
        };

        Ok(self.user_dao.create_user(new_user).await?)
    }
}
