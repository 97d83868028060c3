use uuid::Uuid;

use super::{
    Role,
    access::{self, Operation},
};
use crate::error::AppError;

/// The verified caller of one request. Built from the bearer token by the
/// request guard and handed to every service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn authorize(
        &self,
        operation: Operation,
        target_user_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        let decision = access::check(self.role, self.user_id, operation, target_user_id);
        if decision.is_allowed() {
            return Ok(());
        }

        tracing::debug!(
            caller = %self.user_id,
            role = self.role.as_str(),
            ?operation,
            target = ?target_user_id,
            "access denied"
        );
        Err(AppError::access_denied())
    }

    /// The user an operation acts for: the requested one, or the caller when
    /// nothing was requested.
    pub fn effective_user(&self, requested: Option<Uuid>) -> Uuid {
        requested.unwrap_or(self.user_id)
    }
}
