//! Role and ownership rules for every protected operation.
//!
//! All decisions go through [`check`], one exhaustive match over
//! `(Role, Operation)`. A new role or operation does not compile until the
//! table below covers it.

use uuid::Uuid;

use super::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List or summarise the entries of one user.
    ReadEntries,
    /// List entries across every user.
    ListAllEntries,
    ReadEntry,
    CreateEntry,
    UpdateEntry,
    DeleteEntry,
    ReadUser,
    ListUsers,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ViewSalaryReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// `target_user_id` is the owner of the resource being touched. Operations
/// that are not about a single user ignore it.
pub fn check(
    caller_role: Role,
    caller_id: Uuid,
    operation: Operation,
    target_user_id: Option<Uuid>,
) -> Decision {
    match caller_role {
        Role::Admin => Decision::Allow,
        Role::Employee => match operation {
            Operation::ReadEntries
            | Operation::ReadEntry
            | Operation::CreateEntry
            | Operation::UpdateEntry
            | Operation::DeleteEntry
            | Operation::ReadUser => {
                if target_user_id == Some(caller_id) {
                    Decision::Allow
                } else {
                    Decision::Deny
                }
            }
            Operation::ListAllEntries
            | Operation::ListUsers
            | Operation::CreateUser
            | Operation::UpdateUser
            | Operation::DeleteUser
            | Operation::ViewSalaryReport => Decision::Deny,
        },
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{Decision, Operation, check};
    use crate::auth::Role;

    const ENTRY_OPS: [Operation; 5] = [
        Operation::ReadEntries,
        Operation::ReadEntry,
        Operation::CreateEntry,
        Operation::UpdateEntry,
        Operation::DeleteEntry,
    ];

    const ADMIN_ONLY_OPS: [Operation; 6] = [
        Operation::ListAllEntries,
        Operation::ListUsers,
        Operation::CreateUser,
        Operation::UpdateUser,
        Operation::DeleteUser,
        Operation::ViewSalaryReport,
    ];

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn employee_cannot_delete_someone_elses_entry() {
        assert_eq!(
            check(Role::Employee, id(5), Operation::DeleteEntry, Some(id(6))),
            Decision::Deny
        );
        assert_eq!(
            check(Role::Admin, id(5), Operation::DeleteEntry, Some(id(6))),
            Decision::Allow
        );
    }

    #[test]
    fn employee_may_touch_only_own_entries() {
        for op in ENTRY_OPS {
            assert_eq!(check(Role::Employee, id(5), op, Some(id(5))), Decision::Allow, "{op:?}");
            assert_eq!(check(Role::Employee, id(5), op, Some(id(6))), Decision::Deny, "{op:?}");
            assert_eq!(check(Role::Employee, id(5), op, None), Decision::Deny, "{op:?}");
        }
    }

    #[test]
    fn employee_is_denied_admin_operations_even_on_self() {
        for op in ADMIN_ONLY_OPS {
            assert_eq!(check(Role::Employee, id(5), op, Some(id(5))), Decision::Deny, "{op:?}");
            assert_eq!(check(Role::Employee, id(5), op, None), Decision::Deny, "{op:?}");
        }
    }

    #[test]
    fn employee_reads_only_own_profile() {
        assert!(check(Role::Employee, id(5), Operation::ReadUser, Some(id(5))).is_allowed());
        assert!(!check(Role::Employee, id(5), Operation::ReadUser, Some(id(6))).is_allowed());
    }

    #[test]
    fn admin_is_allowed_everything() {
        for op in ENTRY_OPS.into_iter().chain(ADMIN_ONLY_OPS) {
            assert_eq!(check(Role::Admin, id(1), op, Some(id(6))), Decision::Allow, "{op:?}");
            assert_eq!(check(Role::Admin, id(1), op, None), Decision::Allow, "{op:?}");
        }
    }
}
