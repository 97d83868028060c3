use sea_orm::entity::prelude::*;

use crate::{auth::Role, base_entity};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub position: String,
    pub role: String,
    pub hourly_rate: f64,
    #[sea_orm(default_value = 0.0)]
    pub hourly_rate_delegation: f64,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(has_many)]
    pub time_entries: HasMany<super::time_entry::Entity>,
}

impl Model {
    /// Unknown stored roles fall back to the least privileged one.
    pub fn role(&self) -> Role {
        Role::try_from(self.role.as_str()).unwrap_or(Role::Employee)
    }
}

impl ActiveModelBehavior for ActiveModel {}

base_entity!(ActiveModel);
