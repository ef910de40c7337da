//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use parcelview_core::types::{EntityId, Timestamp};

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    /// Set by an admin before the user may sign in.
    pub approved: bool,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user at signup.
///
/// The id is the one issued by the auth vendor when present; the server
/// generates one otherwise.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub id: Option<EntityId>,
    pub email: String,
    pub name: String,
}
