use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of the admin credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthStatusDto {
    pub status: bool,
}
