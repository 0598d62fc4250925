use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub account_no: String,
    pub user_id: String,
    #[serde(default)]
    pub role: Vec<String>,
    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: i64,
}

impl AuthUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r == role)
    }
}

/// Body of the sign-in call. `password` is already hashed.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub user_id: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AuthUser,
}
