use serde::Deserialize;
use sha2::{Digest, Sha256};
use validator::Validate;

use crate::error::FormErrors;
use crate::models::LoginCredentials;

/// Sign-in screen input.
#[derive(Clone, PartialEq, Debug, Default, Deserialize, Validate)]
pub struct SignInForm {
    /// Account email.
    #[validate(
        length(min = 1, message = "Please enter your email"),
        email(message = "Please enter a valid email address")
    )]
    pub user_id: String,
    /// Plain password; never sent as typed.
    #[validate(length(min = 4, message = "Password must be at least 4 characters long"))]
    pub password: String,
}

impl SignInForm {
    /// Validated credentials with the password replaced by its SHA-256 hex
    /// digest.
    pub fn to_credentials(&self) -> Result<LoginCredentials, FormErrors> {
        let form = Self {
            user_id: self.user_id.trim().to_string(),
            password: self.password.clone(),
        };
        let mut errors = FormErrors::new();
        if form.password.is_empty() {
            errors.add("password", "Please enter your password");
        }
        if let Err(e) = form.validate() {
            errors.extend_from(&e);
        }
        errors.into_result()?;

        Ok(LoginCredentials {
            user_id: form.user_id,
            password: hash_password(&form.password),
        })
    }
}

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
