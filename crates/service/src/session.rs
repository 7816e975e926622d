//! Login stub.
//!
//! Cosmetic only: any non-empty email/password pair "logs in". Nothing in the
//! facade checks the resulting session.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Role picked on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Manager,
    Receptionist,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Receptionist => "receptionist",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login form input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Who the UI shows as signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    /// Local part of the email address.
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("please fill in all fields")]
    MissingCredentials,
}

pub fn login(credentials: &Credentials) -> Result<SessionUser, SessionError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(SessionError::MissingCredentials);
    }

    let name = email.split('@').next().unwrap_or(email).to_string();
    info!(role = %credentials.role, "session started");

    Ok(SessionUser {
        email: email.to_string(),
        name,
        role: credentials.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            role: Role::default(),
        }
    }

    #[test]
    fn derives_name_from_email_local_part() {
        let user = login(&credentials("jane.doe@stock.example", "secret")).unwrap();
        assert_eq!(user.name, "jane.doe");
        assert_eq!(user.email, "jane.doe@stock.example");
        assert_eq!(user.role, Role::Manager);
    }

    #[test]
    fn keeps_selected_role() {
        let mut creds = credentials("front@desk.example", "pw");
        creds.role = Role::Receptionist;
        assert_eq!(login(&creds).unwrap().role, Role::Receptionist);
    }

    #[test]
    fn rejects_missing_email_or_password() {
        assert_eq!(login(&credentials("  ", "pw")), Err(SessionError::MissingCredentials));
        assert_eq!(login(&credentials("a@b.example", "")), Err(SessionError::MissingCredentials));
    }

    #[test]
    fn email_without_at_sign_uses_whole_address_as_name() {
        assert_eq!(login(&credentials("warehouse", "pw")).unwrap().name, "warehouse");
    }

    #[test]
    fn role_defaults_when_absent_from_json() {
        let creds: Credentials = serde_json::from_str(r#"{"email":"a@b.example","password":"x"}"#).unwrap();
        assert_eq!(creds.role, Role::Manager);
    }
}
