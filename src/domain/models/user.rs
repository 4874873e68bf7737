use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Strips surrounding whitespace so stored values compare as typed.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl UserPatch {
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn status(status: UserStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_string()),
            email: self.email.map(|email| email.trim().to_string()),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.status.is_none()
    }

    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid("name must not be empty"));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::invalid(format!("malformed email: '{email}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User {
            id: 2,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut user = jane();
        user.apply(&UserPatch::role(UserRole::Admin));

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Jane");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.id, 2);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = NewUser::new("   ", "bob@x.com", UserRole::User)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn email_needs_both_sides_of_at() {
        for email in ["", "bob", "@x.com", "bob@"] {
            assert!(
                NewUser::new("Bob", email, UserRole::User).validate().is_err(),
                "accepted {email:?}"
            );
        }
        assert!(NewUser::new("Bob", "bob@x.com", UserRole::User).validate().is_ok());
    }

    #[test]
    fn patch_validates_only_present_fields() {
        assert!(UserPatch::default().validate().is_ok());
        let patch = UserPatch {
            name: Some(String::new()),
            ..UserPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn role_strings_match_wire_format() {
        for role in [UserRole::Admin, UserRole::User] {
            assert_eq!(serde_json::to_value(role).unwrap(), role.as_str());
        }
    }

    #[test]
    fn normalized_trims_name_and_email() {
        let input = NewUser::new("  Bob ", " bob@x.com\t", UserRole::User).normalized();
        assert_eq!((input.name.as_str(), input.email.as_str()), ("Bob", "bob@x.com"));

        let patch = UserPatch {
            email: Some(" BOB@x.com ".to_string()),
            ..UserPatch::default()
        }
        .normalized();
        assert_eq!(patch.email.as_deref(), Some("BOB@x.com"));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn serializes_with_lowercase_enums() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["status"], "active");
    }
}
