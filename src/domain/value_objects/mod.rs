use serde::{Deserialize, Serialize};

use crate::domain::models::{User, UserRole};

/// Search box plus role dropdown of the user-management table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

impl UserFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            role: None,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn matches(&self, user: &User) -> bool {
        let matches_role = self.role.is_none_or(|role| user.role == role);
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            }
        };
        matches_role && matches_search
    }

    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().filter(|u| self.matches(u)).collect()
    }
}
