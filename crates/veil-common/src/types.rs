use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the participant the stylesheet is being built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: String,
    /// Whether this participant is the session owner (GM).
    pub is_owner: bool,
}

impl Viewer {
    pub fn owner(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            is_owner: true,
        }
    }

    pub fn player(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            is_owner: false,
        }
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_owner {
            write!(f, "{} (owner)", self.user_id)
        } else {
            write!(f, "{}", self.user_id)
        }
    }
}
