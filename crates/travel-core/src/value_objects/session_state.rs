//! Session lifecycle as an explicit state machine
//!
//! ```text
//! LoggedOut --Login--> Authenticated --Lock--> Locked
//!     ^                  |    ^                  |
//!     +-----Logout-------+    +-----Unlock-------+
//! ```
//! `Logout` is accepted from `Locked` as well.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionRole {
    Admin,
    Employee,
}

impl SessionRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for SessionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    Authenticated,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Login,
    Lock,
    Unlock,
    Logout,
}

impl SessionState {
    /// Reducer: the only place session transitions are decided
    pub fn apply(self, event: SessionEvent) -> Result<SessionState, DomainError> {
        use SessionEvent::{Lock, Login, Logout, Unlock};
        use SessionState::{Authenticated, Locked, LoggedOut};

        match (self, event) {
            (LoggedOut, Login) => Ok(Authenticated),
            (Authenticated, Lock) => Ok(Locked),
            (Locked, Unlock) => Ok(Authenticated),
            (Authenticated | Locked, Logout) => Ok(LoggedOut),
            (from, event) => Err(DomainError::InvalidSessionTransition {
                from: from.as_str(),
                event: event.as_str(),
            }),
        }
    }

    pub fn is_authenticated(self) -> bool {
        !matches!(self, Self::LoggedOut)
    }

    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoggedOut => "logged out",
            Self::Authenticated => "authenticated",
            Self::Locked => "locked",
        }
    }
}

impl SessionEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "log in",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Logout => "log out",
        }
    }
}
