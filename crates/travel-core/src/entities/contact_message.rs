//! Contact message entity - inbound enquiry from the public site

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    Low,
    #[default]
    Normal,
    High,
}

impl MessageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for MessageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::ValidationError(format!(
                "unknown message status: {other}"
            ))),
        }
    }
}

impl MessagePriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl FromStr for MessagePriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(DomainError::ValidationError(format!(
                "unknown message priority: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: Snowflake,
    pub first_name: String,
    pub email: String,
    pub message: String,
    pub status: MessageStatus,
    pub priority: MessagePriority,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// New messages start unread with normal priority
    pub fn new(id: Snowflake, first_name: String, email: String, message: String) -> Self {
        Self {
            id,
            first_name,
            email,
            message,
            status: MessageStatus::default(),
            priority: MessagePriority::default(),
            created_at: Utc::now(),
        }
    }
}
