//! Snowflake ID - time-ordered 64-bit identifier used as primary key
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: i64 = 10;
const SEQUENCE_BITS: i64 = 12;
const TIMESTAMP_SHIFT: i64 = WORKER_BITS + SEQUENCE_BITS;

/// Record identifier shared by every table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this ID was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> TIMESTAMP_SHIFT) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & ((1 << WORKER_BITS) - 1)) as u16
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.trim()
            .parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// JSON carries IDs as strings; browsers lose precision above 2^53.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Snowflake(n)),
            Raw::Text(s) => Snowflake::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Lock-free ID generator
///
/// Keeps the last issued ID and always hands out something strictly larger,
/// borrowing from the next millisecond when the sequence is exhausted.
pub struct SnowflakeGenerator {
    worker_id: u16,
    last: AtomicI64,
}

impl SnowflakeGenerator {
    /// Largest ID that fits the 10-bit worker field
    pub const MAX_WORKER_ID: u16 = 1023;

    /// # Panics
    /// Panics if `worker_id > MAX_WORKER_ID`
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= Self::MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            last: AtomicI64::new(0),
        }
    }

    pub fn generate(&self) -> Snowflake {
        let worker = i64::from(self.worker_id) << SEQUENCE_BITS;
        let floor = ((now_millis() - Snowflake::EPOCH) << TIMESTAMP_SHIFT) | worker;

        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(next_id(last, floor, worker))
            })
            .unwrap_or_else(|last| last);

        Snowflake::new(next_id(previous, floor, worker))
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn next_id(last: i64, floor: i64, worker: i64) -> i64 {
    if floor > last {
        return floor;
    }
    let sequence_mask = (1 << SEQUENCE_BITS) - 1;
    let sequence = (last & sequence_mask) + 1;
    if sequence > sequence_mask {
        // roll into the next millisecond
        let millis = (last >> TIMESTAMP_SHIFT) + 1;
        (millis << TIMESTAMP_SHIFT) | worker
    } else {
        (last & !sequence_mask) | sequence
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(Snowflake::EPOCH)
}
