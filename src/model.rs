use chrono::{DateTime, Local, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    /// Older task files spell this `in progress`.
    #[serde(alias = "in progress")]
    InProgress,
    Done,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// A single tracked task. Field order here is the field order on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    /// Seconds since the Unix epoch.
    pub created_at: f64,
    /// Seconds since the Unix epoch.
    pub updated_at: f64,
}

/// Current wall-clock time as fractional epoch seconds.
pub fn now() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}

/// Convert fractional epoch seconds into a local date-time.
pub fn local_time(epoch_secs: f64) -> Option<DateTime<Local>> {
    if !epoch_secs.is_finite() {
        return None;
    }
    let secs = epoch_secs.floor();
    let nanos = ((epoch_secs - secs) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
        .map(|utc| utc.with_timezone(&Local))
}

impl Task {
    pub fn new(id: u64, description: String) -> Self {
        let now = now();
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Never moves it backwards if the clock has.
    pub fn touch(&mut self) {
        self.updated_at = now().max(self.updated_at);
    }

    pub fn created_local(&self) -> Option<DateTime<Local>> {
        local_time(self.created_at)
    }
}
