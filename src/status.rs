//! Status and event vocabulary shared with the widget.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Error,
    #[default]
    Idle,
    Initializing,
    Ready,
    Running,
    Unsupported,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Error => "ERROR",
            Status::Idle => "IDLE",
            Status::Initializing => "INITIALIZING",
            Status::Ready => "READY",
            Status::Running => "RUNNING",
            Status::Unsupported => "UNSUPPORTED",
        };
        write!(f, "{label}")
    }
}

/// Tags on the update messages the widget emits to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DeviceUpdate,
    FavoriteUpdate,
    PlayerUpdate,
    ProgressUpdate,
    StatusUpdate,
    TrackUpdate,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventType::DeviceUpdate => "device_update",
            EventType::FavoriteUpdate => "favorite_update",
            EventType::PlayerUpdate => "player_update",
            EventType::ProgressUpdate => "progress_update",
            EventType::StatusUpdate => "status_update",
            EventType::TrackUpdate => "track_update",
        };
        write!(f, "{label}")
    }
}
