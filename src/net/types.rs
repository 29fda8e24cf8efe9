//! Core data model shared across pages and components.
//!
//! DESIGN
//! ======
//! All records here are plain serde DTOs. Nothing is persisted; the whole
//! data set lives in process memory and is either seeded at startup or
//! created through explicit store operations.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user. Created at signup/login, read-only afterwards,
/// dropped on logout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email address the session was opened with.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Access role.
    pub role: Role,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: f64,
}

/// User access role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A WMS imagery service. Immutable seed data; never created at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WmsService {
    pub id: String,
    pub name: String,
    /// WMS endpoint URL, consumed as an opaque external resource.
    pub url: String,
    /// Ordered layer names; never empty for seed data.
    pub layers: Vec<String>,
    pub description: String,
    pub bounds: BoundingBox,
    pub provider: Provider,
}

/// Imagery provider tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Bhuvan,
    Vedas,
    Mosdac,
    Custom,
}

/// Geographic bounding box in lon/lat degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// A box is valid when min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_lon <= self.max_lon && self.min_lat <= self.max_lat
    }
}

/// A time-sliced satellite dataset offered by a WMS service.
///
/// The owning service is referenced by id rather than embedded, so seed
/// services stay the single source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDataset {
    pub id: String,
    pub name: String,
    /// Id of the `WmsService` this dataset belongs to.
    pub service_id: String,
    /// Time range start, milliseconds since the Unix epoch.
    pub time_start: f64,
    /// Time range end, milliseconds since the Unix epoch.
    pub time_end: f64,
    /// Ground resolution in meters per pixel.
    pub resolution: f64,
    pub bounds: BoundingBox,
    /// Number of source frames available in the time range.
    pub frame_count: u32,
}

/// A mock video-generation project over a satellite dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoProject {
    pub id: String,
    pub name: String,
    pub dataset: SatelliteDataset,
    pub interpolation: InterpolationSettings,
    pub status: ProjectStatus,
    /// Output video location once processing completes.
    pub video_url: Option<String>,
    pub created_at: f64,
    pub updated_at: f64,
}

impl VideoProject {
    /// Apply a status transition if it is legal, bumping `updated_at`.
    /// Returns `false` and leaves the project untouched otherwise.
    pub fn advance(&mut self, next: ProjectStatus, now_ms: f64) -> bool {
        if !self.status.can_transition_to(next) {
            return false;
        }
        self.status = next;
        self.updated_at = now_ms;
        true
    }
}

/// Frame-interpolation configuration attached to a project. No
/// interpolation computation happens in this client; these are labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolationSettings {
    pub model: InterpolationModel,
    /// Target output frame rate.
    pub frame_rate: u32,
    pub quality: Quality,
}

/// Interpolation model label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterpolationModel {
    #[default]
    Rife,
    Dain,
    Custom,
}

/// Output quality label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

/// Project processing status.
///
/// Progression is monotone: pending -> processing -> completed | error.
/// A project never leaves `Completed` or `Error`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
}

impl ProjectStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Processing, Self::Completed)
                | (Self::Processing, Self::Error)
        )
    }

    /// Short label used for status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

/// A single chat transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: Author,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Optional action tag + payload attached by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Bot,
}

/// Opaque assistant metadata (action tag plus payload).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub action: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
