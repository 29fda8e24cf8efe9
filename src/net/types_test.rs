use super::*;

fn sample_bounds() -> BoundingBox {
    BoundingBox {
        min_lon: 68.7,
        min_lat: 8.4,
        max_lon: 97.25,
        max_lat: 37.6,
    }
}

fn sample_dataset() -> SatelliteDataset {
    SatelliteDataset {
        id: "bhuvan-1-dataset".to_owned(),
        name: "BHUVAN composite".to_owned(),
        service_id: "bhuvan-1".to_owned(),
        time_start: 0.0,
        time_end: 1000.0,
        resolution: 30.0,
        bounds: sample_bounds(),
        frame_count: 24,
    }
}

fn sample_project(status: ProjectStatus) -> VideoProject {
    VideoProject {
        id: "p-1".to_owned(),
        name: "Monsoon animation".to_owned(),
        dataset: sample_dataset(),
        interpolation: InterpolationSettings {
            model: InterpolationModel::Rife,
            frame_rate: 30,
            quality: Quality::High,
        },
        status,
        video_url: None,
        created_at: 0.0,
        updated_at: 0.0,
    }
}

// =============================================================
// BoundingBox
// =============================================================

#[test]
fn bounding_box_valid_when_min_leq_max() {
    assert!(sample_bounds().is_valid());
}

#[test]
fn bounding_box_invalid_when_lon_axis_inverted() {
    let mut bounds = sample_bounds();
    bounds.min_lon = 100.0;
    assert!(!bounds.is_valid());
}

#[test]
fn bounding_box_invalid_when_lat_axis_inverted() {
    let mut bounds = sample_bounds();
    bounds.min_lat = 40.0;
    assert!(!bounds.is_valid());
}

// =============================================================
// ProjectStatus transitions
// =============================================================

#[test]
fn status_pending_may_only_start_processing() {
    assert!(ProjectStatus::Pending.can_transition_to(ProjectStatus::Processing));
    assert!(!ProjectStatus::Pending.can_transition_to(ProjectStatus::Completed));
    assert!(!ProjectStatus::Pending.can_transition_to(ProjectStatus::Error));
    assert!(!ProjectStatus::Pending.can_transition_to(ProjectStatus::Pending));
}

#[test]
fn status_processing_ends_in_completed_or_error() {
    assert!(ProjectStatus::Processing.can_transition_to(ProjectStatus::Completed));
    assert!(ProjectStatus::Processing.can_transition_to(ProjectStatus::Error));
    assert!(!ProjectStatus::Processing.can_transition_to(ProjectStatus::Pending));
}

#[test]
fn status_terminal_states_never_regress() {
    for terminal in [ProjectStatus::Completed, ProjectStatus::Error] {
        for next in [
            ProjectStatus::Pending,
            ProjectStatus::Processing,
            ProjectStatus::Completed,
            ProjectStatus::Error,
        ] {
            assert!(!terminal.can_transition_to(next));
        }
    }
}

#[test]
fn project_advance_applies_legal_transition_and_bumps_updated_at() {
    let mut project = sample_project(ProjectStatus::Pending);
    assert!(project.advance(ProjectStatus::Processing, 42.0));
    assert_eq!(project.status, ProjectStatus::Processing);
    assert_eq!(project.updated_at, 42.0);
}

#[test]
fn project_advance_rejects_regression_from_completed() {
    let mut project = sample_project(ProjectStatus::Completed);
    assert!(!project.advance(ProjectStatus::Pending, 42.0));
    assert_eq!(project.status, ProjectStatus::Completed);
    assert_eq!(project.updated_at, 0.0);
}

// =============================================================
// Serde representation
// =============================================================

#[test]
fn provider_serializes_uppercase() {
    assert_eq!(serde_json::json!(Provider::Bhuvan), serde_json::json!("BHUVAN"));
    assert_eq!(serde_json::json!(Provider::Custom), serde_json::json!("CUSTOM"));
}

#[test]
fn status_and_quality_serialize_lowercase() {
    assert_eq!(serde_json::json!(ProjectStatus::Processing), serde_json::json!("processing"));
    assert_eq!(serde_json::json!(Quality::Ultra), serde_json::json!("ultra"));
}

#[test]
fn interpolation_model_serializes_uppercase() {
    assert_eq!(serde_json::json!(InterpolationModel::Rife), serde_json::json!("RIFE"));
}

#[test]
fn chat_message_roundtrips_with_metadata() {
    let message = ChatMessage {
        id: "m-1".to_owned(),
        author: Author::Bot,
        content: "done".to_owned(),
        timestamp: 1.0,
        metadata: Some(MessageMetadata {
            action: "open-dataset".to_owned(),
            data: serde_json::json!({ "id": "bhuvan-1" }),
        }),
    };
    let json = serde_json::to_string(&message).unwrap();
    let back: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, message);
}

#[test]
fn chat_message_metadata_is_optional_on_the_wire() {
    let back: ChatMessage = serde_json::from_str(
        r#"{"id":"m-2","author":"user","content":"hi","timestamp":2.0}"#,
    )
    .unwrap();
    assert_eq!(back.author, Author::User);
    assert!(back.metadata.is_none());
}
