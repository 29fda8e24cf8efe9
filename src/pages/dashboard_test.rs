use super::*;
use crate::components::sidebar::dataset_from_service;
use crate::state::app::seed_services;

fn sample_dataset() -> SatelliteDataset {
    dataset_from_service(&seed_services()[0], 1_000.0)
}

#[test]
fn new_project_starts_pending_with_default_settings() {
    let project = new_project(sample_dataset(), 42.0);
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.interpolation, default_interpolation());
    assert!(project.video_url.is_none());
}

#[test]
fn new_project_names_itself_after_the_dataset() {
    let dataset = sample_dataset();
    let expected = format!("{} animation", dataset.name);
    let project = new_project(dataset, 42.0);
    assert_eq!(project.name, expected);
}

#[test]
fn new_project_stamps_created_and_updated_equally() {
    let project = new_project(sample_dataset(), 42.0);
    assert_eq!(project.created_at, 42.0);
    assert_eq!(project.updated_at, 42.0);
}

#[test]
fn default_interpolation_is_rife_30fps_high() {
    let settings = default_interpolation();
    assert_eq!(settings.model, InterpolationModel::Rife);
    assert_eq!(settings.frame_rate, 30);
    assert_eq!(settings.quality, Quality::High);
}

#[test]
fn projects_created_back_to_back_get_distinct_ids() {
    let a = new_project(sample_dataset(), 1.0);
    let b = new_project(sample_dataset(), 1.0);
    assert_ne!(a.id, b.id);
}
