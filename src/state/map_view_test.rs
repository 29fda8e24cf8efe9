use super::*;

#[test]
fn default_view_centers_on_india() {
    let view = MapViewState::default();
    assert_eq!(view.center, (78.9629, 20.5937));
    assert_eq!(view.zoom, 5.0);
    assert_eq!(view.rotation, 0.0);
}

#[test]
fn approx_eq_matches_identical_views() {
    let view = MapViewState::default();
    assert!(view.approx_eq(&view));
}

#[test]
fn approx_eq_absorbs_sub_epsilon_drift() {
    let a = MapViewState::default();
    let b = MapViewState {
        center: (a.center.0 + 1e-7, a.center.1 - 1e-7),
        zoom: a.zoom + 1e-7,
        rotation: a.rotation,
    };
    assert!(a.approx_eq(&b));
}

#[test]
fn approx_eq_detects_real_moves() {
    let a = MapViewState::default();
    let pan = MapViewState {
        center: (a.center.0 + 0.5, a.center.1),
        ..a
    };
    let zoom = MapViewState { zoom: 6.0, ..a };
    let spin = MapViewState { rotation: 0.3, ..a };
    assert!(!a.approx_eq(&pan));
    assert!(!a.approx_eq(&zoom));
    assert!(!a.approx_eq(&spin));
}
