//! Integration tests for step navigation against a real data directory.
//!
//! These run the full stack below the HTTP layer: datasets loaded from
//! disk, a session, the mesh library, and view derivation.

use std::sync::Arc;

use stepview::config::Config;
use stepview::dataset::Datasets;
use stepview::geometry::MeshLibrary;
use stepview::session::{NavDirection, SessionState, UiEvent};
use stepview::view;

mod fixtures;

fn session_and_config() -> (SessionState, MeshLibrary, Config, tempfile::TempDir) {
    let (config, temp_dir) = fixtures::test_config();
    let datasets = Datasets::load(&config.data_dir()).expect("Failed to load datasets");
    let session = SessionState::new(Arc::new(datasets)).expect("Failed to create session");
    let library = MeshLibrary::new(config.models_dir());
    (session, library, config, temp_dir)
}

#[test]
fn test_forward_walk_retargets_controls() {
    let (mut session, library, config, _temp_dir) = session_and_config();

    // Initial: at step1, back control disabled.
    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.current_step_id, "step1");
    assert_eq!(view.nav.back, None);
    assert_eq!(view.nav.forward, Some("step2".to_string()));

    // Forward from step1 lands on step2; forward control now targets step3.
    session
        .apply(&UiEvent::Navigate {
            direction: NavDirection::Forward,
        })
        .unwrap();
    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.current_step_id, "step2");
    assert_eq!(view.nav.back, Some("step1".to_string()));
    assert_eq!(view.nav.forward, Some("step3".to_string()));
}

#[test]
fn test_forward_clamps_at_last_step() {
    let (mut session, library, config, _temp_dir) = session_and_config();

    for _ in 0..5 {
        session
            .apply(&UiEvent::Navigate {
                direction: NavDirection::Forward,
            })
            .unwrap();
    }

    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.current_step_id, "step3");
    assert_eq!(view.nav.forward, None);
}

#[test]
fn test_select_updates_scene_and_highlight() {
    let (mut session, library, config, _temp_dir) = session_and_config();

    session
        .apply(&UiEvent::SelectStep {
            step_id: "step2".to_string(),
        })
        .unwrap();
    let view = view::render(&config, &session, &library).unwrap();

    // Scene carries one mesh per object name, in step order, each annotated
    // with its display name.
    let names: Vec<&str> = view
        .scene
        .meshes
        .iter()
        .map(|mesh| mesh.name.as_str())
        .collect();
    assert_eq!(names, vec!["body", "leg_fl", "leg_fr"]);

    let highlighted: Vec<&str> = view
        .step_selectors
        .iter()
        .filter(|selector| selector.highlighted)
        .map(|selector| selector.step_id.as_str())
        .collect();
    assert_eq!(highlighted, vec!["step2"]);
}

#[test]
fn test_unknown_step_is_rejected_without_mutation() {
    let (mut session, library, config, _temp_dir) = session_and_config();

    let err = session
        .apply(&UiEvent::SelectStep {
            step_id: "step404".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown step id 'step404'");

    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.current_step_id, "step1");
}

#[test]
fn test_notification_content_follows_step() {
    let (mut session, library, config, _temp_dir) = session_and_config();

    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.notification.banner_class, "no-notification");

    session
        .apply(&UiEvent::SelectStep {
            step_id: "step2".to_string(),
        })
        .unwrap();
    let view = view::render(&config, &session, &library).unwrap();
    assert_eq!(view.notification.banner_class, "has-notification");
    assert_eq!(view.notification.text, "Ensure good ventilation");
    assert_eq!(view.tools.image, "assets/img/glue.png");
}

#[test]
fn test_view_is_stable_without_events() {
    let (session, library, config, _temp_dir) = session_and_config();

    let first = view::render(&config, &session, &library).unwrap();
    let second = view::render(&config, &session, &library).unwrap();

    // Derivation is pure: same state, same view.
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
