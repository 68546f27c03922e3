use podscript_core::{update, AppState, Effect, Msg, ServiceHealth, SubmissionState};
use pretty_assertions::assert_eq;

#[test]
fn health_check_request_emits_one_effect() {
    let (mut state, effects) = update(AppState::new(), Msg::HealthCheckRequested);

    assert_eq!(effects, vec![Effect::CheckHealth]);
    assert_eq!(state.health(), ServiceHealth::Checking);
    assert!(state.consume_dirty());
}

#[test]
fn second_request_while_checking_is_ignored() {
    let (state, _) = update(AppState::new(), Msg::HealthCheckRequested);
    let (state, effects) = update(state, Msg::HealthCheckRequested);

    assert!(effects.is_empty());
    assert_eq!(state.health(), ServiceHealth::Checking);
}

#[test]
fn health_result_updates_view_without_touching_submission() {
    let (state, _) = update(AppState::new(), Msg::HealthCheckRequested);
    let (state, _) = update(state, Msg::HealthChecked { up: true });
    assert_eq!(state.view().health, ServiceHealth::Up);

    let (state, effects) = update(state, Msg::HealthChecked { up: false });
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.health, ServiceHealth::Down);
    assert_eq!(view.submission, SubmissionState::Idle);
    assert!(view.submit_enabled);
    assert_eq!(view.status, "");
}
