use super::*;

// =============================================================
// creation
// =============================================================

#[test]
fn pushed_toast_is_present_immediately_in_entering_phase() {
    let mut state = ToastState::default();
    let id = state.push("Product added to cart!", Severity::Success);

    assert!(state.contains(id));
    let toast = &state.toasts()[0];
    assert_eq!(toast.phase, ToastPhase::Entering);
    assert_eq!(toast.severity, Severity::Success);
}

#[test]
fn default_severity_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn ids_are_unique_across_pushes() {
    let mut state = ToastState::default();
    let a = state.push("a", Severity::Info);
    let b = state.push("b", Severity::Info);
    state.remove(a);
    let c = state.push("c", Severity::Info);

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn rapid_pushes_all_coexist() {
    let mut state = ToastState::default();
    for i in 0..10 {
        state.push(format!("toast {i}"), Severity::Info);
    }
    assert_eq!(state.toasts().len(), 10);
}

// =============================================================
// phase walk
// =============================================================

#[test]
fn full_lifecycle_walks_entering_visible_leaving_removed() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);

    assert!(state.advance(id, ToastPhase::Entering));
    assert_eq!(state.toasts()[0].phase, ToastPhase::Visible);
    assert!(state.advance(id, ToastPhase::Visible));
    assert_eq!(state.toasts()[0].phase, ToastPhase::Leaving);
    state.remove(id);
    assert!(!state.contains(id));
}

#[test]
fn advance_refuses_a_stale_phase() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    assert!(state.advance(id, ToastPhase::Entering));

    // The toast is Visible now; an Entering-based advance must not fire.
    assert!(!state.advance(id, ToastPhase::Entering));
    assert_eq!(state.toasts()[0].phase, ToastPhase::Visible);
}

#[test]
fn advance_on_a_removed_toast_is_refused() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    state.remove(id);
    assert!(!state.advance(id, ToastPhase::Entering));
}

#[test]
fn advance_never_leaves_the_leaving_phase() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    state.dismiss(id);
    assert!(!state.advance(id, ToastPhase::Leaving));
}

// =============================================================
// early dismissal
// =============================================================

#[test]
fn dismiss_jumps_straight_to_leaving() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);

    assert!(state.dismiss(id));
    assert_eq!(state.toasts()[0].phase, ToastPhase::Leaving);
}

#[test]
fn dismiss_stops_the_original_timer_chain() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    state.dismiss(id);

    // The chain's pending Entering->Visible step must become a no-op.
    assert!(!state.advance(id, ToastPhase::Entering));
    assert_eq!(state.toasts()[0].phase, ToastPhase::Leaving);
}

#[test]
fn dismiss_is_refused_when_already_leaving_or_gone() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    state.remove(id);
    assert!(!state.dismiss(id));
}

#[test]
fn remove_is_idempotent() {
    let mut state = ToastState::default();
    let id = state.push("hello", Severity::Info);
    state.remove(id);
    state.remove(id);
    assert!(!state.contains(id));
}

#[test]
fn dismissing_one_toast_leaves_the_others_alone() {
    let mut state = ToastState::default();
    let a = state.push("a", Severity::Info);
    let b = state.push("b", Severity::Error);
    state.dismiss(a);

    assert_eq!(state.toasts().iter().find(|t| t.id == b).unwrap().phase, ToastPhase::Entering);
}

// =============================================================
// css projection
// =============================================================

#[test]
fn severity_classes_are_distinct() {
    let classes = [
        Severity::Info.css_class(),
        Severity::Success.css_class(),
        Severity::Error.css_class(),
        Severity::Warning.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn phase_classes_are_distinct() {
    assert_ne!(ToastPhase::Entering.css_class(), ToastPhase::Visible.css_class());
    assert_ne!(ToastPhase::Visible.css_class(), ToastPhase::Leaving.css_class());
}
