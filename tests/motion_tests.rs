use approx::assert_relative_eq;
use scatter_rs::core::{MotionState, Tween};

#[test]
fn settled_tween_is_inactive_and_reports_its_value() {
    let tween = Tween::settled(42.0);
    assert!(!tween.is_active());
    assert_eq!(tween.value(), 42.0);
    assert_eq!(tween.target(), 42.0);
}

#[test]
fn tween_interpolates_linearly() {
    let mut tween = Tween::settled(0.0);
    tween.retarget(10.0, 1.0);

    assert!(tween.is_active());
    assert_eq!(tween.value(), 0.0);

    tween.step(0.25);
    assert_relative_eq!(tween.value(), 2.5);

    tween.step(0.75);
    assert!(!tween.is_active());
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn overshooting_step_clamps_to_target() {
    let mut tween = Tween::settled(0.0);
    tween.retarget(10.0, 1.0);
    tween.step(5.0);

    assert!(!tween.is_active());
    assert_eq!(tween.value(), 10.0);
}

#[test]
fn retarget_mid_flight_starts_from_interpolated_value() {
    let mut tween = Tween::settled(0.0);
    tween.retarget(10.0, 1.0);
    tween.step(0.5);
    assert_relative_eq!(tween.value(), 5.0);

    tween.retarget(0.0, 1.0);
    assert_relative_eq!(tween.value(), 5.0);

    tween.step(0.5);
    assert_relative_eq!(tween.value(), 2.5);
}

#[test]
fn zero_duration_retarget_completes_immediately() {
    let mut tween = Tween::settled(1.0);
    tween.retarget(9.0, 0.0);
    assert!(!tween.is_active());
    assert_eq!(tween.value(), 9.0);
}

#[test]
fn motion_state_tracks_circles_and_domains_together() {
    let mut motion = MotionState::settled(&[0.0, 100.0], &[10.0, 20.0], (0.0, 1.0), (5.0, 6.0));
    assert!(!motion.is_animating());
    assert_eq!(motion.circle_count(), 2);
    assert_eq!(motion.displayed_circle(0), Some((0.0, 10.0)));

    motion.retarget_x(&[50.0, 150.0], (2.0, 3.0), 1.0);
    assert!(motion.is_animating());

    let still_going = motion.step(0.5);
    assert!(still_going);
    assert_eq!(motion.displayed_circle(0), Some((25.0, 10.0)));
    assert_eq!(motion.displayed_x_domain(), (1.0, 2.0));
    // Y side untouched by an X retarget.
    assert_eq!(motion.displayed_y_domain(), (5.0, 6.0));

    let still_going = motion.step(0.5);
    assert!(!still_going);
    assert_eq!(motion.displayed_circle(1), Some((150.0, 20.0)));
    assert_eq!(motion.displayed_x_domain(), (2.0, 3.0));
}

#[test]
fn target_accessors_report_destinations_during_flight() {
    let mut motion = MotionState::settled(&[0.0], &[0.0], (0.0, 1.0), (0.0, 1.0));
    motion.retarget_x(&[80.0], (0.0, 2.0), 1.0);
    motion.step(0.25);

    assert_eq!(motion.target_circle(0), Some((80.0, 0.0)));
    assert_eq!(motion.displayed_circle(0), Some((20.0, 0.0)));
}

#[test]
fn out_of_range_indices_return_none() {
    let motion = MotionState::settled(&[0.0], &[0.0], (0.0, 1.0), (0.0, 1.0));
    assert_eq!(motion.displayed_circle(5), None);
    assert_eq!(motion.target_circle(5), None);
}
