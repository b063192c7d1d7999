use super::*;

#[test]
fn test_no_limit_never_stops() {
    let mut tc = TimeControl::new(None);
    tc.start();
    assert!(!tc.check_time());
    assert!(!tc.is_stopped());
    assert!(!tc.past_half_budget());
}

#[test]
fn test_expired_budget_latches() {
    let mut tc = TimeControl::new(Some(Duration::ZERO));
    tc.start();
    assert!(tc.check_time());
    assert!(tc.is_stopped());
    // Stays stopped on later polls.
    assert!(tc.check_time());
}

#[test]
fn test_check_interval_gating() {
    let tc = TimeControl::new(None);
    assert!(tc.should_check_time(0));
    assert!(tc.should_check_time(CHECK_INTERVAL));
    assert!(tc.should_check_time(CHECK_INTERVAL * 3));
    assert!(!tc.should_check_time(1));
    assert!(!tc.should_check_time(CHECK_INTERVAL + 1));
}

#[test]
fn test_limits_constructors() {
    assert_eq!(SearchLimits::depth(6).max_depth(), 6);
    assert_eq!(SearchLimits::depth(6).move_time, None);

    // Depth 0 means "the clock rules" with a hard iteration ceiling.
    let timed = SearchLimits::time(Duration::from_millis(100));
    assert_eq!(timed.max_depth(), 100);

    let both = SearchLimits::depth_and_time(3, Duration::from_millis(50));
    assert_eq!(both.max_depth(), 3);
    assert!(both.move_time.is_some());
}
