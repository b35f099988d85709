use super::*;

#[test]
fn starts_at_zero_and_lands_on_target() {
    let c = CounterStream::build(16.0, 125, 30, Ease::OutQuad);
    let s = c.samples();
    assert_eq!(s[0].value, 0.0);
    assert_eq!(s[0].at_ms, 0);
    assert_eq!(s.last().unwrap().value, 16.0);
    assert_eq!(s.last().unwrap().fraction, 1.0);
    // 0, 30, 60, 90, 120, 150
    assert_eq!(c.len(), 6);
}

#[test]
fn values_are_bounded_and_non_decreasing() {
    for ease in Ease::ALL {
        let c = CounterStream::build(37.3, 1575, 30, ease);
        let mut last = 0.0;
        for s in c.samples() {
            assert!(s.value >= last);
            assert!((0.0..=37.3).contains(&s.value));
            last = s.value;
        }
        assert_eq!(last, 37.3);
    }
}

#[test]
fn out_quad_midpoint() {
    let c = CounterStream::build(100.0, 60, 30, Ease::OutQuad);
    assert_eq!(c.samples()[1].fraction, 0.5);
    assert_eq!(c.samples()[1].value, 75.0);
}

#[test]
fn zero_duration_still_reaches_target() {
    let c = CounterStream::build(5.0, 0, 30, Ease::Linear);
    assert_eq!(c.samples().last().unwrap().value, 5.0);
    assert_eq!(c.due(TimeMs(10), 1), Some(TimeMs(40)));
    assert_eq!(c.due(TimeMs(10), 9), None);
}
