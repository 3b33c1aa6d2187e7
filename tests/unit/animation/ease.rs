use super::*;

#[test]
fn all_eases_fix_endpoints() {
    for ease in [Ease::Linear, Ease::InQuad, Ease::OutQuad, Ease::InOutQuad] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn progress_is_clamped() {
    assert_eq!(Ease::Linear.apply(-0.5), 0.0);
    assert_eq!(Ease::Linear.apply(1.5), 1.0);
}

#[test]
fn in_quad_lags_out_quad_midway() {
    assert!(Ease::InQuad.apply(0.5) < Ease::OutQuad.apply(0.5));
    assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
}
