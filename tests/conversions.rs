use max77801_rs::registers::{
    code_to_level, code_to_mv, level_to_code, mv_to_code, VOUT_MAX_MV, VOUT_MAX_V, VOUT_MIN_MV, VOUT_MIN_V,
};

#[test]
fn level_edges_encode() {
    assert_eq!(level_to_code(VOUT_MIN_V), Some(0));
    assert_eq!(level_to_code(VOUT_MAX_V), Some(127));
    assert_eq!(level_to_code(2.6125), Some(1));
}

#[test]
fn level_outside_range_rejected() {
    assert_eq!(level_to_code(2.5999), None);
    assert_eq!(level_to_code(4.1876), None);
    assert_eq!(level_to_code(0.0), None);
    assert_eq!(level_to_code(f64::NAN), None);
}

#[test]
fn level_truncates_not_rounds() {
    // 0.992 steps above the floor still encodes as 0.
    assert_eq!(level_to_code(2.6124), Some(0));
    // 3.3 V -> 56 steps exactly; 3.31 V -> 56.8 steps -> 56.
    assert_eq!(level_to_code(3.3), Some(56));
    assert_eq!(level_to_code(3.31), Some(56));
}

#[test]
fn mv_matches_level_encoding() {
    assert_eq!(mv_to_code(VOUT_MIN_MV), Some(0));
    assert_eq!(mv_to_code(2_612), Some(0));
    assert_eq!(mv_to_code(2_613), Some(1));
    assert_eq!(mv_to_code(3_300), Some(56));
    assert_eq!(mv_to_code(VOUT_MAX_MV), Some(127));
    assert_eq!(mv_to_code(VOUT_MIN_MV - 1), None);
    assert_eq!(mv_to_code(VOUT_MAX_MV + 1), None);
}

#[test]
fn code_decodes_to_step_floor() {
    assert_eq!(code_to_mv(0), VOUT_MIN_MV);
    assert_eq!(code_to_mv(1), 2_612);
    assert_eq!(code_to_mv(127), VOUT_MAX_MV);
    assert!((code_to_level(127) - VOUT_MAX_V).abs() < 1e-4);
    assert!((code_to_level(56) - 3.3).abs() < 1e-4);
}

#[test]
fn every_decimal_step_lands_on_its_code() {
    for k in 0..=127u8 {
        let text = format!("{:.4}", 2.6 + k as f64 * 0.0125);
        let level: f64 = text.parse().unwrap();
        assert_eq!(level_to_code(level), Some(k), "level {}", text);
    }
}

#[test]
fn level_just_above_ceiling_rejected() {
    assert_eq!(level_to_code(VOUT_MAX_V + 1e-6), None);
    assert_eq!(level_to_code(VOUT_MIN_V - 1e-6), None);
}

#[test]
fn level_just_below_step_keeps_lower_code() {
    // 12.999 steps above the floor.
    assert_eq!(level_to_code(2.7624875), Some(12));
    assert_eq!(level_to_code(4.0124), Some(112));
}
