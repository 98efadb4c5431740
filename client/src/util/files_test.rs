use super::*;

#[test]
fn byte_count_truncates_and_clamps() {
    assert_eq!(byte_count(2_048.0), 2_048);
    assert_eq!(byte_count(10.9), 10);
    assert_eq!(byte_count(-1.0), 0);
    assert_eq!(byte_count(f64::NAN), 0);
}
