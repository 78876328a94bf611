use super::*;

#[test]
fn formats_epoch_millis_in_utc() {
    assert_eq!(format_timestamp_ms(0), "1970-01-01 00:00:00 UTC");
    assert_eq!(format_timestamp_ms(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
}

#[test]
fn drops_sub_second_precision() {
    assert_eq!(format_timestamp_ms(1_700_000_000_999), "2023-11-14 22:13:20 UTC");
}

#[test]
fn falls_back_to_raw_value_when_out_of_range() {
    assert_eq!(format_timestamp_ms(i64::MAX), i64::MAX.to_string());
}
