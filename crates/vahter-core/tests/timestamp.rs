#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::NaiveDate;

use vahter_core::error::ClientCode;
use vahter_core::{Clock, LocalClock, Timestamp};

#[test]
fn formats_zero_padded() {
    let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(Timestamp::from_naive(dt).as_str(), "2024-01-02 03:04:05");
}

#[test]
fn local_clock_matches_format() {
    let ts = LocalClock.now();
    let s = ts.as_str();
    assert_eq!(s.len(), 19);
    assert_eq!(Timestamp::parse(s).unwrap(), ts);
}

#[test]
fn parse_rejects_other_formats() {
    for bad in ["2024-1-2 03:04:05", "2024-01-02T03:04:05", "yesterday", ""] {
        let err = Timestamp::parse(bad).expect_err("must fail");
        assert_eq!(err.client_code(), ClientCode::BadRequest);
    }
}

#[test]
fn string_order_is_chronological() {
    let a = Timestamp::parse("2024-09-30 23:59:59").unwrap();
    let b = Timestamp::parse("2024-10-01 00:00:00").unwrap();
    assert!(a < b);
}
