//! Fuzz testing for the fixed text grammars.
//!
//! Feeds arbitrary strings to the date-time, decimal, time-span and GUID
//! parsers, and checks that every accepted date-time survives a Julian Date
//! round trip to the millisecond.

#![no_main]

use libfuzzer_sys::fuzz_target;

use rowcast::parsing::{parse_datetime, parse_datetime_offset, parse_decimal, parse_guid, parse_time_span};
use rowcast::{datetime_to_julian, julian_to_datetime};

fuzz_target!(|text: &str| {
    let _ = parse_decimal(text);
    let _ = parse_guid(text);
    let _ = parse_time_span(text);
    let _ = parse_datetime_offset(text);

    if let Ok(dt) = parse_datetime(text) {
        let jd = datetime_to_julian(dt);
        if let Ok(back) = julian_to_datetime(jd) {
            let diff = (back - dt).whole_milliseconds().abs();
            assert!(diff <= 1, "{} -> {} -> {}", dt, jd, back);
        }
    }
});
