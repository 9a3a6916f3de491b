//! Verify mapper conversions against JSON vectors stored in `test-vectors/`.
//!
//! Each case pairs a wire record with the expected mapped entity. Comparing
//! serialized JSON values (not structs) keeps the expectation readable in
//! the vector file and avoids field-ordering noise.

use kos_core::dto::{BookingDto, KosDto};
use kos_core::mapper::{map_booking, map_kos};

#[test]
fn listing_vectors() {
    let raw = include_str!("../../test-vectors/listing.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let dto: KosDto = serde_json::from_value(case["input"].clone()).unwrap();
        let mapped = serde_json::to_value(map_kos(dto)).unwrap();
        assert_eq!(mapped, case["expected"], "{name}");
    }
}

#[test]
fn booking_vectors() {
    let raw = include_str!("../../test-vectors/booking.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let dto: BookingDto = serde_json::from_value(case["input"].clone()).unwrap();
        let mapped = serde_json::to_value(map_booking(dto)).unwrap();
        assert_eq!(mapped, case["expected"], "{name}");
    }
}
