//! Integration tests for process metadata and request bodies

use crs_relate_core::models::{ProcessInputs, ProcessMetadata, WktInput, DEFAULT_CRS};
use proptest::prelude::*;

#[test]
fn test_example_request_uses_a_valid_crs() {
    let metadata = ProcessMetadata::crs_extent();
    let crs = metadata
        .example
        .inputs
        .iter()
        .find(|input| input.id == "crs")
        .map(|input| input.value.as_str());

    assert_eq!(crs, Some(DEFAULT_CRS));
}

#[test]
fn test_example_request_parses_as_inputs() {
    let metadata = ProcessMetadata::crs_extent();
    let body = serde_json::to_value(&metadata.example).unwrap();

    let inputs = ProcessInputs::from_json(body).unwrap();

    assert_eq!(inputs.crs.as_deref(), Some("EPSG:4326"));
    assert_eq!(inputs.wkt.map(|w| w.len()), Some(1));
}

#[test]
fn test_metadata_roundtrips_through_json() {
    let metadata = ProcessMetadata::crs_extent();
    let json = serde_json::to_string(&metadata).unwrap();
    let back: ProcessMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, metadata);
}

#[test]
fn test_wkt_input_is_unbounded_and_crs_is_single() {
    let metadata = ProcessMetadata::crs_extent();
    assert_eq!(metadata.input("wkt").unwrap().max_occurs, None);
    assert_eq!(metadata.input("crs").unwrap().max_occurs, Some(1));
}

proptest! {
    #[test]
    fn prop_many_input_keeps_order(wkts in prop::collection::vec("[A-Z ()0-9]{1,20}", 0..12)) {
        let input = WktInput::Many(wkts.clone());
        prop_assert_eq!(input.len(), wkts.len());
        prop_assert_eq!(input.into_vec(), wkts);
    }

    #[test]
    fn prop_one_input_is_singleton(wkt in "[A-Z ()0-9]{1,20}") {
        let input = WktInput::from(wkt.clone());
        prop_assert_eq!(input.into_vec(), vec![wkt]);
    }
}
