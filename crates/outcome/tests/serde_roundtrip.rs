use pretty_assertions::assert_eq;
use serde_json::json;
use ui_outcome::{
    DisplayContent, OptionalOutcome, Outcome, OutcomeCause, OutcomeDetail, OutcomeErrorCode,
    OutcomeState,
};

#[test]
fn valid_outcome_serializes_flat() {
    let outcome: Outcome<Vec<u32>> = Outcome::valid(vec![1, 2]);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value, json!({ "result": [1, 2], "state": "VALID" }));
    let restored: Outcome<Vec<u32>> = serde_json::from_value(value).unwrap();
    assert_eq!(restored, outcome);
    assert_eq!(restored.result(), Ok(&vec![1, 2]));
}

#[test]
fn error_outcome_roundtrips() {
    let detail = OutcomeDetail::new(
        DisplayContent::keyed("order.missing", "Order {id} not found").with_arg("id", 17),
    )
    .with_cause(OutcomeCause::new("no row").with_source(OutcomeCause::new("table empty")));
    let outcome: Outcome<Option<String>> =
        Outcome::error(None, detail).with_error_code(OutcomeErrorCode::NotFound);

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: Outcome<Option<String>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcome);
    let cause = restored.result_detail().and_then(OutcomeDetail::cause).unwrap();
    assert_eq!(cause.chain().collect::<Vec<_>>(), vec!["no row", "table empty"]);
}

#[test]
fn inspection_state_is_not_serialized() {
    let outcome: Outcome<u8> = Outcome::error(0, OutcomeDetail::new("Failed"));
    let _ = outcome.result_detail();

    let restored: Outcome<u8> =
        serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();
    assert!(!restored.is_inspected());
    assert!(restored.result().is_err());
}

#[test]
fn wire_names_are_upper_snake_case() {
    let outcome: Outcome<()> = Outcome::warning((), OutcomeDetail::new("Slow"))
        .with_error_code(OutcomeErrorCode::ServiceUnavailable);
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["state"], "WARNING");
    assert_eq!(value["error_code"], "SERVICE_UNAVAILABLE");
    assert_eq!(value["detail"]["content"]["text"], "Slow");
}

#[test]
fn non_valid_state_without_detail_is_rejected() {
    let err = serde_json::from_value::<Outcome<u8>>(json!({ "result": 0, "state": "ERROR" }))
        .unwrap_err();
    assert!(err.to_string().contains("requires a result detail"), "{err}");
}

#[test]
fn unknown_state_is_rejected() {
    let parsed = serde_json::from_value::<Outcome<u8>>(json!({ "result": 0, "state": "FATAL" }));
    assert!(parsed.is_err());
}

#[test]
fn optional_outcome_without_result_roundtrips() {
    let outcome: OptionalOutcome<String> =
        OptionalOutcome::info(None, OutcomeDetail::new("Nothing matched"));

    let value = serde_json::to_value(&outcome).unwrap();
    let restored: OptionalOutcome<String> = serde_json::from_value(value).unwrap();

    assert_eq!(restored, outcome);
    assert_eq!(restored.state(), OutcomeState::Info);
}

#[test]
fn optional_outcome_with_payload_roundtrips() {
    let outcome: OptionalOutcome<String> = OptionalOutcome::found("acme".to_owned());

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: OptionalOutcome<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcome);
    assert_eq!(restored.result().map(String::as_str), Some("acme"));
}

#[test]
fn optional_error_outcome_roundtrips() {
    let outcome: OptionalOutcome<u32> = OptionalOutcome::error(
        OutcomeDetail::new("Lookup failed").with_cause(OutcomeCause::new("connection refused")),
    )
    .with_error_code(OutcomeErrorCode::ServiceUnavailable);

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: OptionalOutcome<u32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcome);
    assert_eq!(restored.state(), OutcomeState::Error);
    assert_eq!(restored.error_code(), Some(&OutcomeErrorCode::ServiceUnavailable));
    let cause = restored.result_detail().and_then(OutcomeDetail::cause).unwrap();
    assert_eq!(cause.message(), "connection refused");
}

#[test]
fn missing_error_code_reads_as_none() {
    let outcome: Outcome<u8> = serde_json::from_value(json!({
        "result": 3,
        "state": "INFO",
        "detail": { "content": { "text": "Rounded" } }
    }))
    .unwrap();
    assert_eq!(outcome.error_code(), None);
    assert_eq!(outcome.result(), Ok(&3));
}

#[test]
fn optional_outcome_accepts_missing_result_field() {
    let outcome: OptionalOutcome<u32> =
        serde_json::from_value(json!({ "state": "VALID" })).unwrap();
    assert_eq!(outcome.result(), None);
    assert!(outcome.is_valid());
}

#[test]
fn domain_error_code_roundtrips() {
    #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    enum Payment {
        Declined,
    }

    let outcome: Outcome<u8, Payment> =
        Outcome::error(0, OutcomeDetail::new("Card declined")).with_error_code(Payment::Declined);
    let json = serde_json::to_string(&outcome).unwrap();
    let restored: Outcome<u8, Payment> = serde_json::from_str(&json).unwrap();

    assert!(restored.contains_error_code(&[Payment::Declined]));
}
