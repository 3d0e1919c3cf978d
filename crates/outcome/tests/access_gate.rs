//! The payload of a failed outcome stays locked until the failure is looked at.

mod common;

use std::error::Error;

use pretty_assertions::assert_eq;
use ui_outcome::prelude::*;
use ui_outcome::TracingLogger;

#[derive(Debug, thiserror::Error)]
#[error("connection reset by peer")]
struct Reset;

#[derive(Debug, thiserror::Error)]
#[error("inventory service failed")]
struct InventoryDown(#[source] Reset);

fn load_stock(sku: &str) -> Outcome<u32> {
    if sku.is_empty() {
        return Outcome::error(0, OutcomeDetail::new("Unknown product"))
            .with_error_code(OutcomeErrorCode::BadRequest);
    }
    if sku == "down" {
        return Outcome::error(
            0,
            OutcomeDetail::caused_by("Stock is unavailable", &InventoryDown(Reset)),
        )
        .with_error_code(OutcomeErrorCode::from_http_status(503));
    }
    Outcome::valid(12)
}

#[test]
fn valid_outcome_reads_freely() {
    let outcome = load_stock("sku-1");
    assert_eq!(outcome.result(), Ok(&12));
    assert_eq!(outcome.result_detail(), None);
    assert_eq!(outcome.error_code(), None);
}

#[test]
fn failed_outcome_refuses_blind_read() {
    let outcome = load_stock("");
    let err = outcome.result().unwrap_err();

    assert_eq!(err.code(), "OUTCOME_UNINSPECTED_RESULT");
    assert!(!outcome.is_inspected());
}

#[test]
fn either_inspection_unlocks_payload() {
    let by_detail = load_stock("");
    assert_eq!(by_detail.result_detail().unwrap().to_string(), "Unknown product");
    assert_eq!(by_detail.result(), Ok(&0));

    let by_code = load_stock("");
    assert_eq!(by_code.error_code(), Some(&OutcomeErrorCode::BadRequest));
    assert_eq!(by_code.result(), Ok(&0));
}

#[test]
fn contains_error_code_alone_does_not_unlock() {
    let outcome = load_stock("down");
    assert!(outcome.contains_error_code(&[OutcomeErrorCode::ServiceUnavailable]));
    assert!(outcome.result().is_err());
}

#[test]
fn refusal_carries_original_error_chain() {
    let outcome = load_stock("down");
    let err = outcome.result().unwrap_err();

    let mut chain = Vec::new();
    let mut source = err.source();
    while let Some(inner) = source {
        chain.push(inner.to_string());
        source = inner.source();
    }
    assert_eq!(chain, vec!["inventory service failed", "connection reset by peer"]);
}

#[test]
fn logging_the_detail_unlocks_payload() {
    let outcome = load_stock("down");
    let ((), logs) = common::capture_logs(|| outcome.log_detail("stock: ", &TracingLogger));

    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("stock: Stock is unavailable"), "{logs}");
    assert!(logs.contains("inventory service failed"), "{logs}");
    assert_eq!(outcome.result(), Ok(&0));
}

#[test]
fn blind_read_emits_warning() {
    let outcome = load_stock("");
    let (result, logs) = common::capture_logs(|| outcome.result().is_err());

    assert!(result);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("result accessed before the failure was inspected"), "{logs}");
}

#[test]
fn warnings_and_notices_are_not_gated() {
    let warned: Outcome<&str> = Outcome::warning("cached", OutcomeDetail::new("Data may be stale"));
    let noted: Outcome<&str> = Outcome::info("fresh", OutcomeDetail::new("Synced just now"));

    assert_eq!(warned.result(), Ok(&"cached"));
    assert_eq!(noted.result(), Ok(&"fresh"));
    assert!(!warned.is_inspected());
}

#[test]
fn checked_view_needs_no_inspection() {
    match load_stock("").into_checked() {
        Checked::Failed {
            placeholder,
            detail,
            error_code,
        } => {
            assert_eq!(placeholder, 0);
            assert_eq!(detail.to_string(), "Unknown product");
            assert_eq!(error_code, Some(OutcomeErrorCode::BadRequest));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn checked_failure_propagates_with_question_mark() {
    fn total_stock(skus: &[&str]) -> Result<u32, Box<dyn Error>> {
        let mut total = 0;
        for sku in skus {
            total += load_stock(sku).into_checked().into_result()?;
        }
        Ok(total)
    }

    assert_eq!(total_stock(&["a", "b"]).unwrap(), 24);
    let err = total_stock(&["a", "down"]).unwrap_err();
    assert_eq!(err.to_string(), "Stock is unavailable (ServiceUnavailable)");
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("inventory service failed")
    );
}
