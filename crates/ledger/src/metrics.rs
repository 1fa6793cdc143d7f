//! Operation counters for the ledger.
//!
//! Counters go through the `metrics` facade and are inert until the host process
//! installs a recorder:
//! - `ledger_operations_total{operation}`: successful calls
//! - `ledger_rejections_total{operation, reason}`: rejected calls

use metrics::{counter, describe_counter};

/// Register metric descriptions with the current recorder.
pub(crate) fn register_descriptions() {
    describe_counter!(
        "ledger_operations_total",
        "Total successful ledger calls by operation"
    );
    describe_counter!(
        "ledger_rejections_total",
        "Total rejected ledger calls by operation and reason"
    );
}

pub(crate) fn record_operation(operation: &'static str) {
    counter!("ledger_operations_total", "operation" => operation).increment(1);
}

pub(crate) fn record_rejection(operation: &'static str, reason: &'static str) {
    counter!(
        "ledger_rejections_total",
        "operation" => operation,
        "reason" => reason
    )
    .increment(1);
}
