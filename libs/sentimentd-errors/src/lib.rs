//! Error data model shared by the sentimentd crates.
//!
//! Provides RFC 9457 Problem Details (`Problem`) with an optional axum
//! `IntoResponse` integration behind the `axum` feature.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod problem;

pub use problem::{APPLICATION_PROBLEM_JSON, Problem};

/// Attach the request path and trace id to a Problem before it is returned.
pub fn finalize(mut p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
