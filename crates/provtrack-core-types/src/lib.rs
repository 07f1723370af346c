//! Types shared by the provtrack error and logging facilities
//!
//! - **Correlation type**: RequestId
//! - **Schema constants**: canonical structured-log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
