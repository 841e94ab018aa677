//! DNS MX resolution.
//!
//! The public entry point is [`query_mx`], which performs a single
//! synchronous lookup using the system resolver and returns the
//! mail-exchanger hosts sorted by ascending preference. A domain without MX
//! records yields an empty list, not an error; callers treat that as "no
//! deliverable host".

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, build_resolver, query_mx, query_mx_with};
pub use types::MxRecord;
