//! Building a [`crate::types::TaxiPark`] from text.
//!
//! Most callers should use [`load_from_str`] (from [`unified`]) which:
//!
//! - dispatches on the [`LoadFormat`] in [`LoadOptions`]
//! - validates trips and, optionally, roster references
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The crate never opens files itself; callers hand over text or a reader.
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver,
};
pub use unified::{load_from_reader, load_from_str, LoadFormat, LoadOptions};
