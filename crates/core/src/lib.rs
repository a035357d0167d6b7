//! Domain types and pure logic for the printshop backend.
//!
//! Nothing in this crate performs I/O. Persistence lives in `printshop-db`,
//! which implements the [`estimation::EstimateSource`] collaborator.

pub mod catalog;
pub mod error;
pub mod estimation;
pub mod pagination;
pub mod pricing;
pub mod types;
