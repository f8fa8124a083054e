//! Core data types for dependencies, advisories, and audit reports.
//!
//! This module contains the fundamental types used throughout npm-asset-audit:
//!
//! - [`NormalizedDependency`] - An installed npm package with its original name restored
//! - [`Inventory`] - The order-preserving set of normalized dependencies
//! - [`Advisory`] - A single known-vulnerability record from the audit service
//! - [`AuditReport`] - The decoded audit response
//!
//! # Example
//!
//! ```
//! use npm_asset_audit::model::Inventory;
//!
//! let mut inventory = Inventory::new();
//! inventory.insert("@lodash/fp", "1.2.3");
//!
//! println!("Collected {} dependencies", inventory.len());
//! ```

mod advisory;
mod dependency;

pub use advisory::*;
pub use dependency::*;
