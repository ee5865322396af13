//! In-memory SKU findability registry.
//!
//! Records are keyed by SKU, seeded with a fixed example set at
//! construction, and never persisted. Lookups signal absence with `None`;
//! writes signal conflicts with `false`.
//!
//! # Main types
//!
//! - [`SkuRegistry`] — Single-owner registry; writes take `&mut self`.
//! - [`SharedSkuRegistry`] — Cloneable handle guarding a registry with one mutex.

/// Single-owner registry.
pub mod registry;
/// Text and JSON rendering of records.
pub mod report;
/// Built-in example records.
pub mod seed;
/// Mutex-guarded registry handle.
pub mod shared;

pub use registry::SkuRegistry;
pub use report::{find_findability_status, render_json, render_report, render_summary};
pub use shared::SharedSkuRegistry;
