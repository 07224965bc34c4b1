//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and
//! invariant checks.
//!
//! - **`format`**: renders a built tree as stable, readable text for `insta`
//! - **`invariants`**: structural checks (parent links, reachability, no
//!   leftover placeholders)

pub mod format;
pub mod invariants;

pub use format::format_tree;
pub use invariants::check as invariants;
