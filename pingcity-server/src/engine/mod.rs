//! Aggregation and scoring engines
//!
//! # Structure
//!
//! - [`filter`] - AND-combined criteria over collection snapshots
//! - [`aggregate`] - dashboard/user/communication statistics
//! - [`relevance`] - weighted search scoring and ranking
//! - [`trending`] - upvotes+priority trending order
//! - [`insight`] - threshold rules over the analytics view
//! - [`telemetry`] - system load probe seam
//!
//! Everything here is pure over snapshots handed in by the handlers;
//! no engine touches the store.

pub mod aggregate;
pub mod filter;
pub mod insight;
pub mod relevance;
pub mod telemetry;
pub mod trending;
