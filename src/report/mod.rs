//! Batch comparison and report aggregation.
//!
//! - [`batch`]: Parallel comparison of many structures read from two directories
//! - [`summary`]: Grouping of results by category and the flags overview table
//!
//! ## Report Shape
//!
//! ```text
//! {
//!   "generated_at": "...",
//!   "total": 3,
//!   "clean": 2,
//!   "byCategories": [{"category": "Topologies differ", "count": 1, "codes": ["1abc"]}],
//!   "detailsByCodes": {"1abc": { ...comparison result... }}
//! }
//! ```

pub mod batch;
pub mod summary;

pub use batch::{compare_code, discover_codes, read_code_list, run_batch};
pub use summary::{BatchReport, CategoryGroup};
