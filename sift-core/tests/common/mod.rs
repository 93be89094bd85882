//! Test infrastructure for the sift tokenizer
//!
//! Provides fixture loading, stochastic line generation, and assertion
//! helpers.

mod loader;
mod harness;
mod generators;

#[allow(unused_imports)]
pub use loader::{load_fixtures_by_name, SplitCase};
#[allow(unused_imports)]
pub use harness::run_split_case;
#[allow(unused_imports)]
pub use generators::Gen;
