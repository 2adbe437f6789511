//! resemble-test - Regression test framework for resemble
//!
//! Tracks a numbered sequence of checks per test, reports every failure
//! at the end, and can dump intermediate rasters for inspection. Two
//! modes are supported:
//!
//! - **Compare**: Check values and rasters, report failures (default)
//! - **Display**: Same checks, and also write rasters to `tests/regout/`
//!
//! # Usage
//!
//! ```ignore
//! use resemble_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("analyze");
//! rp.compare_values(0.0, result.mismatch_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // resemble-test is at crates/resemble-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
