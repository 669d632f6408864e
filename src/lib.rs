//! PolyGPT Library
//!
//! Binary-side glue: the headless NDJSON runner. The TUI lives in
//! `polygpt-tui`, state and orchestration in `polygpt-app`.

pub mod headless;

pub use headless::{run_headless, HeadlessEvent, HeadlessOutcome};
pub use polygpt_tui::run;
