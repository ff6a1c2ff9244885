//! Report renderers for risk analysis results.
//!
//! - [`terminal`] — colored, tabular output with a per-category summary;
//!   respects `--verbose` / `--quiet`.
//! - [`messages`] — English templates for the analyzers' structured
//!   explanation records; the JSON report keeps the raw records instead.

pub mod messages;
pub mod terminal;
