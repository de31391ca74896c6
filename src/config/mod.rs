//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! command-line flags
//!     → settings.rs (clap parse & defaults)
//!     → validate() (semantic checks: required target, well-formed URLs)
//!     → Settings (validated, immutable)
//!     → shared by value with the agent and registry
//! ```
//!
//! # Design Decisions
//! - Settings come from flags only; no config file, no reload
//! - Settings are immutable once parsed
//! - Any configuration failure is fatal: the process exits with status 1

pub mod settings;

pub use settings::Settings;
