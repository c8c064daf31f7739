//! # Triage CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/triageapp/`: Core library with UI-agnostic triage logic
//! - `crates/triage/`: This CLI tool, depends on the `triageapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/triage/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + session wiring (commands.rs)         │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/triageapp/src/api.rs)                    │
//! │  - Owns the loaded task and its unsaved flag                │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command and core module, plus integration tests
//!   against real temp directories.
//! - **CLI**: argument parsing tests in `setup.rs`, and end-to-end runs of the binary in
//!   `tests/cli.rs`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
