//! # CLI Behavior
//!
//! This is **one possible UI client** for triage, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## One Command, One Session
//!
//! Every invocation opens the task file named by `--task` (or `TRIAGE_TASK`), applies a
//! single command through the API, and writes the task back if the command changed it.
//! Files that vanished since the last save are reported as warnings before the command's
//! own output, and the reconciled task is saved.
//!
//! ### Naked Execution (`triage`)
//!
//! Running `triage` with no command shows the task status.
//!
//! ### Output
//!
//! - Traversal commands (`next`, `back`, `move`, `trash`, `shuffle`) end with a one-line
//!   position: the current file and how many are left.
//! - `status`, `show` and `category list` accept `--json` for scripting.
//! - Logs go to stderr; `-v` raises them to debug, `RUST_LOG` overrides both.
//!
//! ### Commands Without a Task
//!
//! `favorites` and `config` work without `--task`.

pub mod commands;
mod render;
mod setup;

pub use commands::run;
