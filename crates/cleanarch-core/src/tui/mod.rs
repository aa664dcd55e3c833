//! Interactive front end built on cliclack
//!
//! Only compiled with the `tui` feature.

mod prompts;

pub use prompts::{run, CreateArgs};
