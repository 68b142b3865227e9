//! Fetch option resolution
//!
//! Derives [`FetchOptions`] from the fetch-all flag, static configuration,
//! or interactive answers. Prompting goes through the [`OptionSource`]
//! trait so the resolution rules can be exercised without a terminal.

mod prompt;
mod resolver;
mod types;

pub use prompt::{OptionSource, TerminalPrompt};
pub use resolver::{parse_id_list, persistence_tip, resolve_options, resolve_options_blocking};
pub use types::{FetchOptions, FilterChoice};
