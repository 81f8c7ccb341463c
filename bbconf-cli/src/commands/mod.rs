//! CLI command implementations.
//!
//! - `show`: Display sections with labelled values
//! - `sections`: List section names and key counts
//! - `get`: Print one value
//! - `set`: Edit leaf values and write the file
//! - `format`: Rewrite or check canonical layout
//! - `validate`: Check that a file parses
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod format;
pub mod get;
pub mod sections;
pub mod set;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use format::FormatCommand;
pub use get::GetCommand;
pub use sections::SectionsCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
