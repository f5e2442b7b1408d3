//! One module per subcommand. Each exposes an `execute` function.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod generate;
pub mod list;
pub mod shell;
pub mod show;
