//! Terminal input for the linker's questions.

pub mod provider;
pub use provider::ConsoleProvider;
