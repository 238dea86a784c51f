//! Command-line collaborators: graph documents and the `galg` commands.

pub mod commands;
pub mod input;

pub use input::{load_graph, GraphDocument, Label};
