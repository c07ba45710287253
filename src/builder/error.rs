//! Build errors for coordinator setup.

use thiserror::Error;

/// A single rejected node definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeDefinitionError {
    #[error("Node at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("Node name '{name}' is declared more than once")]
    DuplicateName { name: String },
}

/// Errors that can occur when building a coordinator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No nodes declared. Add at least one node with .node(name)")]
    NoNodes,

    #[error("{} invalid node definition(s): {}", .0.len(), describe(.0))]
    InvalidNodes(Vec<NodeDefinitionError>),
}

fn describe(errors: &[NodeDefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
