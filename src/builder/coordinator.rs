//! Builder for constructing coordinators.

use crate::builder::error::{BuildError, NodeDefinitionError};
use crate::config::CoordinatorConfig;
use crate::coordinator::Coordinator;
use crate::core::{Node, NodeId, NodePath, NodeSet};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, info};
use uuid::Uuid;

/// Builder for declaring the nodes a coordinator arbitrates between.
///
/// Node names are validated all at once: every empty or duplicated name is
/// reported in a single [`BuildError::InvalidNodes`].
///
/// # Example
///
/// ```rust
/// use exclusive_state::{CoordinatorBuilder, CoordinatorConfig, NodePath};
///
/// let coordinator = CoordinatorBuilder::new()
///     .node("Idle")
///     .node_path(NodePath::state("", "Locomotion", "Run"))
///     .config(CoordinatorConfig::new().trace_capacity(32))
///     .build()
///     .unwrap();
///
/// assert!(coordinator.node_id("Locomotion.Run").is_some());
/// assert!(coordinator.is_idle());
/// ```
pub struct CoordinatorBuilder {
    names: Vec<String>,
    config: CoordinatorConfig,
}

impl CoordinatorBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            config: CoordinatorConfig::default(),
        }
    }

    /// Declare a node by name.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Declare a node by hierarchical path.
    pub fn node_path(mut self, path: NodePath) -> Self {
        self.names.push(path.into());
        self
    }

    /// Declare several nodes at once.
    pub fn nodes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declare every member of a typed node set.
    pub fn node_set<N: NodeSet>(self) -> Self {
        self.nodes(N::all().iter().map(N::name))
    }

    pub fn config(mut self, config: CoordinatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the coordinator, idle with empty queues.
    pub fn build(self) -> Result<Coordinator, BuildError> {
        if self.names.is_empty() {
            return Err(BuildError::NoNodes);
        }

        if let Validation::Failure(errors) = validate_names(&self.names) {
            return Err(BuildError::InvalidNodes(errors.iter().cloned().collect()));
        }

        let id = Uuid::new_v4();
        let mut nodes: Vec<Node> = self
            .names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Node::new(NodeId::new(id, index as u32), name))
            .collect();

        if self.config.debug_logs {
            nodes.iter_mut().for_each(attach_debug_logs);
        }

        debug!(coordinator = %id, nodes = nodes.len(), "coordinator built");
        Ok(Coordinator::from_parts(id, nodes, &self.config))
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every name, accumulating ALL problems.
fn validate_names(names: &[String]) -> Validation<(), NonEmptyVec<NodeDefinitionError>> {
    let mut seen = HashSet::new();
    let checks: Vec<Validation<(), NonEmptyVec<NodeDefinitionError>>> = names
        .iter()
        .enumerate()
        .map(|(position, name)| {
            if name.trim().is_empty() {
                Validation::fail(NodeDefinitionError::EmptyName { position })
            } else if !seen.insert(name.as_str()) {
                Validation::fail(NodeDefinitionError::DuplicateName { name: name.clone() })
            } else {
                Validation::success(())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn attach_debug_logs(node: &mut Node) {
    let enter_name = node.name().to_string();
    let exit_name = enter_name.clone();
    node.register_on_enter(move || info!(node = enter_name.as_str(), "entering state"))
        .register_on_exit(move || info!(node = exit_name.as_str(), "exiting state"));
}
