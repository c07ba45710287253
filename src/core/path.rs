//! Hierarchical node naming.
//!
//! Transition engines usually organise states into layers and nested
//! sub-machines. A `NodePath` joins those components into a single dotted
//! name, skipping empty components, so a state on an unnamed root layer is
//! addressed as `"Locomotion.Idle"` rather than `".Locomotion.Idle"`.

use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: &str = ".";
const SUB_MACHINE_SUFFIX: &str = " (sub-state)";

/// Dotted path naming a node inside a layered transition engine.
///
/// # Example
///
/// ```rust
/// use exclusive_state::core::NodePath;
///
/// let path = NodePath::state("", "Locomotion", "Idle");
/// assert_eq!(path.as_str(), "Locomotion.Idle");
///
/// let machine = NodePath::sub_machine("Base", "Combat");
/// assert_eq!(machine.as_str(), "Base.Combat (sub-state)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodePath(String);

impl NodePath {
    /// Join arbitrary components, dropping empty ones.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = components
            .into_iter()
            .filter(|c| !c.as_ref().is_empty())
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        Self(joined)
    }

    /// Path of a state inside a (sub-)machine on a layer.
    pub fn state(layer: &str, machine: &str, state: &str) -> Self {
        Self::new([layer, machine, state])
    }

    /// Path of a node attached to a sub-machine itself rather than a state.
    pub fn sub_machine(layer: &str, machine: &str) -> Self {
        let machine = format!("{machine}{SUB_MACHINE_SUFFIX}");
        Self::new([layer, machine.as_str()])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NodePath> for String {
    fn from(path: NodePath) -> Self {
        path.0
    }
}
