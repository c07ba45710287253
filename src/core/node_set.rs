//! Typed node names.

/// A closed set of node names, usually generated with [`node_set!`](crate::node_set).
///
/// Lets setup code and drivers address nodes through an enum instead of
/// raw strings.
pub trait NodeSet: Copy + 'static {
    /// Registered name of this node.
    fn name(&self) -> &'static str;

    /// Every member of the set, in declaration order.
    fn all() -> &'static [Self];
}
