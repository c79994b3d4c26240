//! Resource kinds sharing the item contract.

use std::fmt;
use std::hash::Hash;

/// Static description of one item resource.
///
/// Each kind is a zero-sized marker; the constants drive routing, error
/// messages, storage tables, and whether the store keeps timestamps.
pub trait ResourceKind:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + Sync + 'static
{
    /// Lowercase path segment under which the resource is served.
    const PATH: &'static str;

    /// Uppercase label used in user-facing error messages.
    const LABEL: &'static str;

    /// Relational table holding the resource rows.
    const TABLE: &'static str;

    /// Whether the store stamps creation and modification times.
    const TIMESTAMPED: bool;
}

/// Task resource, served under `/task` with lifecycle timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Task;

impl ResourceKind for Task {
    const PATH: &'static str = "task";
    const LABEL: &'static str = "TASK";
    const TABLE: &'static str = "tasks";
    const TIMESTAMPED: bool = true;
}

/// Todo resource, served under `/todo` without timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Todo;

impl ResourceKind for Todo {
    const PATH: &'static str = "todo";
    const LABEL: &'static str = "TODO";
    const TABLE: &'static str = "todos";
    const TIMESTAMPED: bool = false;
}
