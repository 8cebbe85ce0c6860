//! Domain models for outline state management.
//!
//! This module contains the core domain types: the typed document and its
//! elements, validated node identifiers, node state, icon configuration,
//! and the outliner operations themselves.

/// Typed document elements and the id-keyed store.
pub mod document;
pub use document::{Document, Element};

mod icons;
pub use icons::IconSet;

/// Validated element identifier types and parsing.
pub mod node_id;
pub use node_id::{InvalidNodeIdError, NodeId};

/// The outline operations.
pub mod outliner;
pub use outliner::{ApplyOutcome, Outliner, Scope, ToggleError};

/// Node state and icon marker taxonomy.
pub mod state;
pub use state::{Marker, NodeState};
