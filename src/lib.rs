//! Outline expand/collapse state management.
//!
//! Outline nodes are document elements carrying one of two state classes,
//! `expanded` or `collapsed`, each paired with a toggle icon whose id is
//! derived from the node's id. The [`Outliner`] flips nodes between the two
//! states, keeps the icons in sync, and swaps icon images on hover; the
//! [`Document`] is the typed, in-memory stand-in for the page structure the
//! embedder mirrors.

pub mod domain;
pub use domain::{
    ApplyOutcome, Document, Element, IconSet, InvalidNodeIdError, NodeId, NodeState, Outliner,
    Scope, ToggleError,
};
