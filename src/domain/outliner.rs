//! The outline operations.
//!
//! An [`Outliner`] mutates presentation attributes on a [`Document`]: the
//! state class of outline nodes, and the image source, tooltip, and marker
//! of their paired toggle icons. It owns no document state of its own; every
//! operation takes the document explicitly and reads the state it needs from
//! it.

use tracing::{debug, instrument};

use crate::domain::{Document, IconSet, Marker, NodeId, NodeState};

/// Tag of the elements scanned by the bulk operations, unless overridden.
const DEFAULT_OUTLINE_TAG: &str = "div";

/// Applies expand/collapse state to outline nodes and their toggle icons.
///
/// The operations are the crate's public surface: [`hover`], [`expand`],
/// [`collapse`], [`toggle`], [`expand_all`], and [`collapse_all`]. They are
/// intended to be wired to the embedder's event handling; each call is a
/// short, synchronous mutation of the shared document.
///
/// All operations are idempotent, so a caller may safely re-invoke any of
/// them after a failure.
///
/// [`hover`]: Outliner::hover
/// [`expand`]: Outliner::expand
/// [`collapse`]: Outliner::collapse
/// [`toggle`]: Outliner::toggle
/// [`expand_all`]: Outliner::expand_all
/// [`collapse_all`]: Outliner::collapse_all
#[derive(Debug, Clone)]
pub struct Outliner {
    /// The icon sources written to toggle icons.
    icons: IconSet,

    /// Tag of the elements participating in outlining.
    outline_tag: String,
}

impl Outliner {
    /// Creates an outliner using the given icon set and the default outline
    /// tag (`div`).
    #[must_use]
    pub fn new(icons: IconSet) -> Self {
        Self {
            icons,
            outline_tag: DEFAULT_OUTLINE_TAG.to_string(),
        }
    }

    /// Sets the tag of the elements the bulk operations scan.
    #[must_use]
    pub fn with_outline_tag(mut self, tag: impl Into<String>) -> Self {
        self.outline_tag = tag.into();
        self
    }

    /// Returns the configured icon set.
    #[must_use]
    pub const fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Returns the tag scanned by the bulk operations.
    #[must_use]
    pub fn outline_tag(&self) -> &str {
        &self.outline_tag
    }

    /// Swaps an icon's image in response to pointer movement.
    ///
    /// When the pointer enters (`over` is true), the icon's `alt` marker
    /// selects the source: leaf, expanded, or collapsed. When the pointer
    /// leaves, the blank placeholder is written regardless of marker.
    ///
    /// A missing element is a silent no-op; hover feedback is cosmetic.
    /// Returns whether an element was updated.
    pub fn hover(&self, document: &mut Document, icon: &NodeId, over: bool) -> bool {
        let Some(element) = document.get_mut(icon) else {
            debug!(icon = %icon, "hover target missing");
            return false;
        };

        let source = if over {
            self.icons.for_marker(Marker::from_alt(element.alt()))
        } else {
            self.icons.blank()
        };
        element.set_src(source);
        true
    }

    /// Expands a node.
    ///
    /// Sets the node's class to `expanded` and, if the derived icon element
    /// exists, points its image at the expanded source with the matching
    /// tooltip and marker. A missing node is a no-op.
    pub fn expand(&self, document: &mut Document, node: &NodeId) -> ApplyOutcome {
        self.apply(document, node, NodeState::Expanded)
    }

    /// Collapses a node.
    ///
    /// The mirror image of [`expand`](Outliner::expand): sets the class to
    /// `collapsed` and updates the icon to the collapsed source, tooltip,
    /// and marker. A missing node is a no-op.
    pub fn collapse(&self, document: &mut Document, node: &NodeId) -> ApplyOutcome {
        self.apply(document, node, NodeState::Collapsed)
    }

    /// Flips a node between the two states.
    ///
    /// The node's current class decides the direction: a `collapsed` class
    /// expands, anything else (including unrecognised classes) collapses.
    /// With [`Scope::Document`] the resulting state is applied to every
    /// participating node instead of just the addressed one.
    ///
    /// Returns the state the operation moved towards.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::NodeNotFound`] if no element with the node's id
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use outliner::{Document, Element, IconSet, NodeId, NodeState, Outliner, Scope};
    ///
    /// let mut document = Document::new();
    /// let node: NodeId = "oNode1".parse()?;
    /// document.insert(node.clone(), Element::new("div").with_class("collapsed"));
    ///
    /// let outliner = Outliner::new(IconSet::default());
    /// let state = outliner.toggle(&mut document, &node, Scope::Node)?;
    /// assert_eq!(state, NodeState::Expanded);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(skip(self, document))]
    pub fn toggle(
        &self,
        document: &mut Document,
        node: &NodeId,
        scope: Scope,
    ) -> Result<NodeState, ToggleError> {
        let element = document
            .get(node)
            .ok_or_else(|| ToggleError::NodeNotFound(node.clone()))?;

        // Anything other than an explicit `collapsed` class collapses.
        let target = match element.class().and_then(NodeState::from_class) {
            Some(NodeState::Collapsed) => NodeState::Expanded,
            _ => NodeState::Collapsed,
        };

        match scope {
            Scope::Node => {
                self.apply(document, node, target);
            }
            Scope::Document => {
                self.apply_all(document, target);
            }
        }

        Ok(target)
    }

    /// Expands every participating node in the document.
    ///
    /// An element participates if it has the outline tag and a class that is
    /// exactly one of the two state classes; everything else is untouched.
    /// Returns the ids of the nodes whose state changed, in document order.
    #[instrument(skip(self, document))]
    pub fn expand_all(&self, document: &mut Document) -> Vec<NodeId> {
        self.apply_all(document, NodeState::Expanded)
    }

    /// Collapses every participating node in the document.
    ///
    /// See [`expand_all`](Outliner::expand_all) for what participates.
    #[instrument(skip(self, document))]
    pub fn collapse_all(&self, document: &mut Document) -> Vec<NodeId> {
        self.apply_all(document, NodeState::Collapsed)
    }

    /// Writes a state to one node and its icon, if they exist.
    fn apply(&self, document: &mut Document, node: &NodeId, state: NodeState) -> ApplyOutcome {
        let Some(element) = document.get_mut(node) else {
            return ApplyOutcome::NodeMissing;
        };

        let already = element.class() == Some(state.class());
        element.set_class(state.class());

        if let Some(icon) = document.get_mut(&node.icon_id()) {
            icon.set_src(self.icons.for_state(state));
            icon.set_title(state.tooltip());
            icon.set_alt(state.marker());
        }

        if already {
            ApplyOutcome::AlreadyInState
        } else {
            ApplyOutcome::Applied
        }
    }

    /// Writes a state to every participating node.
    fn apply_all(&self, document: &mut Document, state: NodeState) -> Vec<NodeId> {
        // Collect ids first to avoid holding the enumeration borrow while
        // mutating.
        let participating: Vec<NodeId> = document
            .elements_by_tag(&self.outline_tag)
            .filter(|(_, element)| {
                element
                    .class()
                    .is_some_and(|class| NodeState::from_class(class).is_some())
            })
            .map(|(id, _)| id.clone())
            .collect();

        let mut changed = Vec::new();
        for id in participating {
            if self.apply(document, &id, state) == ApplyOutcome::Applied {
                changed.push(id);
            }
        }

        debug!(state = %state, changed = changed.len(), "bulk state applied");
        changed
    }
}

/// Whether a toggle applies to the one node or the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Flip only the addressed node.
    Node,
    /// Flip every participating node to the addressed node's opposite state.
    Document,
}

/// Result of applying a state to a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The node transitioned into the requested state.
    Applied,
    /// The node was already in the requested state; its attributes were
    /// rewritten unchanged.
    AlreadyInState,
    /// No element with the node's id exists; nothing was touched.
    NodeMissing,
}

/// Errors that can occur when toggling a node.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToggleError {
    /// The addressed node could not be found.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}
