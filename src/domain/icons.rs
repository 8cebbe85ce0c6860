use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Marker, NodeState};

/// The icon image sources used by the outline.
///
/// Four sources cover the whole surface: one per node state, a blank
/// placeholder shown when the pointer leaves an icon, and a row handle shown
/// when hovering a leaf. The defaults name the stock resources, so a page
/// shipping those images needs no configuration file at all.
///
/// The embedder is responsible for warming its image cache; [`sources`]
/// exposes the four sources in a stable order for that purpose.
///
/// [`sources`]: IconSet::sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct IconSet {
    /// Source for an expanded node's toggle icon.
    expanded: String,

    /// Source for a collapsed node's toggle icon.
    collapsed: String,

    /// Placeholder source shown when the pointer is not over an icon.
    blank: String,

    /// Row-handle source shown when hovering a leaf.
    leaf: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            expanded: default_expanded(),
            collapsed: default_collapsed(),
            blank: default_blank(),
            leaf: default_leaf(),
        }
    }
}

impl IconSet {
    /// Loads the icon set from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read icon set file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse icon set file: {e}"))
    }

    /// Saves the icon set to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the icon set cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize icon set: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write icon set file: {e}"))
    }

    /// Returns the source for an expanded node's toggle icon.
    #[must_use]
    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    /// Returns the source for a collapsed node's toggle icon.
    #[must_use]
    pub fn collapsed(&self) -> &str {
        &self.collapsed
    }

    /// Returns the blank placeholder source.
    #[must_use]
    pub fn blank(&self) -> &str {
        &self.blank
    }

    /// Returns the leaf row-handle source.
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Returns the toggle-icon source for a node in the given state.
    #[must_use]
    pub fn for_state(&self, state: NodeState) -> &str {
        match state {
            NodeState::Expanded => &self.expanded,
            NodeState::Collapsed => &self.collapsed,
        }
    }

    /// Returns the source shown when hovering an icon with the given marker.
    #[must_use]
    pub fn for_marker(&self, marker: Marker) -> &str {
        match marker {
            Marker::Leaf => &self.leaf,
            Marker::Expanded => &self.expanded,
            Marker::Collapsed => &self.collapsed,
        }
    }

    /// Returns the four sources in a stable order, for eager preloading by
    /// the embedder.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        [
            self.expanded.as_str(),
            self.collapsed.as_str(),
            self.blank.as_str(),
            self.leaf.as_str(),
        ]
        .into_iter()
    }
}

fn default_expanded() -> String {
    "Expanded.png".to_string()
}

fn default_collapsed() -> String {
    "Collapsed.png".to_string()
}

fn default_blank() -> String {
    "blank.png".to_string()
}

fn default_leaf() -> String {
    "LeafRowHandle.png".to_string()
}

/// The serialized versions of the icon set.
/// This allows for future changes to the file format and to the domain type
/// without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_expanded")]
        expanded: String,

        #[serde(default = "default_collapsed")]
        collapsed: String,

        #[serde(default = "default_blank")]
        blank: String,

        #[serde(default = "default_leaf")]
        leaf: String,
    },
}

impl From<Versions> for IconSet {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                expanded,
                collapsed,
                blank,
                leaf,
            } => Self {
                expanded,
                collapsed,
                blank,
                leaf,
            },
        }
    }
}

impl From<IconSet> for Versions {
    fn from(icons: IconSet) -> Self {
        Self::V1 {
            expanded: icons.expanded,
            collapsed: icons.collapsed,
            blank: icons.blank,
            leaf: icons.leaf,
        }
    }
}
