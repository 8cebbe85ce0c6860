use std::fmt;

/// The visual state of an outline node.
///
/// A participating node's class attribute is always exactly one of the two
/// state classes. Leaf rows are a hover-only visual distinction carried by
/// the icon's [`Marker`], not a third state; they never transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Children are visible; the toggle icon offers collapsing.
    Expanded,
    /// Children are hidden; the toggle icon offers expanding.
    Collapsed,
}

impl NodeState {
    /// Returns the class attribute value written to a node in this state.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    /// Parses a class attribute value.
    ///
    /// Returns `None` for anything other than the two state classes. Elements
    /// whose class does not parse do not participate in outlining.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "expanded" => Some(Self::Expanded),
            "collapsed" => Some(Self::Collapsed),
            _ => None,
        }
    }

    /// Returns the `alt` marker written to the toggle icon in this state.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Expanded => "V",
            Self::Collapsed => ">",
        }
    }

    /// Returns the tooltip advertising the action available in this state.
    #[must_use]
    pub const fn tooltip(self) -> &'static str {
        match self {
            Self::Expanded => "collapse",
            Self::Collapsed => "expand",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// The `alt` marker of a toggle icon, as read when hovering.
///
/// Parsing is total: `*` marks a leaf row handle, `V` an expanded node, and
/// anything else (including a missing attribute) is treated as collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `*`: a leaf row with nothing to toggle.
    Leaf,
    /// `V`: an expanded node.
    Expanded,
    /// Any other marker value, or no marker at all.
    Collapsed,
}

impl Marker {
    /// Parses an `alt` attribute value.
    #[must_use]
    pub fn from_alt(alt: Option<&str>) -> Self {
        match alt {
            Some("*") => Self::Leaf,
            Some("V") => Self::Expanded,
            _ => Self::Collapsed,
        }
    }
}
