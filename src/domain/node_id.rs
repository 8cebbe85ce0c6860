use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// A validated document element identifier.
///
/// Outline nodes and their toggle icons are addressed by id. Ids are assigned
/// by the embedding document's markup; the only validation applied here is
/// existence (the id must be non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonEmptyString);

impl NodeId {
    /// Creates a new `NodeId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNodeIdError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidNodeIdError> {
        let non_empty = NonEmptyString::new(s).map_err(|_| InvalidNodeIdError)?;
        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the id of the toggle icon paired with this node.
    ///
    /// The icon id is derived by replacing the first character of the node id
    /// with `i`: the icon for node `xNode1` is `iNode1`. The derivation is a
    /// naming convention of the outline markup, not a lookup; whether an
    /// element with the derived id actually exists is up to the document.
    #[must_use]
    pub fn icon_id(&self) -> Self {
        let rest = {
            let mut chars = self.as_str().chars();
            chars.next();
            chars.as_str()
        };

        let mut id = String::with_capacity(rest.len() + 1);
        id.push('i');
        id.push_str(rest);

        match NonEmptyString::new(id) {
            Ok(id) => Self(id),
            Err(_) => unreachable!("icon id always starts with 'i'"),
        }
    }
}

impl TryFrom<String> for NodeId {
    type Error = InvalidNodeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NodeId {
    type Error = InvalidNodeIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for NodeId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = InvalidNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when an element id is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid node id: must be non-empty")]
pub struct InvalidNodeIdError;

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn node_id_creation() {
        let id = NodeId::new("oNode1".to_string()).unwrap();
        assert_eq!(id.as_str(), "oNode1");
    }

    #[test]
    fn node_id_creation_empty_fails() {
        assert_eq!(NodeId::new(String::new()), Err(InvalidNodeIdError));
    }

    #[test_case("xNode1", "iNode1"; "markup convention")]
    #[test_case("oSection2", "iSection2"; "outline prefix")]
    #[test_case("x", "i"; "single character id")]
    #[test_case("iNode1", "iNode1"; "derivation is stable on icon ids")]
    fn icon_id_replaces_first_character(node: &str, expected: &str) {
        let id = NodeId::try_from(node).unwrap();
        assert_eq!(id.icon_id().as_str(), expected);
    }

    #[test]
    fn icon_id_handles_multibyte_first_character() {
        let id = NodeId::try_from("éNode1").unwrap();
        assert_eq!(id.icon_id().as_str(), "iNode1");
    }

    #[test]
    fn from_str_roundtrip() {
        let id: NodeId = "oNode7".parse().unwrap();
        assert_eq!(id.to_string(), "oNode7");
    }

    #[test]
    fn from_str_empty_fails() {
        let result = "".parse::<NodeId>();
        assert_eq!(result, Err(InvalidNodeIdError));
    }

    #[test]
    fn deref_and_as_ref_expose_the_id() {
        let id = NodeId::try_from("oNode1").unwrap();
        assert_eq!(&*id, "oNode1");
        assert_eq!(id.as_ref(), "oNode1");
    }

    #[test]
    fn clone_and_eq() {
        let id = NodeId::try_from("oNode1").unwrap();
        assert_eq!(id, id.clone());
        assert_ne!(id, NodeId::try_from("oNode2").unwrap());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{InvalidNodeIdError}"),
            "Invalid node id: must be non-empty"
        );
    }
}
