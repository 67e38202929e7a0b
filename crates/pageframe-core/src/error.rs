//! Error types for pageframe-core.
//!
//! Rendering the shell itself cannot fail. These errors describe rendered
//! markup that does not satisfy the three-region composition contract.

use crate::layout::Region;
use thiserror::Error;

/// Errors reported while inspecting a rendered outline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A top-level element is not one of the region elements
    #[error("Unexpected top-level element: <{0}>")]
    UnexpectedElement(String),
    /// Non-whitespace text sits between the regions
    #[error("Stray top-level text: {0:?}")]
    StrayText(String),
    /// A region never appears
    #[error("Missing {0} region")]
    MissingRegion(Region),
    /// A region appears more than once
    #[error("Duplicate {0} region")]
    DuplicateRegion(Region),
    /// A region appears at the wrong position
    #[error("Expected {expected} region at position {position}, found {found}")]
    OutOfOrder {
        position: usize,
        expected: Region,
        found: Region,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_region() {
        assert_eq!(
            LayoutError::MissingRegion(Region::Footer).to_string(),
            "Missing footer region"
        );
        assert_eq!(
            LayoutError::OutOfOrder {
                position: 0,
                expected: Region::Header,
                found: Region::Main,
            }
            .to_string(),
            "Expected header region at position 0, found main"
        );
        assert_eq!(
            LayoutError::UnexpectedElement("div".to_string()).to_string(),
            "Unexpected top-level element: <div>"
        );
    }
}
