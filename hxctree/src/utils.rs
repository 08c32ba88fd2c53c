use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::{ctype::Tag, raw::Address};

/// Class of a ctree node, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    Expression,
    Statement,
}

impl std::fmt::Display for ItemClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemClass::Expression => write!(f, "expression"),
            ItemClass::Statement => write!(f, "statement"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// No registered kind handles the tag of a node.
    #[error(
        "No registered ctree kind handles tag `{tag}`. The host IR reports a node kind this layer does not support."
    )]
    UnsupportedTag { tag: Tag },

    /// Dispatch was requested from an abstract item.
    #[error("`{method}` is not implemented for abstract item `{kind}`.")]
    NotImplemented {
        method: &'static str,
        kind: &'static str,
    },

    /// Two kinds claim the same tag.
    #[error("Tag `{tag}` is claimed by both `{first}` and `{second}`.")]
    AmbiguousTag {
        tag: Tag,
        first: &'static str,
        second: &'static str,
    },

    /// A kind registers a tag outside of the fixed tag space.
    #[error("Kind `{name}` registers tag `{tag}` which is outside of the ctree tag space.")]
    InvalidTag { tag: Tag, name: &'static str },

    /// The registration's predicate does not answer true for exactly its own tag.
    #[error("Kind `{name}` registered for tag `{tag}` does not handle exactly that tag.")]
    InconsistentRegistration { tag: Tag, name: &'static str },

    /// The handle's expression flag disagrees with the class of its tag.
    #[error(
        "Node at 0x{ea:X} has tag `{tag}` but reports is_expr = {is_expr}, which contradicts the tag class."
    )]
    ItemClassMismatch { tag: Tag, ea: Address, is_expr: bool },

    /// An expression was found where a statement was expected, or the reverse.
    #[error("Expected a ctree {expected} at 0x{ea:X}, found tag `{tag}`.")]
    UnexpectedItem {
        expected: ItemClass,
        tag: Tag,
        ea: Address,
    },

    /// A node lacks a child or payload its kind requires.
    #[error("Node `{kind}` at 0x{ea:X} has no `{field}`.")]
    MissingField {
        kind: &'static str,
        field: &'static str,
        ea: Address,
    },
}

pub type HxResult<T> = Result<T, Error>;
