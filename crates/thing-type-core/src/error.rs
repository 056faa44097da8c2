//! Error types for channel definitions and channel-type descriptors.

use thiserror::Error;

/// Why a channel definition argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidArgument {
    #[error("the ID must neither be null nor empty")]
    EmptyId,

    #[error("the channel type must not be null")]
    MissingChannelType,
}

/// Errors raised while constructing a [`ChannelDefinition`](crate::ChannelDefinition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl DefinitionError {
    /// The rejected argument, for callers that branch on the reason.
    pub fn reason(&self) -> InvalidArgument {
        match self {
            DefinitionError::InvalidArgument(reason) => *reason,
        }
    }
}

/// Errors raised while parsing a [`ChannelTypeUid`](crate::ChannelTypeUid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UidError {
    #[error("channel type UID must have exactly two segments, got {0}")]
    SegmentCount(usize),

    #[error("channel type UID segment {index} is empty")]
    EmptySegment { index: usize },

    #[error("channel type UID segment {segment:?} contains invalid character {ch:?}")]
    InvalidCharacter { segment: String, ch: char },
}

/// Result type for definition construction.
pub type Result<T> = std::result::Result<T, DefinitionError>;
