//! Argument checks run before a channel definition is assembled.
//!
//! Every construction path (constructors, builder, deserialization) funnels
//! through these functions, in this order: ID first, then channel type.

use std::sync::Arc;

use crate::channel_type::ChannelType;
use crate::error::{InvalidArgument, Result};

/// Check a channel ID.
///
/// Only absent or zero-length IDs are rejected. Whitespace is preserved as
/// given and a whitespace-only ID is accepted.
pub fn validate_id(id: Option<&str>) -> Result<&str> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => {
            tracing::debug!(id = ?id, "rejected channel definition ID");
            Err(InvalidArgument::EmptyId.into())
        }
    }
}

/// Check that a channel type reference is present.
pub fn validate_channel_type(channel_type: Option<Arc<ChannelType>>) -> Result<Arc<ChannelType>> {
    channel_type.ok_or_else(|| {
        tracing::debug!("rejected channel definition without channel type");
        InvalidArgument::MissingChannelType.into()
    })
}
