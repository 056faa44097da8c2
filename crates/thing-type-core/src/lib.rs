//! # Thing Type Core
//!
//! Channel definitions for thing types: the record that says "this thing
//! type has a channel called `power`, of channel type `system:power`, with
//! these properties".
//!
//! This crate contains no I/O and no registry. Channel types are supplied
//! fully formed by the caller and shared through `Arc`.
//!
//! ## Key Types
//!
//! - [`ChannelDefinition`] - Immutable, validated channel definition
//! - [`ChannelType`] - The descriptor a definition refers to
//! - [`ChannelTypeUid`] - `"<binding>:<channel-type>"` identifier
//! - [`DefinitionError`] - Construction failures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use thing_type_core::{ChannelDefinition, ChannelType, ChannelTypeUid};
//!
//! let uid: ChannelTypeUid = "system:brightness".parse().unwrap();
//! let dimmer = Arc::new(ChannelType::new(uid, "Dimmer", "Brightness"));
//!
//! let def = ChannelDefinition::with_properties(
//!     "brightness",
//!     dimmer,
//!     Some([("min", "0"), ("max", "100")]),
//! )
//! .unwrap();
//!
//! assert_eq!(def.property("max"), Some("100"));
//! assert!(ChannelDefinition::new("", def.channel_type().clone()).is_err());
//! ```

pub mod channel_type;
pub mod definition;
pub mod error;
pub mod types;
pub mod validation;

pub use channel_type::ChannelType;
pub use definition::{ChannelDefinition, ChannelDefinitionBuilder};
pub use error::{DefinitionError, InvalidArgument, Result, UidError};
pub use types::ChannelTypeUid;
pub use validation::{validate_channel_type, validate_id};
