//! Channel type: the descriptor a channel definition refers to.
//!
//! Descriptors are owned by whatever catalog produced them. Definitions hold
//! them through an `Arc` and never inspect them beyond comparison and
//! rendering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::types::ChannelTypeUid;

/// Describes the semantic type of a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelType {
    /// Unique identifier of this channel type.
    pub uid: ChannelTypeUid,

    /// The kind of item this channel binds to (e.g. `Switch`, `Dimmer`).
    pub item_type: String,

    /// Human-readable label.
    pub label: String,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional presentation category (e.g. `Light`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-form tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    /// Whether the channel is hidden from basic configuration views.
    #[serde(default)]
    pub advanced: bool,
}

impl ChannelType {
    /// Create a channel type with no description, category or tags.
    pub fn new(uid: ChannelTypeUid, item_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            uid,
            item_type: item_type.into(),
            label: label.into(),
            description: None,
            category: None,
            tags: BTreeSet::new(),
            advanced: false,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Mark as advanced.
    pub fn advanced(mut self, advanced: bool) -> Self {
        self.advanced = advanced;
        self
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChannelType [uid={}, item_type={}, label={}]",
            self.uid, self.item_type, self.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimmer() -> ChannelType {
        ChannelType::new(
            ChannelTypeUid::new("system", "brightness").unwrap(),
            "Dimmer",
            "Brightness",
        )
    }

    #[test]
    fn test_builder_methods() {
        let ty = dimmer()
            .description("Controls the brightness")
            .category("DimmableLight")
            .tag("Lighting")
            .tag("Lighting")
            .advanced(true);

        assert_eq!(ty.description.as_deref(), Some("Controls the brightness"));
        assert_eq!(ty.category.as_deref(), Some("DimmableLight"));
        assert_eq!(ty.tags.len(), 1);
        assert!(ty.advanced);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            dimmer().to_string(),
            "ChannelType [uid=system:brightness, item_type=Dimmer, label=Brightness]"
        );
    }

    #[test]
    fn test_serde_defaults() {
        let ty: ChannelType = serde_json::from_str(
            r#"{"uid":"system:brightness","item_type":"Dimmer","label":"Brightness"}"#,
        )
        .unwrap();
        assert_eq!(ty, dimmer());

        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(
            json,
            r#"{"uid":"system:brightness","item_type":"Dimmer","label":"Brightness","advanced":false}"#
        );
    }
}
