//! Strong type definitions for thing-type metadata.
//!
//! Identifiers are newtypes so a channel type UID cannot be confused with a
//! channel ID or a free-form label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UidError;

/// Separator between the binding segment and the channel-type segment.
pub const UID_SEPARATOR: char = ':';

/// The UID of a channel type, `"<binding>:<channel-type>"`.
///
/// Both segments are non-empty and restricted to ASCII alphanumerics, `_` and
/// `-`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelTypeUid {
    binding_id: String,
    id: String,
}

impl ChannelTypeUid {
    /// Create a UID from its two segments.
    pub fn new(binding_id: impl Into<String>, id: impl Into<String>) -> Result<Self, UidError> {
        let binding_id = binding_id.into();
        let id = id.into();
        validate_segment(0, &binding_id)?;
        validate_segment(1, &id)?;
        Ok(Self { binding_id, id })
    }

    /// The binding segment.
    pub fn binding_id(&self) -> &str {
        &self.binding_id
    }

    /// The channel-type segment.
    pub fn id(&self) -> &str {
        &self.id
    }
}

fn validate_segment(index: usize, segment: &str) -> Result<(), UidError> {
    if segment.is_empty() {
        return Err(UidError::EmptySegment { index });
    }
    if let Some(ch) = segment
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(UidError::InvalidCharacter {
            segment: segment.to_string(),
            ch,
        });
    }
    Ok(())
}

impl FromStr for ChannelTypeUid {
    type Err = UidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(UID_SEPARATOR).collect();
        match segments.as_slice() {
            [binding_id, id] => Self::new(*binding_id, *id),
            other => Err(UidError::SegmentCount(other.len())),
        }
    }
}

impl TryFrom<String> for ChannelTypeUid {
    type Error = UidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelTypeUid> for String {
    fn from(uid: ChannelTypeUid) -> Self {
        uid.to_string()
    }
}

impl fmt::Debug for ChannelTypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelTypeUid({})", self)
    }
}

impl fmt::Display for ChannelTypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.binding_id, UID_SEPARATOR, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_-]{1,16}".prop_map(String::from)
    }

    #[test]
    fn test_uid_parse_and_display() {
        let uid: ChannelTypeUid = "hue:brightness".parse().unwrap();
        assert_eq!(uid.binding_id(), "hue");
        assert_eq!(uid.id(), "brightness");
        assert_eq!(uid.to_string(), "hue:brightness");
    }

    #[test]
    fn test_uid_debug() {
        let uid = ChannelTypeUid::new("system", "power").unwrap();
        assert_eq!(format!("{:?}", uid), "ChannelTypeUid(system:power)");
    }

    #[test]
    fn test_uid_segment_count() {
        assert_eq!(
            "nocolon".parse::<ChannelTypeUid>(),
            Err(UidError::SegmentCount(1))
        );
        assert_eq!(
            "a:b:c".parse::<ChannelTypeUid>(),
            Err(UidError::SegmentCount(3))
        );
    }

    #[test]
    fn test_uid_empty_segment() {
        assert_eq!(
            ":power".parse::<ChannelTypeUid>(),
            Err(UidError::EmptySegment { index: 0 })
        );
        assert_eq!(
            "system:".parse::<ChannelTypeUid>(),
            Err(UidError::EmptySegment { index: 1 })
        );
    }

    #[test]
    fn test_uid_invalid_character() {
        let err = "system:po wer".parse::<ChannelTypeUid>().unwrap_err();
        assert_eq!(
            err,
            UidError::InvalidCharacter {
                segment: "po wer".into(),
                ch: ' '
            }
        );
    }

    #[test]
    fn test_uid_serde_as_string() {
        let uid = ChannelTypeUid::new("zwave", "switch_binary").unwrap();
        let json = serde_json::to_string(&uid).unwrap();
        assert_eq!(json, "\"zwave:switch_binary\"");

        let back: ChannelTypeUid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uid);

        assert!(serde_json::from_str::<ChannelTypeUid>("\"broken\"").is_err());
    }

    proptest! {
        #[test]
        fn uid_display_parses_back(binding_id in segment(), id in segment()) {
            let uid = ChannelTypeUid::new(binding_id.clone(), id.clone()).unwrap();
            let rendered = uid.to_string();
            prop_assert_eq!(&rendered, &format!("{}:{}", binding_id, id));

            let parsed: ChannelTypeUid = rendered.parse().unwrap();
            prop_assert_eq!(parsed.binding_id(), binding_id.as_str());
            prop_assert_eq!(parsed.id(), id.as_str());
            prop_assert_eq!(String::from(parsed), rendered);
        }

        #[test]
        fn uid_rejects_foreign_characters(
            binding_id in segment(),
            id in segment(),
            bad in "[^A-Za-z0-9_:-]",
        ) {
            let input = format!("{}:{}{}", binding_id, id, bad);
            let is_invalid_character = matches!(
                input.parse::<ChannelTypeUid>(),
                Err(UidError::InvalidCharacter { .. })
            );
            prop_assert!(is_invalid_character);
        }
    }
}
