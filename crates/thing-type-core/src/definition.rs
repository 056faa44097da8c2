//! Channel definition: a channel of a thing type.
//!
//! A channel is the part of a thing that represents one of its functions. The
//! definition binds the channel's ID to its [`ChannelType`] and a set of
//! string properties. It is immutable: every construction path validates
//! first, and nothing hands out mutable access afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::channel_type::ChannelType;
use crate::error::{DefinitionError, Result};
use crate::validation::{validate_channel_type, validate_id};

/// The definition of a channel within a thing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChannelDefinition")]
pub struct ChannelDefinition {
    id: String,

    #[serde(rename = "type")]
    channel_type: Arc<ChannelType>,

    properties: BTreeMap<String, String>,
}

impl ChannelDefinition {
    /// Create a definition without properties.
    ///
    /// Fails if `id` is empty.
    pub fn new(id: impl Into<String>, channel_type: Arc<ChannelType>) -> Result<Self> {
        Self::assemble(Some(id.into()), Some(channel_type), None)
    }

    /// Create a definition with properties.
    ///
    /// `None` is treated as an empty property set. The entries are copied into
    /// a map owned by the definition, so the caller's collection can be reused
    /// or mutated freely afterwards.
    pub fn with_properties<I, K, V>(
        id: impl Into<String>,
        channel_type: Arc<ChannelType>,
        properties: Option<I>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let properties = properties.map(collect_properties);
        Self::assemble(Some(id.into()), Some(channel_type), properties)
    }

    /// Start a builder.
    pub fn builder() -> ChannelDefinitionBuilder {
        ChannelDefinitionBuilder::default()
    }

    fn assemble(
        id: Option<String>,
        channel_type: Option<Arc<ChannelType>>,
        properties: Option<BTreeMap<String, String>>,
    ) -> Result<Self> {
        validate_id(id.as_deref())?;
        let channel_type = validate_channel_type(channel_type)?;
        let id = id.unwrap_or_default();
        let properties = properties.unwrap_or_default();

        tracing::trace!(
            id = %id,
            channel_type = %channel_type.uid,
            properties = properties.len(),
            "created channel definition"
        );

        Ok(Self {
            id,
            channel_type,
            properties,
        })
    }

    /// The channel ID (never empty).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The channel type.
    pub fn channel_type(&self) -> &Arc<ChannelType> {
        &self.channel_type
    }

    /// The channel's properties. Empty when none were given.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Look up a single property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

fn collect_properties<I, K, V>(properties: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    properties
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl fmt::Display for ChannelDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChannelDefinition [id={}, type={}, properties={{",
            self.id, self.channel_type
        )?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}]")
    }
}

/// Builder for channel definitions.
///
/// Every piece is optional until [`build`](Self::build), which applies the
/// same checks as the constructors.
#[derive(Debug, Clone, Default)]
pub struct ChannelDefinitionBuilder {
    id: Option<String>,
    channel_type: Option<Arc<ChannelType>>,
    properties: Option<BTreeMap<String, String>>,
}

impl ChannelDefinitionBuilder {
    /// Set the channel ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the channel type.
    pub fn channel_type(mut self, channel_type: Arc<ChannelType>) -> Self {
        self.channel_type = Some(channel_type);
        self
    }

    /// Add a single property, replacing any previous value for `key`.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add several properties.
    pub fn properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .extend(collect_properties(properties));
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<ChannelDefinition> {
        ChannelDefinition::assemble(self.id, self.channel_type, self.properties)
    }
}

/// Wire shape accepted on deserialization. Any field may be absent or null.
#[derive(Deserialize)]
struct RawChannelDefinition {
    #[serde(default)]
    id: Option<String>,

    #[serde(default, rename = "type")]
    channel_type: Option<ChannelType>,

    #[serde(default)]
    properties: Option<BTreeMap<String, String>>,
}

impl TryFrom<RawChannelDefinition> for ChannelDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawChannelDefinition) -> Result<Self> {
        Self::assemble(raw.id, raw.channel_type.map(Arc::new), raw.properties)
    }
}
