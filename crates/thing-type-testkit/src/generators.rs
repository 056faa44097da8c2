//! Proptest generators for property-based testing.

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

use thing_type_core::{ChannelDefinition, ChannelType, ChannelTypeUid, DefinitionError};

/// Generate a valid UID segment.
pub fn uid_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}".prop_map(String::from)
}

/// Generate a valid ChannelTypeUid.
pub fn channel_type_uid() -> impl Strategy<Value = ChannelTypeUid> {
    (uid_segment(), uid_segment()).prop_map(|(binding_id, id)| {
        ChannelTypeUid::new(binding_id, id).expect("generated segments are valid")
    })
}

/// Generate a ChannelType.
pub fn channel_type() -> impl Strategy<Value = ChannelType> {
    (
        channel_type_uid(),
        prop_oneof![
            Just("Switch"),
            Just("Dimmer"),
            Just("Number"),
            Just("String"),
            Just("Color"),
        ],
        "[A-Za-z ]{1,24}",
        any::<bool>(),
    )
        .prop_map(|(uid, item_type, label, advanced)| {
            ChannelType::new(uid, item_type, label).advanced(advanced)
        })
}

/// Generate a non-empty channel ID, including whitespace-only ones.
pub fn channel_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_-]{0,31}".prop_map(String::from),
        "[ \t]{1,4}".prop_map(String::from),
        ".{1,16}".prop_map(String::from),
    ]
}

/// Generate a property map of up to `max_len` entries.
pub fn properties(max_len: usize) -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(".{0,12}", ".{0,24}", 0..=max_len)
}

/// Parameters for generating a channel definition.
#[derive(Debug, Clone)]
pub struct DefinitionParams {
    pub id: String,
    pub channel_type: Arc<ChannelType>,
    pub properties: Option<BTreeMap<String, String>>,
}

impl Arbitrary for DefinitionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (channel_id(), channel_type(), proptest::option::of(properties(8)))
            .prop_map(|(id, ty, properties)| DefinitionParams {
                id,
                channel_type: Arc::new(ty),
                properties,
            })
            .boxed()
    }
}

/// Build a definition from parameters.
pub fn definition_from_params(
    params: &DefinitionParams,
) -> Result<ChannelDefinition, DefinitionError> {
    ChannelDefinition::with_properties(
        params.id.clone(),
        params.channel_type.clone(),
        params.properties.clone(),
    )
}
