//! Test fixtures and helpers.
//!
//! Well-known channel types and a small shared catalog for tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use thing_type_core::{ChannelDefinition, ChannelType, ChannelTypeUid, DefinitionError};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

fn uid(binding_id: &str, id: &str) -> ChannelTypeUid {
    ChannelTypeUid::new(binding_id, id).expect("fixture UIDs are valid")
}

/// `system:power`, a switch channel.
pub fn power_switch_type() -> ChannelType {
    ChannelType::new(uid("system", "power"), "Switch", "Power")
        .description("Turns the device on or off")
        .tag("Switchable")
}

/// `system:brightness`, a dimmer channel.
pub fn dimmer_type() -> ChannelType {
    ChannelType::new(uid("system", "brightness"), "Dimmer", "Brightness")
        .category("DimmableLight")
        .tag("Lighting")
}

/// `system:color-temperature`, an advanced dimmer channel.
pub fn color_temperature_type() -> ChannelType {
    ChannelType::new(uid("system", "color-temperature"), "Dimmer", "Color Temperature")
        .category("ColorLight")
        .advanced(true)
}

/// A set of shared channel types, standing in for an external catalog.
pub struct TestFixture {
    pub channel_types: BTreeMap<ChannelTypeUid, Arc<ChannelType>>,
}

impl TestFixture {
    /// Create a fixture holding the well-known channel types.
    pub fn new() -> Self {
        let channel_types = [power_switch_type(), dimmer_type(), color_temperature_type()]
            .into_iter()
            .map(|ty| (ty.uid.clone(), Arc::new(ty)))
            .collect();
        Self { channel_types }
    }

    /// Look up a channel type by its string UID.
    pub fn channel_type(&self, uid: &str) -> Option<Arc<ChannelType>> {
        let uid: ChannelTypeUid = uid.parse().ok()?;
        self.channel_types.get(&uid).cloned()
    }

    /// The shared `system:power` type.
    pub fn power_switch(&self) -> Arc<ChannelType> {
        self.channel_type("system:power")
            .expect("fixture holds system:power")
    }

    /// The shared `system:brightness` type.
    pub fn dimmer(&self) -> Arc<ChannelType> {
        self.channel_type("system:brightness")
            .expect("fixture holds system:brightness")
    }

    /// Build a definition against a catalog type, as a thing-type loader would.
    pub fn make_definition(
        &self,
        id: &str,
        channel_type_uid: &str,
        properties: &[(&str, &str)],
    ) -> Result<ChannelDefinition, DefinitionError> {
        let mut builder = ChannelDefinition::builder()
            .id(id)
            .properties(properties.iter().copied());
        if let Some(ty) = self.channel_type(channel_type_uid) {
            builder = builder.channel_type(ty);
        }
        builder.build()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thing_type_core::InvalidArgument;

    #[test]
    fn test_fixture_shares_types() {
        let fixture = TestFixture::new();
        let a = fixture.make_definition("power", "system:power", &[]).unwrap();
        let b = fixture.make_definition("power2", "system:power", &[]).unwrap();
        assert!(Arc::ptr_eq(a.channel_type(), b.channel_type()));
    }

    #[test]
    fn test_fixture_unknown_type() {
        let fixture = TestFixture::new();
        let err = fixture
            .make_definition("humidity", "system:humidity", &[])
            .unwrap_err();
        assert_eq!(err.reason(), InvalidArgument::MissingChannelType);
    }

    #[test]
    fn test_fixture_properties() {
        let fixture = TestFixture::new();
        let def = fixture
            .make_definition("brightness", "system:brightness", &[("min", "0"), ("max", "100")])
            .unwrap();
        assert_eq!(def.property("min"), Some("0"));
        assert_eq!(def.channel_type().item_type, "Dimmer");
    }
}
