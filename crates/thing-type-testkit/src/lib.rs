//! # Thing Type Testkit
//!
//! Testing utilities for channel definitions.
//!
//! ## Overview
//!
//! - **Fixtures**: well-known channel types and a shared catalog
//! - **Generators**: proptest strategies for property-based testing
//! - **Vectors**: serialized definitions with their expected outcomes
//!
//! ## Test Fixtures
//!
//! ```rust
//! use thing_type_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let def = fixture
//!     .make_definition("brightness", "system:brightness", &[("max", "100")])
//!     .unwrap();
//! assert_eq!(def.property("max"), Some("100"));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use thing_type_testkit::generators::{definition_from_params, DefinitionParams};
//!
//! proptest! {
//!     #[test]
//!     fn id_is_preserved(params: DefinitionParams) {
//!         let def = definition_from_params(&params).unwrap();
//!         prop_assert_eq!(def.id(), params.id.as_str());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, TestFixture};
pub use generators::{definition_from_params, DefinitionParams};
pub use vectors::{all_vectors, parse_vector, verify_all_vectors, SerializedVector};
