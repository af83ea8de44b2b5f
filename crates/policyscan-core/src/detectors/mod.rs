//! Specialized detectors — contextual extraction beyond flat keyword lists.
//!
//! Detectors never fail: malformed or empty input yields an empty result,
//! not an error.

pub mod api_refs;
pub mod cloud;
pub mod data_sharing;
pub mod sentences;
pub mod third_party;

pub use api_refs::{detect_api_references, MAX_API_REFERENCES};
pub use cloud::{CloudDetector, CloudInfo};
pub use data_sharing::{detect_data_sharing, MAX_DATA_SHARING_MENTIONS};
pub use third_party::{detect_third_party_services, MAX_THIRD_PARTY_SERVICES};
