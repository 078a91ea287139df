// ABOUTME: Tests for validated domain types.
// ABOUTME: Image reference parsing and ID type behavior.

use dockman::types::{ContainerId, ExecId, ImageRef};

mod image_ref_tests {
    use super::*;

    #[test]
    fn parse_simple_name_defaults_tag() {
        let img = ImageRef::parse("ubuntu").unwrap();
        assert_eq!(img.name(), "ubuntu");
        assert_eq!(img.tag(), "latest");
    }

    #[test]
    fn parse_name_with_tag() {
        let img = ImageRef::parse("ubuntu:20.04").unwrap();
        assert_eq!(img.name(), "ubuntu");
        assert_eq!(img.tag(), "20.04");
    }

    #[test]
    fn parse_namespaced_name() {
        let img = ImageRef::parse("library/ubuntu:20.04").unwrap();
        assert_eq!(img.name(), "library/ubuntu");
        assert_eq!(img.tag(), "20.04");
    }

    #[test]
    fn with_tag_joins_parts() {
        let img = ImageRef::with_tag("ubuntu", "20.04").unwrap();
        assert_eq!(img.to_string(), "ubuntu:20.04");
    }

    #[test]
    fn display_always_carries_a_tag() {
        let img = ImageRef::parse("ubuntu").unwrap();
        assert_eq!(img.to_string(), "ubuntu:latest");
    }

    #[test]
    fn parse_empty_returns_error() {
        assert!(ImageRef::parse("").is_err());
        assert!(ImageRef::parse("   ").is_err());
    }

    #[test]
    fn parse_trailing_colon_returns_error() {
        assert!(ImageRef::parse("ubuntu:").is_err());
    }

    #[test]
    fn parse_invalid_chars_returns_error() {
        assert!(ImageRef::parse("bad image").is_err());
        assert!(ImageRef::parse("bad!image").is_err());
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        let id = ContainerId::new("abc123".to_string());
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn equality_is_by_value() {
        let a = ExecId::new("e1".to_string());
        let b = ExecId::new("e1".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn deserializes_from_json_string() {
        let id: ContainerId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }
}
