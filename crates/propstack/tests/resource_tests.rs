#[cfg(test)]
mod tests {
    use propstack::{ResourceSource, Source};
    use rust_embed::RustEmbed;

    #[derive(RustEmbed)]
    #[folder = "tests/fixtures"]
    struct Fixtures;

    #[test]
    fn test_embedded_lookup() {
        let source = ResourceSource::from_embedded::<Fixtures>(&["defaults.properties"]);
        assert_eq!(source.get("service.name"), Some("propstack-demo".to_string()));
        assert_eq!(source.get("service.port"), Some("8080".to_string()));
        assert_eq!(source.get("greeting"), Some("hello".to_string()));
        assert_eq!(source.get("missing"), None);
    }

    #[test]
    fn test_later_resource_overrides_earlier() {
        let source = ResourceSource::from_embedded::<Fixtures>(&[
            "defaults.properties",
            "overrides.properties",
        ]);
        assert_eq!(source.get("service.port"), Some("9090".to_string()));
        assert_eq!(source.get("service.name"), Some("propstack-demo".to_string()));
    }

    #[test]
    fn test_missing_resource_skipped() {
        let source = ResourceSource::from_embedded::<Fixtures>(&[
            "no-such.properties",
            "defaults.properties",
        ]);
        assert_eq!(source.get("service.name"), Some("propstack-demo".to_string()));
    }

    #[test]
    fn test_static_resources() {
        let source = ResourceSource::from_static(&[
            ("base", "k=1\nshared=base\n"),
            ("extra", "shared=extra\n"),
        ]);
        assert_eq!(source.get("k"), Some("1".to_string()));
        assert_eq!(source.get("shared"), Some("extra".to_string()));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let source = ResourceSource::from_static(&[("base", "k=1\n")]);
        assert_eq!(source.get(""), None);
        assert_eq!(source.get("  "), None);
    }
}
