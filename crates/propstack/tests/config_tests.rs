#[cfg(test)]
mod tests {
    use propstack::{Source, StackBuilder, StackConfig, StackError, DEFAULT_CACHE_SIZE};
    use std::fs;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_stack_config_defaults() {
        let config = StackConfig::default();
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.size, DEFAULT_CACHE_SIZE);
        assert!(config.files.is_empty());
        assert!(config.directory.is_none());
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert!(config.use_environment);
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = StackConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: StackConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.cache.enabled, config.cache.enabled);
        assert_eq!(restored.refresh_interval_ms, config.refresh_interval_ms);
        assert_eq!(restored.use_environment, config.use_environment);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
files = ["/etc/app/base.properties", "/etc/app/local.properties"]

[cache]
enabled = true
"#;
        let config: StackConfig = toml::from_str(toml_str).unwrap();
        assert!(config.cache.enabled);
        assert_eq!(config.files.len(), 2);
        // Defaults should fill in
        assert_eq!(config.cache.size, DEFAULT_CACHE_SIZE);
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert!(config.use_environment);
    }

    #[test]
    fn test_from_toml_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.toml");
        fs::write(
            &path,
            "refresh_interval_ms = 5000\nuse_environment = false\n[cache]\nenabled = true\nsize = 8\n",
        )
        .unwrap();

        let config = StackConfig::from_toml_path(&path).unwrap();
        assert_eq!(config.refresh_interval_ms, 5000);
        assert!(!config.use_environment);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.size, 8);
    }

    #[test]
    fn test_from_toml_path_missing_file() {
        let err = StackConfig::from_toml_path("/no/such/stack.toml").unwrap_err();
        assert!(matches!(err, StackError::Io(_)));
    }

    #[test]
    fn test_from_toml_path_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "cache = not valid toml [\n").unwrap();
        let err = StackConfig::from_toml_path(&path).unwrap_err();
        assert!(matches!(err, StackError::Config(_)));
    }

    // ── Builder tests ──────────────────────────────────────────

    #[test]
    fn test_builder_from_config_resolves_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("app.properties");
        fs::write(&file, "service.port=9090\n").unwrap();

        let toml_str = format!(
            "files = [\"{}\"]\nuse_environment = false\n[cache]\nenabled = true\nsize = 4\n",
            file.display()
        );
        let config: StackConfig = toml::from_str(&toml_str).unwrap();
        let stack = StackBuilder::from_config(config).build();
        assert_eq!(stack.get("service.port"), Some("9090".to_string()));
        assert_eq!(stack.get_number("service.port", -1), 9090);
    }

    #[test]
    fn test_builder_cache_size_zero_is_corrected_when_enabled() {
        let toml_str = "use_environment = false\n[cache]\nenabled = true\nsize = 0\n";
        let config: StackConfig = toml::from_str(toml_str).unwrap();
        // Must build a working stack, not silently drop the cache.
        let stack = StackBuilder::from_config(config).build();
        assert_eq!(stack.get("missing"), None);
    }

    #[test]
    fn test_builder_without_environment() {
        unsafe {
            std::env::set_var("PROPSTACK_CONFIG_TEST_VAR", "from-env");
        }
        let stack = propstack::PropertyStack::builder()
            .without_environment()
            .build();
        assert_eq!(stack.get("PROPSTACK_CONFIG_TEST_VAR"), None);
    }

    #[test]
    fn test_builder_extra_source_has_lowest_priority() {
        let stack = propstack::PropertyStack::builder()
            .without_environment()
            .system_properties([("k", "from-system")])
            .with_source(Box::new(propstack::SystemSource::new([
                ("k", "from-extra"),
                ("extra-only", "1"),
            ])))
            .build();
        assert_eq!(stack.get("k"), Some("from-system".to_string()));
        assert_eq!(stack.get("extra-only"), Some("1".to_string()));
    }
}
