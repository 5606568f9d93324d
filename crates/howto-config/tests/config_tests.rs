#[cfg(test)]
mod tests {
    use howto_config::ConfigLoader;
    use howto_config::schema::*;
    use std::io::Write;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_howto_config_defaults() {
        let config = HowToConfig::default();
        assert_eq!(config.site.base_url, "https://howtoninja.com");
        assert_eq!(config.generator.model, "gpt-4o-mini");
        assert_eq!(config.generator.max_tokens, 1200);
        assert_eq!(config.generator.temperature, 0.7);
        assert!(config.services.openai_api_key.is_none());
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.default_title, "HowTo Ninja - Learn Any Skill in Minutes");
        assert!(config.default_description.contains("AI-powered"));
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn test_store_config_default_path_is_home_scoped() {
        let config = StoreConfig::default();
        let path = config.resolve_path();
        assert!(path.ends_with(".howto/saved_skills.json") || path.ends_with("saved_skills.json"));
    }

    #[test]
    fn test_store_config_explicit_path_wins() {
        let config = StoreConfig {
            path: Some(std::path::PathBuf::from("/tmp/skills.json")),
        };
        assert_eq!(config.resolve_path(), std::path::PathBuf::from("/tmp/skills.json"));
    }

    // ── Credential filtering ───────────────────────────────────

    #[test]
    fn test_usable_key_rejects_placeholders() {
        for bad in ["", "   ", "undefined", "your_openai_api_key_here"] {
            let services = ServicesConfig {
                openai_api_key: Some(bad.to_string()),
            };
            assert!(services.usable_openai_key().is_none(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_usable_key_accepts_real_key() {
        let services = ServicesConfig {
            openai_api_key: Some("sk-test-123".into()),
        };
        assert_eq!(services.usable_openai_key(), Some("sk-test-123"));
    }

    #[test]
    fn test_usable_key_absent() {
        assert!(ServicesConfig::default().usable_openai_key().is_none());
    }

    // ── TOML roundtrip tests ───────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = HowToConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: HowToConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.site.base_url, config.site.base_url);
        assert_eq!(restored.generator.model, config.generator.model);
        assert_eq!(restored.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[generator]
model = "gpt-4o"

[services]
openai_api_key = "sk-abc"
"#;
        let config: HowToConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.model, "gpt-4o");
        assert_eq!(config.services.openai_api_key.as_deref(), Some("sk-abc"));
        // Defaults should fill in
        assert_eq!(config.generator.max_tokens, 1200);
        assert_eq!(config.site.base_url, "https://howtoninja.com");
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_validate_default_config_passes() {
        let config = HowToConfig::default();
        let warnings = config.validate().unwrap();
        // Missing key is an informational note, never an error.
        assert!(warnings.iter().any(|w| w.field == "services.openai_api_key"));
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = HowToConfig::default();
        config.generator.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = HowToConfig::default();
        config.site.base_url = "not a url".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_placeholder_key_is_warning_not_error() {
        let mut config = HowToConfig::default();
        config.services.openai_api_key = Some("your_openai_api_key_here".into());
        let warnings = config.validate().unwrap();
        let w = warnings
            .iter()
            .find(|w| w.field == "services.openai_api_key")
            .unwrap();
        assert_eq!(w.severity, WarningSeverity::Warning);
    }

    #[test]
    fn test_validate_unknown_log_format_is_warning() {
        let mut config = HowToConfig::default();
        config.logging.format = "xml".into();
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.field == "logging.format"));
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("howto.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[site]
base_url = "https://example.com"

[generator]
model = "gpt-4o"
max_tokens = 800

[services]
openai_api_key = "sk-test"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        let config = loader.get();
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.generator.model, "gpt-4o");
        assert_eq!(config.generator.max_tokens, 800);
        assert_eq!(config.services.openai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_config_loader_reload() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("howto.toml");

        std::fs::write(
            &config_path,
            r#"
[generator]
model = "gpt-4o-mini"
"#,
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(config_path.as_path())).unwrap();
        assert_eq!(loader.get().generator.model, "gpt-4o-mini");

        std::fs::write(
            &config_path,
            r#"
[generator]
model = "gpt-4o"
"#,
        )
        .unwrap();

        loader.reload().unwrap();
        assert_eq!(loader.get().generator.model, "gpt-4o");
    }

    // ── JSON roundtrip ─────────────────────────────────────────

    #[test]
    fn test_config_json_roundtrip() {
        let config = HowToConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: HowToConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.site.base_url, config.site.base_url);
    }
}
