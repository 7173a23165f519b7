use figment::Jail;
use pitwall_config::PitwallConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("PITWALL_SYNC__BASE_URL", "https://scout.example.org");
        jail.set_env("PITWALL_SYNC__AUTH_KEY", "key-from-env");
        jail.set_env("PITWALL_GENERAL__AUTOSAVE_DEBOUNCE_MS", "500");

        let config: PitwallConfig = PitwallConfig::figment().extract().expect("config loads");
        assert_eq!(config.sync.base_url, "https://scout.example.org");
        assert_eq!(config.sync.auth_key, "key-from-env");
        assert_eq!(config.general.autosave_debounce_ms, 500);
        assert!(config.sync.is_configured());
        Ok(())
    });
}

#[test]
fn defaults_apply_without_any_source() {
    Jail::expect_with(|_jail| {
        let config: PitwallConfig = PitwallConfig::figment().extract().expect("config loads");
        assert!(!config.sync.is_configured());
        assert_eq!(config.general.autosave_debounce_ms, 2000);
        Ok(())
    });
}
