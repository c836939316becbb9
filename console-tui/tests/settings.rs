use console_tui::config::{ConsoleConfig, PlatformSettings};
use console_tui::settings::{Setting, SettingsError, SettingsProvider};

#[tokio::test]
async fn test_round_trip() {
    let provider = SettingsProvider::in_memory();
    provider.set("greeting", &"hello".to_string()).await.unwrap();
    let value: Option<String> = provider.get("greeting").await.unwrap();
    assert_eq!(value.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_missing_key_falls_back() {
    let provider = SettingsProvider::in_memory();
    let missing: Option<u32> = provider.get("nope").await.unwrap();
    assert_eq!(missing, None);
    assert_eq!(provider.get_or("nope", 7u32).await.unwrap(), 7);
}

#[tokio::test]
async fn test_keys_with_prefix_and_delete() {
    let provider = SettingsProvider::in_memory();
    provider.set("ui.theme", &"dark".to_string()).await.unwrap();
    provider.set("ui.page_size", &20usize).await.unwrap();
    provider.set("auth.user", &"admin".to_string()).await.unwrap();

    let mut keys = provider.keys_with_prefix("ui.").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["ui.page_size".to_string(), "ui.theme".to_string()]);

    assert!(provider.delete("ui.theme").await.unwrap());
    assert!(!provider.delete("ui.theme").await.unwrap());
    let theme: Option<String> = provider.get("ui.theme").await.unwrap();
    assert!(theme.is_none());
}

#[tokio::test]
async fn test_clones_share_backend() {
    let provider = SettingsProvider::in_memory();
    let other = provider.clone();
    provider.set("shared", &true).await.unwrap();
    assert_eq!(other.get::<bool>("shared").await.unwrap(), Some(true));
}

#[tokio::test]
async fn test_console_config_defaults_and_save() {
    let provider = SettingsProvider::in_memory();
    let config = ConsoleConfig::load(&provider).await.unwrap();
    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(config.page_size(), 10);

    let changed = ConsoleConfig {
        sidebar_collapsed: true,
        page_size: 0,
        ..config
    };
    changed.save(&provider).await.unwrap();
    let loaded = ConsoleConfig::load(&provider).await.unwrap();
    assert!(loaded.sidebar_collapsed);
    assert_eq!(loaded.page_size(), 1);
}

#[tokio::test]
async fn test_platform_settings_persist() {
    let provider = SettingsProvider::in_memory();
    let mut settings = PlatformSettings::load(&provider).await.unwrap();
    assert_eq!(settings.platform_name, "BizGrow360");

    settings.session_timeout_minutes = 120;
    settings.save(&provider).await.unwrap();
    let loaded = PlatformSettings::load(&provider).await.unwrap();
    assert_eq!(loaded.session_timeout_minutes, 120);
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let provider = SettingsProvider::in_memory();
    let mut config = ConsoleConfig::default();
    config.tick_rate_ms = 1000;
    provider.store(&config).await.unwrap();
    assert_eq!(provider.load::<ConsoleConfig>().await.unwrap().tick_rate_ms, 1000);

    assert!(provider.reset::<ConsoleConfig>().await.unwrap());
    assert_eq!(provider.load::<ConsoleConfig>().await.unwrap(), ConsoleConfig::default());
}

#[tokio::test]
async fn test_decode_error_names_the_key() {
    let provider = SettingsProvider::in_memory();
    provider.set(PlatformSettings::KEY, &1u8).await.unwrap();
    match PlatformSettings::load(&provider).await {
        Err(SettingsError::Decode { key, .. }) => assert_eq!(key, "platform.settings"),
        other => panic!("expected decode error, got {:?}", other),
    }
}
