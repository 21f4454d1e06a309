// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising configuration and localization together.

use iced_portal::config::{self, Config};
use iced_portal::i18n::fluent::I18n;
use iced_portal::loader::{percent_label, LoadState};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("ru".to_string()),
        start_url: Some("https://intranet.local/portal".to_string()),
        particle_count: Some(16),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    assert_eq!(loaded_config.language, Some("ru".to_string()));

    let i18n = I18n::new(None, &loaded_config);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_eq!(i18n.tr("offline-message"), "Нет соединения");
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        language: Some("ru".to_string()),
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("offline-message"), "No connection");
}

#[test]
fn progress_scenario_strings_match_per_locale() {
    let state = LoadState::Progressing(0.42);
    let percent = state.clamped_fraction().map(percent_label).unwrap();
    assert_eq!(percent, 42);

    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(
        en.tr_args("loading-label", &[("percent", percent.into())]),
        "Loading 42%"
    );

    let ru = I18n::new(Some("ru".to_string()), &Config::default());
    assert_eq!(
        ru.tr_args("loading-label", &[("percent", percent.into())]),
        "Загрузка 42%"
    );
}

#[test]
fn failure_scenario_strings_match_per_locale() {
    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    assert_eq!(
        en.tr_args("load-error", &[("message", "timeout".into())]),
        "Error: timeout"
    );

    let ru = I18n::new(Some("ru".to_string()), &Config::default());
    assert_eq!(
        ru.tr_args("load-error", &[("message", "timeout".into())]),
        "Ошибка: timeout"
    );
}

#[test]
fn both_bundled_locales_are_available() {
    let i18n = I18n::default();
    let locales: Vec<String> = i18n
        .available_locales
        .iter()
        .map(ToString::to_string)
        .collect();
    assert!(locales.contains(&"en-US".to_string()));
    assert!(locales.contains(&"ru".to_string()));
}
