//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    let mut config = store.load().await?;

    match key {
        "notify" => {
            config.notify = Some(parse_bool(value).ok_or_else(|| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        "volume" => {
            config.volume = Some(parse_volume(value).ok_or_else(|| {
                ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a number between 0.0 and 1.0".to_string(),
                }
            })?)
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    let config = store.load().await?;
    let value = match key {
        "notify" => config.notify.map(|v| v.to_string()),
        "volume" => config.volume.map(|v| v.to_string()),
        _ => unreachable!(),
    };

    presenter.key_value(key, value.as_deref().unwrap_or("(not set)"));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "notify",
        &config
            .notify
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "volume",
        &config
            .volume
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.key_value("path", &store.path().display().to_string());
    Ok(())
}

fn unknown_key_error(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_volume(value: &str) -> Option<f32> {
    let volume: f32 = value.parse().ok()?;
    (0.0..=1.0).contains(&volume).then_some(volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_true_false() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn parse_volume_accepts_unit_range() {
        assert_eq!(parse_volume("0.5"), Some(0.5));
        assert_eq!(parse_volume("0"), Some(0.0));
        assert_eq!(parse_volume("1"), Some(1.0));
    }

    #[test]
    fn parse_volume_rejects_out_of_range() {
        assert_eq!(parse_volume("1.5"), None);
        assert_eq!(parse_volume("-0.1"), None);
        assert_eq!(parse_volume("loud"), None);
    }

    #[test]
    fn unknown_key_error_lists_valid_keys() {
        let err = unknown_key_error("bogus");
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("notify"));
        assert!(msg.contains("volume"));
    }
}
