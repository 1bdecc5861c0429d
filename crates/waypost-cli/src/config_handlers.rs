//! Handler functions for config CLI commands.
//!
//! Implements the generic config subcommands (`path`, `get`, `set`,
//! `init`) parameterized over any type implementing
//! [`ConfigManager`](waypost_core::ConfigManager), plus the TOML
//! dotted-key helpers they use.

use anyhow::{anyhow, Result};
use waypost_core::{ConfigManager, WaypostConfig};

use crate::cli::ConfigAction;

/// Handle a config subcommand using [`WaypostConfig`].
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<WaypostConfig>(config_path),
        ConfigAction::Get { key } => cmd_config_get::<WaypostConfig>(config_path, &key),
        ConfigAction::Set { key, value } => {
            cmd_config_set::<WaypostConfig>(config_path, &key, &value)
        }
        ConfigAction::Init { force } => cmd_config_init::<WaypostConfig>(config_path, force),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| anyhow!("could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist — run `{} config init` to create it)",
            C::project_name()
        );
    }
    Ok(())
}

/// Get a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config)?;
    let found = get_nested_value(&value, key)
        .ok_or_else(|| anyhow!("key '{key}' not found in configuration"))?;
    println!("{}", format_toml_value(found));
    Ok(())
}

/// Set a configuration value by dotted key in the config file.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| anyhow!("could not determine config directory"))?;
    if !path.exists() {
        return Err(anyhow!(
            "config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        ));
    }

    let content = std::fs::read_to_string(&path)?;
    let mut doc: toml::Value = toml::from_str(&content)?;
    set_nested_value(&mut doc, key, parse_value(value))?;
    std::fs::write(&path, toml::to_string_pretty(&doc)?)?;
    println!("{key} = {value}");
    Ok(())
}

/// Write the default configuration file.
pub fn cmd_config_init<C: ConfigManager>(config_path: Option<&str>, force: bool) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| anyhow!("could not determine config directory"))?;
    if path.exists() && !force {
        return Err(anyhow!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, C::default_toml()?)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Walk a TOML document by dotted key.
fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

/// Set a value in a TOML document by dotted key, creating intermediate
/// tables as needed.
fn set_nested_value(doc: &mut toml::Value, key: &str, new: toml::Value) -> Result<()> {
    let mut segments = key.split('.').peekable();
    let mut current = doc;
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            return Err(anyhow!("invalid dotted key '{key}'"));
        }
        let table = current
            .as_table_mut()
            .ok_or_else(|| anyhow!("'{segment}' in '{key}' is not a table"))?;
        if segments.peek().is_none() {
            table.insert(segment.to_string(), new);
            return Ok(());
        }
        current = table
            .entry(segment.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }
    Err(anyhow!("empty key"))
}

/// Interpret a CLI string as the closest TOML value.
fn parse_value(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(raw.to_string())
}

/// Render a TOML value for `config get` output.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nested_value() {
        let doc: toml::Value = toml::from_str("[api]\nbase_url = \"https://x\"").unwrap();
        let found = get_nested_value(&doc, "api.base_url").unwrap();
        assert_eq!(found.as_str(), Some("https://x"));
        assert!(get_nested_value(&doc, "api.missing").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_tables() {
        let mut doc: toml::Value = toml::from_str("").unwrap();
        set_nested_value(&mut doc, "media.upload_url", parse_value("https://y")).unwrap();
        assert_eq!(
            get_nested_value(&doc, "media.upload_url").unwrap().as_str(),
            Some("https://y")
        );
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("1.5"), toml::Value::Float(1.5));
        assert_eq!(
            parse_value("hello"),
            toml::Value::String("hello".to_string())
        );
    }

    #[test]
    fn test_format_toml_value_unquotes_strings() {
        assert_eq!(format_toml_value(&toml::Value::String("x".into())), "x");
        assert_eq!(format_toml_value(&toml::Value::Integer(3)), "3");
    }

    #[test]
    fn test_config_init_set_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        cmd_config_init::<WaypostConfig>(Some(path_str), false).unwrap();
        assert!(path.exists());

        // A second init without --force refuses to overwrite.
        assert!(cmd_config_init::<WaypostConfig>(Some(path_str), false).is_err());

        cmd_config_set::<WaypostConfig>(Some(path_str), "api.base_url", "https://abl.example.com")
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let config = WaypostConfig::from_toml(&content).unwrap();
        assert_eq!(config.api.base_url, "https://abl.example.com");
    }
}
