use crate::cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use unsegen::input::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "MARMOT_CONFIG_FILE";

fn default_key_map() -> KeyMap {
    let mut key_map = KeyMap::new();

    key_map.insert(Key::Char('h'), Cmd::PrevMonth);
    key_map.insert(Key::Char('l'), Cmd::NextMonth);
    key_map.insert(Key::Left, Cmd::PrevMonth);
    key_map.insert(Key::Right, Cmd::NextMonth);
    key_map.insert(Key::Char('t'), Cmd::SelectToday);
    key_map.insert(Key::Char('a'), Cmd::OpenInsert);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

fn default_tick_rate_ms() -> u64 {
    500
}

fn default_today_char() -> char {
    '*'
}

fn default_event_char() -> char {
    '.'
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_today_char")]
    pub today_char: char,
    #[serde(default = "default_event_char")]
    pub event_char: char,
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: default_tick_rate_ms(),
            today_char: default_today_char(),
            event_char: default_event_char(),
            key_map: default_key_map(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn load(path: &Path) -> io::Result<Config> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

pub fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("marmot");
        config_dir.push("config.toml");
        locations.push(config_dir);
    }

    if let Some(mut home) = dirs::home_dir() {
        home.push(".marmot.toml");
        locations.push(home);
    }

    locations
}

/// Loads the config from `path` if given, otherwise from the first existing
/// candidate location. Falls back to the built-in defaults when no file is
/// found.
pub fn load_suitable_config(path: Option<&Path>) -> io::Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            log::info!("Using config file '{}'", location.display());
            return Config::load(&location);
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.today_char, '*');
        assert_eq!(config.key_map.get(&Key::Char('q')), Some(&Cmd::Exit));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("tick_rate_ms = 250").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.today_char, '*');
        assert_eq!(config.event_char, '.');
        assert_eq!(
            config.key_map.get(&Key::Char('a')),
            Some(&Cmd::OpenInsert)
        );
    }

    #[test]
    fn marker_chars_are_configurable() {
        let config: Config = toml::from_str("today_char = \"@\"\nevent_char = \"+\"").unwrap();
        assert_eq!(config.today_char, '@');
        assert_eq!(config.event_char, '+');
    }
}
