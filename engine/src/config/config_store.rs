use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{ConfigFormat, ConfigSource, FileConfigSource, Validate, YamlConfigFormat};

/// Loads a config once and caches it. A missing source yields
/// `TConfig::default()`, which is not cached so a later save still wins.
pub struct ConfigStore<TSource, TConfig, TFormat = YamlConfigFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    source: TSource,
    format: TFormat,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigStore<FileConfigSource, TConfig, YamlConfigFormat>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigSource::new(path), YamlConfigFormat)
    }
}

impl<TSource, TConfig, TFormat> ConfigStore<TSource, TConfig, TFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    pub fn new(source: TSource, format: TFormat) -> Self {
        Self {
            source,
            format,
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config = self.format.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.format.serialize(config)?;
        self.source.write(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        games: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { games: 5 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.games == 0 {
                return Err("games must be positive".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemorySource {
        content: Mutex<Option<String>>,
    }

    impl ConfigSource for MemorySource {
        fn read(&self) -> Result<Option<String>, String> {
            Ok(self.content.lock().unwrap().clone())
        }

        fn write(&self, content: &str) -> Result<(), String> {
            *self.content.lock().unwrap() = Some(content.to_string());
            Ok(())
        }
    }

    fn store(content: Option<&str>) -> ConfigStore<MemorySource, SampleConfig> {
        let source = MemorySource {
            content: Mutex::new(content.map(str::to_string)),
        };
        ConfigStore::new(source, YamlConfigFormat)
    }

    #[test]
    fn test_missing_source_gives_default() {
        assert_eq!(store(None).load().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_load_parses_yaml() {
        assert_eq!(store(Some("games: 12\n")).load().unwrap(), SampleConfig { games: 12 });
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let err = store(Some("games: 0\n")).load().unwrap_err();
        assert!(err.starts_with("Config validation error"), "{}", err);
        assert!(store(Some("games: [")).load().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let store = store(None);
        store.save(&SampleConfig { games: 3 }).unwrap();
        assert_eq!(store.load().unwrap(), SampleConfig { games: 3 });
        assert!(store.save(&SampleConfig { games: 0 }).is_err());
        assert_eq!(store.load().unwrap(), SampleConfig { games: 3 });
    }
}
