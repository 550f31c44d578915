use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use area_split_core::GenerationConfig;

/// Reads a TOML config, fields left out keep their defaults. No path means all defaults.
pub fn load(path: Option<&Path>) -> Result<GenerationConfig> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Could not parse config {}", path.display()))?
        }
        None => GenerationConfig::default(),
    };

    config.validate().context("Config cannot produce any grid")?;
    log::debug!("config: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use area_split_core::GridSize;

    #[test]
    fn toml_overrides_only_given_fields() {
        let config: GenerationConfig = toml::from_str(
            r#"
            max_region = 15

            [size]
            width = 6
            height = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.size, GridSize::new(6, 6));
        assert_eq!(config.min_region, 7);
        assert_eq!(config.max_region, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load(None).unwrap(), GenerationConfig::default());
    }
}
