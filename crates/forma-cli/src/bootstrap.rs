use std::path::Path;

use anyhow::Context;
use forma_config::FormaConfig;

use crate::cli::OutputFormat;

/// Load `.env`, then the layered config, then an explicit `--config` file.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<FormaConfig> {
    load_dotenv()?;

    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file '{}' does not exist", path.display());
            }
            FormaConfig::load_with_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => FormaConfig::load().context("failed to load forma configuration"),
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

/// Output format from `general.default_format`. The config layer already
/// rejects unknown spellings, so this only falls back on a programming error.
pub fn default_format(config: &FormaConfig) -> OutputFormat {
    OutputFormat::from_config(&config.general.default_format).unwrap_or_else(|| {
        tracing::warn!(
            format = %config.general.default_format,
            "unrecognized default format; using json"
        );
        OutputFormat::Json
    })
}

#[cfg(test)]
mod tests {
    use forma_config::{FormaConfig, GeneralConfig};

    use super::default_format;
    use crate::cli::OutputFormat;

    #[test]
    fn default_format_follows_config() {
        let mut config = FormaConfig::default();
        assert_eq!(default_format(&config), OutputFormat::Json);

        config.general = GeneralConfig {
            default_format: "table".into(),
        };
        assert_eq!(default_format(&config), OutputFormat::Table);
    }
}
