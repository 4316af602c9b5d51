use anyhow::Result;
use once_cell::sync::OnceCell;
use platesight_client::{resolve_api_base, Config, HttpTransport, PredictionService};
use std::path::PathBuf;

/// Composition root for one invocation.
///
/// Holds the command-line overrides and lazily loads the config file once;
/// everything downstream receives explicit values from here instead of
/// reading environment or globals itself.
pub struct ExecutionContext {
    api_url: Option<String>,
    config_path: Option<PathBuf>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(api_url: Option<String>, config_path: Option<String>) -> Self {
        Self {
            api_url,
            config_path: config_path.map(|p| expand_tilde(&p)),
            config: OnceCell::new(),
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config = match &self.config_path {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            Ok(config)
        })
    }

    pub fn api_base(&self) -> Result<String> {
        let config = self.config()?;
        Ok(resolve_api_base(self.api_url.as_deref(), config)?)
    }

    pub fn service(&self) -> Result<PredictionService<HttpTransport>> {
        let api_base = self.api_base()?;
        Ok(PredictionService::new(HttpTransport::new(api_base)))
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = \"https://models.example.com\"\n").unwrap();

        let ctx = ExecutionContext::new(None, Some(path.to_string_lossy().into_owned()));
        let config = ctx.config().unwrap();
        assert_eq!(config.api_base.as_deref(), Some("https://models.example.com"));
    }

    #[test]
    fn api_url_flag_overrides_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = \"https://configured.example.com\"\n").unwrap();

        let ctx = ExecutionContext::new(
            Some("https://flag.example.com".to_string()),
            Some(path.to_string_lossy().into_owned()),
        );
        assert_eq!(ctx.api_base().unwrap(), "https://flag.example.com");
    }
}
