//! Test utilities: RAII test environments and sample configurations.
//!
//! Everything created here lives in a temporary directory that is removed when
//! the [`TestEnvironment`] is dropped, even if the test panics.

use anyhow::Result;
use shared::{
    ClientConfig, Features, NavigationItem, Theme, ThemeColors, ThemeFonts, ThemeLogo,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

use super::file_cache::FileKeyValueStore;
use super::static_files::StaticConfigDirectory;

pub struct TestEnvironment {
    /// Kept alive so the directory is not removed until drop
    _temp_dir: TempDir,
    pub base_path: PathBuf,
    pub static_dir: StaticConfigDirectory,
    pub cache: FileKeyValueStore,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();

        let static_path = base_path.join("configs");
        std::fs::create_dir_all(&static_path)?;
        let static_dir = StaticConfigDirectory::new(&static_path);
        let cache = FileKeyValueStore::new(base_path.join("cache"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            base_path,
            static_dir,
            cache,
        })
    }

    /// Write `config` as `{clientId}.json` into the static directory
    pub async fn write_static_config(&self, config: &ClientConfig) -> Result<PathBuf> {
        let path = self
            .static_dir
            .directory()
            .join(format!("{}.json", config.client_id));
        tokio::fs::write(&path, serde_json::to_string_pretty(config)?).await?;
        Ok(path)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("HUB_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// A small but complete config for `client_id`
pub fn sample_config(client_id: &str, access_code: Option<&str>) -> ClientConfig {
    ClientConfig {
        client_id: client_id.to_string(),
        access_code: access_code.map(str::to_string),
        name: format!("Sample {}", client_id),
        description: None,
        version: Some("1.0.0".to_string()),
        expiry: None,
        industry: None,
        variation: None,
        theme: Theme {
            colors: ThemeColors {
                primary: "#2E7D32".to_string(),
                secondary: "#FFB300".to_string(),
                background: "#FFFFFF".to_string(),
                surface: "#F5F5F5".to_string(),
                text: "#212121".to_string(),
                text_secondary: "#757575".to_string(),
            },
            fonts: ThemeFonts::default(),
            logo: ThemeLogo::default(),
        },
        navigation: vec![NavigationItem {
            id: "home".to_string(),
            title: "Home".to_string(),
            icon: "home".to_string(),
            path: "/".to_string(),
        }],
        features: Features::default(),
        content: BTreeMap::new(),
        push_notifications: None,
        analytics: None,
    }
}

/// Directory holding the bundled configs that ship with the repository
pub fn bundled_configs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("configs")
}
