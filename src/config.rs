use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "data.json";
pub const STORAGE_PATH_ENV_VAR: &str = "MOVIE_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub storage_path: PathBuf,
}

impl CatalogConfig {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        CatalogConfig {
            storage_path: storage_path.into(),
        }
    }

    /// Picks the first of: explicit argument, `MOVIE_CATALOG_PATH`, `data.json`.
    pub fn resolve(arg: Option<String>, env_value: Option<String>) -> Self {
        let not_blank = |p: &String| !p.trim().is_empty();
        let path = arg
            .filter(not_blank)
            .or(env_value.filter(not_blank))
            .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string());
        CatalogConfig::new(path)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::new(DEFAULT_STORAGE_PATH)
    }
}
