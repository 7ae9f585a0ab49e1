use std::{
    io,
    path::{Path, PathBuf},
};

use crate::model::movie::Movie;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read movie data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("movie data in {path} is not a valid catalog: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize movie catalog: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write movie data to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whole-file JSON persistence for the catalog. Every call goes to disk; nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank file is an empty catalog.
    pub async fn load(&self) -> Result<Vec<Movie>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No movie data at {}, starting with an empty catalog",
                    self.path.display()
                );
                return Ok(vec![]);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            log::info!(
                "Movie data at {} is empty, starting with an empty catalog",
                self.path.display()
            );
            return Ok(vec![]);
        }

        let movies: Vec<Movie> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "Loaded {} movies from {}",
            movies.len(),
            self.path.display()
        );
        Ok(movies)
    }

    /// Overwrites the file with a single write. There is no temp file and no rename.
    pub async fn save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(movies).map_err(|source| StoreError::Serialize { source })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
