use crate::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Where reelscout keeps its config (`~/.config/reelscout` on Linux)
#[derive(Debug, Clone)]
pub struct Directories {
    pub config: PathBuf,
    pub config_file: PathBuf,
}

impl Directories {
    /// # Errors
    ///
    /// Returns `Error::Config` if the system has no home directory to
    /// derive project directories from.
    pub fn new() -> Result<Self> {
        let project = ProjectDirs::from("", "", "reelscout")
            .ok_or_else(|| Error::Config("cannot determine project directories".into()))?;
        Ok(Self::with_base(project.config_dir().to_path_buf()))
    }

    #[must_use]
    pub fn with_base(config: PathBuf) -> Self {
        Self {
            config_file: config.join("config.json"),
            config,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_layout() {
        let dirs = Directories::with_base(PathBuf::from("/tmp/reelscout-test"));
        assert_eq!(
            dirs.config_file,
            PathBuf::from("/tmp/reelscout-test/config.json")
        );
        assert_eq!(dirs.config, PathBuf::from("/tmp/reelscout-test"));
    }
}
