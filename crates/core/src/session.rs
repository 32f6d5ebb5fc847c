// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Remembers the last player between runs.
use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use log::info;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A player session stored in a file.
#[derive(Debug, Clone)]
pub struct Session {
    path: PathBuf,
}

impl Session {
    /// The session file name.
    pub const FILE_NAME: &'static str = "session";

    /// Creates a session stored at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a session in the platform config directory.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "vpoker")
            .ok_or_else(|| anyhow!("Cannot find the user config directory"))?;
        Ok(Self::new(dirs.config_dir().join(Self::FILE_NAME)))
    }

    /// The session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the last player name, returns None if there is no session.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => {
                let name = s.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Saves the player name.
    pub fn save(&self, name: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(&self.path, name.trim())?;
        info!("Saved session for {name} to {}", self.path.display());
        Ok(())
    }

    /// Removes the saved player.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
