use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{codec, error::AppError, profile::{self, Profile}};

/// Profiles file name in the user's home directory
const GLOBAL_PROFILES_FILE: &str = ".git_profiles.yaml";

/// Seed profile written by `generate`
const SEED_KEY: &str = "personal";
const SEED_NAME: &str = "Your Name";
const SEED_EMAIL: &str = "your.email@example.com";

/// Gets the default profiles file path in the user's home directory
pub fn default_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir()
        .ok_or_else(|| AppError::InvalidInput("failed to find the home directory".to_string()))?;
    Ok(home_dir.join(GLOBAL_PROFILES_FILE))
}

/// Profile store over a single backing file.
///
/// Every operation reads the file fresh and mutating operations rewrite it
/// whole; nothing is cached between calls. Concurrent invocations race with
/// last-writer-wins and no detection, which is an accepted limitation of
/// the single-user design.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads profiles from the backing file, treating an absent file as an
    /// empty store
    pub fn load(&self) -> Result<Vec<Profile>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file_contents: String = fs::read_to_string(&self.path)?;
        Ok(codec::parse(&file_contents))
    }

    /// Adds a profile, overwriting any existing entry with the same key
    pub fn add(&self, key: &str, name: &str, email: &str) -> Result<(), AppError> {
        require_non_blank(key, "profile key")?;
        require_non_blank(name, "name")?;
        require_non_blank(email, "email")?;

        let mut profiles: Vec<Profile> = self.load()?;
        profile::upsert(&mut profiles, Profile::new(key, name, email));
        self.save(&profiles)
    }

    /// Replaces the record under `key`, failing without touching the file
    /// when the key is absent
    pub fn update(&self, key: &str, name: &str, email: &str) -> Result<(), AppError> {
        let mut profiles: Vec<Profile> = self.load()?;
        let Some(existing) = profiles.iter_mut().find(|existing| existing.key == key) else {
            return Err(AppError::ProfileNotFound(key.to_string()));
        };
        existing.name = name.to_string();
        existing.email = email.to_string();
        self.save(&profiles)
    }

    /// Deletes the record under `key`, failing without touching the file
    /// when the key is absent
    pub fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut profiles: Vec<Profile> = self.load()?;
        let initial_len: usize = profiles.len();
        profiles.retain(|existing| existing.key != key);
        if profiles.len() == initial_len {
            return Err(AppError::ProfileNotFound(key.to_string()));
        }
        self.save(&profiles)
    }

    /// Returns the raw file contents verbatim, without re-rendering
    pub fn view(&self) -> Result<String, AppError> {
        if !self.path.exists() {
            return Err(AppError::StoreNotFound(self.path.clone()));
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Writes the seed profile for a first run. Never overwrites an
    /// existing file.
    pub fn generate(&self) -> Result<&Path, AppError> {
        if self.path.exists() {
            return Err(AppError::StoreExists(self.path.clone()));
        }
        let seed: Vec<Profile> = vec![Profile::new(SEED_KEY, SEED_NAME, SEED_EMAIL)];
        self.save(&seed)?;
        Ok(&self.path)
    }

    fn save(&self, profiles: &[Profile]) -> Result<(), AppError> {
        fs::write(&self.path, codec::serialize(profiles))?;
        Ok(())
    }
}

/// Rejects empty or whitespace-only required fields before any file access
fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(())
}
