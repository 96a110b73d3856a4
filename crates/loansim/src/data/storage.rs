//! File storage for preferences and the in-progress session
//!
//! Directory structure:
//! ~/.loansim/
//!   preferences.yaml     # Theme preference
//!   session.json         # Wizard data, removed on clean exit
//!   loansim.log          # Application log

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::{SimulationSession, Theme};

/// Preferences stored in preferences.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the application's data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.loansim/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".loansim")
    }

    fn preferences_path(&self) -> PathBuf {
        self.root.join("preferences.yaml")
    }

    fn session_path(&self) -> PathBuf {
        self.root.join("session.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("loansim.log")
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load preferences, or defaults when the file does not exist yet
    pub fn load_preferences(&self) -> Result<Preferences, StorageError> {
        let path = self.preferences_path();
        if !path.exists() {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read preferences: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse preferences: {}", e)))
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(preferences).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(self.preferences_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write preferences: {}", e)))
    }

    /// Load the saved session; `None` when there is nothing to resume.
    pub fn load_session(&self) -> Result<Option<SimulationSession>, StorageError> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read session: {}", e)))?;

        let session: SimulationSession = serde_json::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse session: {}", e)))?;

        Ok((!session.is_empty()).then_some(session))
    }

    pub fn save_session(&self, session: &SimulationSession) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let json = serde_json::to_string(session)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize session: {}", e)))?;

        fs::write(self.session_path(), json)
            .map_err(|e| StorageError::Io(format!("Failed to write session: {}", e)))
    }

    pub fn clear_session(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to remove session: {}", e))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoanData;
    use jiff::civil::date;
    use tempfile::TempDir;

    fn data_dir(temp_dir: &TempDir) -> DataDirectory {
        DataDirectory::new(temp_dir.path().join(".loansim"))
    }

    #[test]
    fn test_data_directory_init() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir(&temp_dir);

        assert!(!data_dir.exists());
        data_dir.init().unwrap();
        assert!(data_dir.exists());
    }

    #[test]
    fn test_missing_files_load_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir(&temp_dir);

        assert_eq!(data_dir.load_preferences().unwrap(), Preferences::default());
        assert!(data_dir.load_session().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir(&temp_dir);

        let preferences = Preferences {
            theme: Some(Theme::Dark),
        };
        data_dir.save_preferences(&preferences).unwrap();

        let content = fs::read_to_string(data_dir.preferences_path()).unwrap();
        assert!(content.contains("dark"));
        assert_eq!(data_dir.load_preferences().unwrap(), preferences);
    }

    #[test]
    fn test_save_load_and_clear_session() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir(&temp_dir);

        let session = SimulationSession {
            birth_date: Some(date(1990, 5, 10)),
            loan_data: LoanData {
                amount: Some("R$ 20.000,00".to_string()),
                term: Some(36),
            },
        };
        data_dir.save_session(&session).unwrap();
        assert_eq!(data_dir.load_session().unwrap(), Some(session));

        data_dir.clear_session().unwrap();
        assert!(data_dir.load_session().unwrap().is_none());
        // Clearing twice is fine
        data_dir.clear_session().unwrap();
    }

    #[test]
    fn test_corrupt_session_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = data_dir(&temp_dir);
        data_dir.init().unwrap();
        fs::write(data_dir.session_path(), "{not json").unwrap();

        assert!(matches!(
            data_dir.load_session(),
            Err(StorageError::Parse(_))
        ));
    }
}
