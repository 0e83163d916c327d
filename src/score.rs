use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the persisted high score.
///
/// Returns `Ok(0)` when the file does not exist yet (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_high_score() -> io::Result<u32> {
    load_from_path(&high_score_path())
}

/// Persists the high score, creating parent directories when needed.
pub fn save_high_score(score: u32) -> io::Result<()> {
    save_to_path(&high_score_path(), score)
}

fn load_from_path(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error),
    };

    serde_json::from_str::<HighScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

fn save_to_path(path: &Path, score: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = HighScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_from_path, save_to_path};

    #[test]
    fn high_score_round_trips_through_disk() {
        let path = unique_test_path("round_trip");

        save_to_path(&path, 42).expect("score save should succeed");
        let loaded = load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = unique_test_path("missing");

        let loaded = load_from_path(&path).expect("missing file should read as Ok(0)");

        assert_eq!(loaded, 0);
    }

    #[test]
    fn malformed_file_surfaces_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(load_from_path(&path).is_err());

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
