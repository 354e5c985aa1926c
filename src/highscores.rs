//! High score persistence
//!
//! A single integer in a plain text file. Storage problems are never fatal
//! to gameplay: a missing or corrupt file reads as 0, and write failures
//! are logged and swallowed.

use std::path::Path;

/// Default high score file name
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// Load the persisted high score, defaulting to 0 on any failure
pub fn load_highscore(path: &Path) -> u64 {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return 0;
            }
            match trimmed.parse() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!("Corrupt high score file {}, using 0", path.display());
                    0
                }
            }
        }
        Err(_) => 0,
    }
}

/// Persist the high score, best-effort
pub fn save_highscore(path: &Path, score: u64) {
    if let Err(e) = std::fs::write(path, score.to_string()) {
        log::warn!("Failed to save high score: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nova_highscore_{tag}_{}.txt", std::process::id()))
    }

    #[test]
    fn test_roundtrip() {
        let path = temp_path("roundtrip");
        for score in [0u64, 1, 4250, u64::MAX] {
            save_highscore(&path, score);
            assert_eq!(load_highscore(&path), score);
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_reads_zero() {
        assert_eq!(load_highscore(Path::new("/nonexistent/highscore.txt")), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(load_highscore(&path), 0);

        std::fs::write(&path, "").unwrap();
        assert_eq!(load_highscore(&path), 0);

        std::fs::write(&path, "  1234\n").unwrap();
        assert_eq!(load_highscore(&path), 1234);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_failure_is_silent() {
        // Unwritable path; must not panic
        save_highscore(Path::new("/nonexistent/dir/highscore.txt"), 99);
    }
}
