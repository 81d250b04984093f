use std::path::PathBuf;

use thiserror::Error;

use crate::classify::Stage;

/// Flag values as they arrive from the command line, before validation
#[derive(Debug, Clone)]
pub struct RawArgs {
    pub filename: PathBuf,
    pub phone: String,
    pub stage: i64,
    pub dbwrite: i64,
}

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("stage accepts only the values 1 or 2, got {0}")]
    InvalidStage(i64),
    #[error("phone must contain exactly 11 digits, got {digits} in {raw:?}")]
    InvalidPhone { raw: String, digits: usize },
    #[error("file {0:?} does not exist")]
    MissingFile(PathBuf),
}

/// Validated invocation parameters for one run
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Path to the WAV recording, confirmed to exist at validation time
    pub filename: PathBuf,
    /// Phone number normalized to exactly 11 digits
    pub phone: String,
    /// Which classification pass to run
    pub stage: Stage,
    /// Whether to insert the result row into the database
    pub dbwrite: bool,
}

impl Invocation {
    /// Validate raw flags into normalized parameters
    pub fn validate(raw: RawArgs) -> Result<Self, InvocationError> {
        let stage = match raw.stage {
            1 => Stage::Presence,
            2 => Stage::Sentiment,
            other => return Err(InvocationError::InvalidStage(other)),
        };

        let phone = normalize_phone(&raw.phone);
        if phone.len() != 11 {
            return Err(InvocationError::InvalidPhone {
                raw: raw.phone,
                digits: phone.len(),
            });
        }

        if !raw.filename.exists() {
            return Err(InvocationError::MissingFile(raw.filename));
        }

        Ok(Self {
            filename: raw.filename,
            phone,
            stage,
            dbwrite: raw.dbwrite != 0,
        })
    }
}

/// Strip every non-digit character from a phone string
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(filename: PathBuf, phone: &str, stage: i64) -> RawArgs {
        RawArgs {
            filename,
            phone: phone.to_string(),
            stage,
            dbwrite: 0,
        }
    }

    #[test]
    fn test_normalize_phone_strips_formatting() {
        assert_eq!(normalize_phone("+7 (999) 123-45-67"), "79991234567");
        assert_eq!(normalize_phone("89991234567"), "89991234567");
        assert_eq!(normalize_phone("123"), "123");
    }

    #[test]
    fn test_validate_accepts_formatted_phone() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let invocation =
            Invocation::validate(raw(file.path().to_path_buf(), "+7 (999) 123-45-67", 1)).unwrap();

        assert_eq!(invocation.phone, "79991234567");
        assert_eq!(invocation.stage, Stage::Presence);
        assert!(!invocation.dbwrite);
    }

    #[test]
    fn test_validate_rejects_short_phone() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Invocation::validate(raw(file.path().to_path_buf(), "123", 1)).unwrap_err();
        assert!(matches!(err, InvocationError::InvalidPhone { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_stage() {
        let file = tempfile::NamedTempFile::new().unwrap();
        for stage in [0, 3, -1] {
            let err = Invocation::validate(raw(file.path().to_path_buf(), "89991234567", stage))
                .unwrap_err();
            assert!(matches!(err, InvocationError::InvalidStage(s) if s == stage));
        }
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.wav");
        let err = Invocation::validate(raw(missing, "89991234567", 1)).unwrap_err();
        assert!(matches!(err, InvocationError::MissingFile(_)));
    }

    #[test]
    fn test_validate_maps_dbwrite_flag() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut args = raw(file.path().to_path_buf(), "89991234567", 2);
        args.dbwrite = 1;
        let invocation = Invocation::validate(args).unwrap();
        assert_eq!(invocation.stage, Stage::Sentiment);
        assert!(invocation.dbwrite);
    }
}
