//! Upload pre-checks: MIME prefix and size limit.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

pub const DEFAULT_MAX_FILE_MB: u64 = 10;

/// The parts of a selected file that validation looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub mime_type: String,
    pub size: u64,
}

#[cfg(feature = "csr")]
impl From<&web_sys::File> for FileInfo {
    fn from(file: &web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        Self { mime_type: file.type_(), size }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    #[error("No file selected")]
    NoFile,
    #[error("Invalid file type. Allowed types: {allowed}")]
    InvalidType { allowed: String },
    #[error("File too large. Maximum size: {max_mb}MB")]
    TooLarge { max_mb: u64 },
}

/// Accept `file` when its MIME type starts with one of `allowed_types`
/// (case-insensitive) and it is no larger than `max_mb` mebibytes.
pub fn validate_file(file: Option<&FileInfo>, allowed_types: &[&str], max_mb: u64) -> Result<(), FileError> {
    let file = file.ok_or(FileError::NoFile)?;

    let mime = file.mime_type.to_lowercase();
    if !allowed_types.iter().any(|prefix| mime.starts_with(prefix)) {
        return Err(FileError::InvalidType { allowed: allowed_types.join(", ") });
    }

    if file.size > max_mb.saturating_mul(1024 * 1024) {
        return Err(FileError::TooLarge { max_mb });
    }
    Ok(())
}
