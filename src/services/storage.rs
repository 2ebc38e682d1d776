//! Local file storage for resumes and company logos.
//!
//! DESIGN
//! ======
//! Files land under `UPLOAD_DIR/{bucket}/{uuid}-{sanitized name}` and are
//! served read-only at `/uploads`. The random prefix keeps names unique, so
//! writes never overwrite an earlier upload.

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

/// Public URL prefix the router serves `UPLOAD_DIR` under.
pub const PUBLIC_PREFIX: &str = "/uploads";

const MAX_NAME_LEN: usize = 100;
const MAX_EXT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Resumes,
    CompanyLogos,
}

impl Bucket {
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Resumes => "resumes",
            Self::CompanyLogos => "company-logos",
        }
    }

    #[must_use]
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Resumes => &["pdf", "doc", "docx"],
            Self::CompanyLogos => &["png", "jpg", "jpeg"],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("missing file field: {0}")]
    MissingFile(&'static str),
    #[error("file type not allowed for {bucket}: {file_name}")]
    UnsupportedType { bucket: &'static str, file_name: String },
    #[error("empty file")]
    Empty,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lowercased extension of `file_name`, if any.
fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Reject files whose extension the bucket does not accept.
///
/// # Errors
///
/// `UnsupportedType` when the extension is missing or not allowed.
pub fn check_extension(bucket: Bucket, file_name: &str) -> Result<(), UploadError> {
    match extension(file_name) {
        Some(ext) if bucket.allowed_extensions().contains(&ext.as_str()) => Ok(()),
        _ => Err(UploadError::UnsupportedType { bucket: bucket.dir_name(), file_name: file_name.to_owned() }),
    }
}

/// Reduce a client-supplied file name to `[A-Za-z0-9._-]`, dropping any
/// directory part. Long names are cut in the stem so the extension survives.
#[must_use]
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        return "file".to_owned();
    }
    if trimmed.len() <= MAX_NAME_LEN {
        return trimmed.to_owned();
    }

    // Only ASCII remains, so byte offsets are char boundaries.
    match trimmed.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.len() <= MAX_EXT_LEN => {
            format!("{}.{ext}", &stem[..MAX_NAME_LEN - ext.len() - 1])
        }
        _ => trimmed[..MAX_NAME_LEN].to_owned(),
    }
}

/// Storage key relative to the upload root.
#[must_use]
pub fn object_key(bucket: Bucket, id: Uuid, file_name: &str) -> String {
    format!("{}/{id}-{}", bucket.dir_name(), sanitize_file_name(file_name))
}

/// Validate and write an upload, returning its public URL.
///
/// # Errors
///
/// Rejects empty files and disallowed extensions; propagates I/O failures.
pub async fn save(upload_dir: &Path, bucket: Bucket, file_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
    check_extension(bucket, file_name)?;
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }

    let key = object_key(bucket, Uuid::new_v4(), file_name);
    let path = upload_dir.join(&key);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;
    tracing::info!(bucket = bucket.dir_name(), %key, size = bytes.len(), "stored upload");

    Ok(format!("{PUBLIC_PREFIX}/{key}"))
}

/// Map a public `/uploads/...` URL back to its file under `upload_dir`.
/// Returns `None` for foreign URLs and for keys that would leave the root.
#[must_use]
pub fn local_path(upload_dir: &Path, public_url: &str) -> Option<PathBuf> {
    let key = public_url.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
    let key = Path::new(key);
    if key.as_os_str().is_empty() || !key.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(upload_dir.join(key))
}

/// Delete a stored upload after a later step rejected it. Failures are
/// logged, not returned.
pub async fn remove(upload_dir: &Path, public_url: &str) {
    let Some(path) = local_path(upload_dir, public_url) else {
        tracing::warn!(%public_url, "refusing to remove upload outside the upload root");
        return;
    };
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::info!(%public_url, "removed orphaned upload"),
        Err(e) => tracing::warn!(error = %e, %public_url, "orphaned upload removal failed"),
    }
}

/// Pass `result` through, deleting the upload at `public_url` when it is an
/// error. Wraps the insert that records a freshly saved file.
pub async fn discard_on_err<T, E>(upload_dir: &Path, public_url: &str, result: Result<T, E>) -> Result<T, E> {
    if result.is_err() {
        remove(upload_dir, public_url).await;
    }
    result
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
