//! Multipart form reading shared by upload routes.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::StatusCode;

/// A file part held in memory until the handler stores it.
#[derive(Debug)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Text fields plus at most one file part.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub file: Option<FilePart>,
}

impl MultipartForm {
    /// Text value of `name`, or `""` when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_owned(), value.to_owned());
        self
    }
}

/// Read every part. `file_field` names the part kept as bytes; other parts
/// are read as text.
///
/// # Errors
///
/// `400` on malformed multipart, `413` when the body limit is exceeded.
pub async fn read_multipart(mut multipart: Multipart, file_field: &str) -> Result<MultipartForm, StatusCode> {
    let mut form = MultipartForm::default();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.status())? {
        let name = field.name().unwrap_or_default().to_owned();
        if name == file_field {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.map_err(|e| e.status())?;
            form.file = Some(FilePart { file_name, bytes: bytes.to_vec() });
        } else {
            let value = field.text().await.map_err(|e| e.status())?;
            form.fields.insert(name, value);
        }
    }
    Ok(form)
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
