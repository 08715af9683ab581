use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use super::BufferCollector;

/// One uploaded file part: declared metadata plus the fully buffered
/// content. File bytes never touch disk.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// The decoded multipart body: text fields and file parts, each keyed by
/// field name and allowing repeated names.
#[derive(Debug, Default)]
pub struct DecodedForm {
    pub fields: HashMap<String, Vec<String>>,
    pub files: HashMap<String, Vec<FilePart>>,
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartDecodeError {
    #[error("malformed multipart request: {0}")]
    Malformed(String),
}

/// Drains the multipart stream into a `DecodedForm`. Parts carrying a
/// filename are treated as file uploads and buffered chunk by chunk; all
/// other parts are read as UTF-8 text fields. Framing or stream errors
/// abort decoding, never yielding a partial buffer.
pub async fn decode_form(multipart: &mut Multipart) -> Result<DecodedForm, MultipartDecodeError> {
    let mut form = DecodedForm::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| MultipartDecodeError::Malformed(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);

            let mut collector = BufferCollector::new();
            while let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| MultipartDecodeError::Malformed(e.to_string()))?
            {
                collector.push(chunk);
            }

            tracing::debug!(
                field = %name,
                file_name = ?file_name,
                bytes = collector.len(),
                "File part buffered in memory"
            );

            form.files.entry(name).or_default().push(FilePart {
                file_name,
                content_type,
                data: collector.finish(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| MultipartDecodeError::Malformed(e.to_string()))?;
            form.fields.entry(name).or_default().push(value);
        }
    }

    Ok(form)
}
