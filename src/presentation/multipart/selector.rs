use super::{DecodedForm, FilePart};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileSelectionError {
    #[error("No PDF file found")]
    NoFileProvided,
    #[error("Multiple CV files are not supported")]
    MultipleFilesNotSupported,
    #[error("No PDF file buffer found")]
    EmptyFileBuffer,
}

/// Selects the single document part registered under `field_name`. The
/// endpoint intentionally accepts exactly one document: none or several are
/// rejected, as is a part whose stream produced no bytes.
pub fn select_single_file<'a>(
    form: &'a DecodedForm,
    field_name: &str,
) -> Result<&'a FilePart, FileSelectionError> {
    let parts = form
        .files
        .get(field_name)
        .ok_or(FileSelectionError::NoFileProvided)?;

    match parts.as_slice() {
        [] => Err(FileSelectionError::NoFileProvided),
        [part] => {
            if part.data.is_empty() {
                Err(FileSelectionError::EmptyFileBuffer)
            } else {
                Ok(part)
            }
        }
        _ => Err(FileSelectionError::MultipleFilesNotSupported),
    }
}
