use bytes::Bytes;

use cvcheck::presentation::multipart::{
    BufferCollector, DecodedForm, FilePart, FileSelectionError, select_single_file,
};

fn file_part(data: &[u8]) -> FilePart {
    FilePart {
        file_name: Some("cv.pdf".to_string()),
        content_type: Some("application/pdf".to_string()),
        data: Bytes::copy_from_slice(data),
    }
}

#[test]
fn given_chunked_stream_when_collecting_then_buffer_equals_concatenation() {
    let chunks: Vec<&[u8]> = vec![b"first ", b"second ", b"", b"third"];
    let mut expected = Vec::new();
    let mut collector = BufferCollector::new();

    for chunk in &chunks {
        expected.extend_from_slice(chunk);
        collector.push(Bytes::copy_from_slice(chunk));
    }

    assert_eq!(collector.len(), expected.len());
    assert_eq!(collector.finish().as_ref(), expected.as_slice());
}

#[test]
fn given_single_byte_chunks_when_collecting_then_order_is_preserved() {
    let payload = b"multipart byte ordering";
    let mut collector = BufferCollector::new();

    for byte in payload {
        collector.push(Bytes::copy_from_slice(&[*byte]));
    }

    assert_eq!(collector.finish().as_ref(), payload.as_slice());
}

#[test]
fn given_no_chunks_when_collecting_then_buffer_is_empty() {
    let collector = BufferCollector::new();

    assert!(collector.is_empty());
    assert!(collector.finish().is_empty());
}

#[test]
fn given_single_file_part_when_selecting_then_part_is_returned() {
    let mut form = DecodedForm::default();
    form.files.insert("cv".to_string(), vec![file_part(b"%PDF-")]);

    let part = select_single_file(&form, "cv").unwrap();

    assert_eq!(part.data.as_ref(), b"%PDF-");
}

#[test]
fn given_missing_field_when_selecting_then_no_file_provided() {
    let form = DecodedForm::default();

    let result = select_single_file(&form, "cv");

    assert_eq!(result.unwrap_err(), FileSelectionError::NoFileProvided);
}

#[test]
fn given_two_parts_when_selecting_then_multiple_files_not_supported() {
    let mut form = DecodedForm::default();
    form.files.insert(
        "cv".to_string(),
        vec![file_part(b"one"), file_part(b"two")],
    );

    let result = select_single_file(&form, "cv");

    assert_eq!(
        result.unwrap_err(),
        FileSelectionError::MultipleFilesNotSupported
    );
}

#[test]
fn given_empty_buffer_when_selecting_then_empty_file_buffer() {
    let mut form = DecodedForm::default();
    form.files.insert("cv".to_string(), vec![file_part(b"")]);

    let result = select_single_file(&form, "cv");

    assert_eq!(result.unwrap_err(), FileSelectionError::EmptyFileBuffer);
}
