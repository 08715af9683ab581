mod mock_text_extractor;
mod pdf_text_adapter;

pub use mock_text_extractor::MockTextExtractor;
pub use pdf_text_adapter::PdfTextAdapter;
