mod buffer_collector;
mod decoder;
mod selector;

pub use buffer_collector::BufferCollector;
pub use decoder::{DecodedForm, FilePart, MultipartDecodeError, decode_form};
pub use selector::{FileSelectionError, select_single_file};
