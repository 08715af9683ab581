use bytes::{Bytes, BytesMut};

/// Accumulates the byte stream of one file part into a single contiguous
/// buffer, entirely in memory. Chunks are kept in arrival order and
/// concatenated on finalization; total length is unknown until the stream
/// ends.
#[derive(Debug, Default)]
pub struct BufferCollector {
    chunks: Vec<Bytes>,
    total_len: usize,
}

impl BufferCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: Bytes) {
        self.total_len += chunk.len();
        self.chunks.push(chunk);
    }

    pub fn len(&self) -> usize {
        self.total_len
    }

    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Freezes the accumulation into one immutable buffer containing every
    /// collected byte in arrival order.
    pub fn finish(self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.total_len);
        for chunk in &self.chunks {
            buffer.extend_from_slice(chunk);
        }
        buffer.freeze()
    }
}
