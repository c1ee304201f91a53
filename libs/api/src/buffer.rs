use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use crate::error::BufferError;

pub type SliceFuture<'a> = Pin<Box<dyn Future<Output = Result<Bytes, BufferError>> + Send + 'a>>;

/// Random-access view over a byte resource of known length.
///
/// - `byte_length()` — fixed for the lifetime of the buffer.
/// - `slice(start, end)` — bytes `[start, end)`, or `[start, byte_length)`
///   when `end` is `None`. Each call is independent; implementations do not
///   cache or coalesce.
pub trait AsyncBuffer: Send + Sync {
    fn byte_length(&self) -> u64;
    fn slice(&self, start: u64, end: Option<u64>) -> SliceFuture<'_>;
}

/// Check `start ≤ end ≤ byte_length` and resolve the exclusive end.
pub fn check_slice(start: u64, end: Option<u64>, byte_length: u64) -> Result<u64, BufferError> {
    let resolved = end.unwrap_or(byte_length);
    if start > resolved || resolved > byte_length {
        return Err(BufferError::OutOfBounds { start, end, byte_length });
    }
    Ok(resolved)
}

/// [`AsyncBuffer`] over bytes already in memory. Slices are zero-copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Bytes,
}

impl MemoryBuffer {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }
}

impl AsyncBuffer for MemoryBuffer {
    fn byte_length(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn slice(&self, start: u64, end: Option<u64>) -> SliceFuture<'_> {
        let result = check_slice(start, end, self.byte_length())
            .map(|end| self.bytes.slice(start as usize..end as usize));
        Box::pin(async move { result })
    }
}
