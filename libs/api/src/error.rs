/// Which request of the remote protocol failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Metadata-only probe used to discover the resource length.
    Head,
    /// Byte-range retrieval.
    Range,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Head => f.write_str("head"),
            RequestKind::Range => f.write_str("range"),
        }
    }
}

/// Error returned by [`AsyncBuffer`](crate::AsyncBuffer) operations.
///
/// Nothing here is retried by the buffer; callers decide based on the variant.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// Server answered with a non-success status. A failed probe names
    /// itself (`fetch head failed 404`); a failed range does not.
    #[error("fetch {}failed {status}", fetch_scope(.request))]
    Fetch { request: RequestKind, status: u16 },

    /// Probe succeeded but carried no `Content-Length`.
    #[error("missing content length")]
    LengthUnknown,

    #[error("invalid content length {0:?}")]
    InvalidLength(String),

    #[error("slice {start}..{} out of bounds for length {byte_length}", fmt_end(.end))]
    OutOfBounds { start: u64, end: Option<u64>, byte_length: u64 },

    /// Buffer options rejected before any request was made.
    #[error("config: {0}")]
    Config(String),

    /// Request never produced a response, or the body could not be read.
    #[error("transport ({url}): {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn fetch_scope(request: &RequestKind) -> &'static str {
    match request {
        RequestKind::Head => "head ",
        RequestKind::Range => "",
    }
}

fn fmt_end(end: &Option<u64>) -> String {
    end.map(|e| e.to_string()).unwrap_or_default()
}

impl BufferError {
    /// HTTP status carried by a [`BufferError::Fetch`].
    pub fn status(&self) -> Option<u16> {
        match self {
            BufferError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_messages_name_request_and_status() {
        let head = BufferError::Fetch { request: RequestKind::Head, status: 404 };
        assert_eq!(head.to_string(), "fetch head failed 404");
        assert_eq!(head.status(), Some(404));

        let range = BufferError::Fetch { request: RequestKind::Range, status: 416 };
        assert_eq!(range.to_string(), "fetch failed 416");
    }

    #[test]
    fn out_of_bounds_message() {
        let e = BufferError::OutOfBounds { start: 10, end: Some(2000), byte_length: 1024 };
        assert_eq!(e.to_string(), "slice 10..2000 out of bounds for length 1024");
        let e = BufferError::OutOfBounds { start: 2000, end: None, byte_length: 1024 };
        assert_eq!(e.to_string(), "slice 2000.. out of bounds for length 1024");
        assert_eq!(e.status(), None);
    }
}
