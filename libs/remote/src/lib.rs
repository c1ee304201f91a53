pub mod config;

use bytes::Bytes;
use lens_api::{AsyncBuffer, BufferError, RequestKind, SliceFuture, check_slice};
use reqwest::header::{CONTENT_LENGTH, HeaderMap, RANGE};

pub use config::RemoteBufferConfig;

// ═══════════════════════════════════════════════════════════════
//  RemoteByteRangeBuffer
// ═══════════════════════════════════════════════════════════════

/// Lazy [`AsyncBuffer`] over an HTTP resource.
///
/// Length is taken from the caller or discovered once with a `HEAD` probe at
/// construction; every `slice` is a separate ranged `GET`. Nothing is cached,
/// retried or deduplicated, so overlapping slices hit the server again.
#[derive(Debug, Clone)]
pub struct RemoteByteRangeBuffer {
    http: reqwest::Client,
    url: String,
    headers: HeaderMap,
    byte_length: u64,
}

impl RemoteByteRangeBuffer {
    pub async fn new(url: impl Into<String>, byte_length: Option<u64>) -> Result<Self, BufferError> {
        Self::with_client(reqwest::Client::new(), url, byte_length, HeaderMap::new()).await
    }

    pub async fn from_config(config: &RemoteBufferConfig) -> Result<Self, BufferError> {
        let headers = config.header_map()?;
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| BufferError::Config(format!("HTTP client: {e}")))?;
        Self::with_client(http, config.url.clone(), config.byte_length, headers).await
    }

    /// Reuse an existing client, e.g. one shared by many buffers.
    pub async fn with_client(
        http: reqwest::Client,
        url: impl Into<String>,
        byte_length: Option<u64>,
        headers: HeaderMap,
    ) -> Result<Self, BufferError> {
        let url = url.into();
        let byte_length = match byte_length {
            Some(len) => len,
            None => probe_length(&http, &url, &headers).await?,
        };
        tracing::debug!(url = %url, byte_length, "remote buffer ready");
        Ok(Self { http, url, headers, byte_length })
    }

    async fn fetch_range(&self, start: u64, end: Option<u64>) -> Result<Bytes, BufferError> {
        let range = range_header(start, end);
        tracing::debug!(url = %self.url, %range, "range request");

        let resp = self
            .http
            .get(&self.url)
            .headers(self.headers.clone())
            .header(RANGE, &range)
            .send()
            .await
            .map_err(|e| transport(&self.url, e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(url = %self.url, %range, %status, "range request rejected");
            return Err(BufferError::Fetch { request: RequestKind::Range, status: status.as_u16() });
        }
        resp.bytes().await.map_err(|e| transport(&self.url, e))
    }
}

impl AsyncBuffer for RemoteByteRangeBuffer {
    fn byte_length(&self) -> u64 {
        self.byte_length
    }

    fn slice(&self, start: u64, end: Option<u64>) -> SliceFuture<'_> {
        Box::pin(async move {
            let stop = check_slice(start, end, self.byte_length)?;
            if stop == start {
                return Ok(Bytes::new());
            }
            self.fetch_range(start, end).await
        })
    }
}

// ═══════════════════════════════════════════════════════════════
//  Length discovery
// ═══════════════════════════════════════════════════════════════

/// Resource length from a `HEAD` request's `Content-Length`.
pub async fn byte_length_from_url(http: &reqwest::Client, url: &str) -> Result<u64, BufferError> {
    probe_length(http, url, &HeaderMap::new()).await
}

async fn probe_length(http: &reqwest::Client, url: &str, headers: &HeaderMap) -> Result<u64, BufferError> {
    let resp = http
        .head(url)
        .headers(headers.clone())
        .send()
        .await
        .map_err(|e| transport(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BufferError::Fetch { request: RequestKind::Head, status: status.as_u16() });
    }

    // Read the header itself: the response to HEAD has no body to size.
    let raw = resp.headers().get(CONTENT_LENGTH).ok_or(BufferError::LengthUnknown)?;
    let text = raw
        .to_str()
        .map_err(|_| BufferError::InvalidLength(String::from_utf8_lossy(raw.as_bytes()).into_owned()))?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| BufferError::InvalidLength(text.to_owned()))
}

// ═══════════════════════════════════════════════════════════════
//  Helpers
// ═══════════════════════════════════════════════════════════════

/// `bytes=<start>-<end-1>` (inclusive end) or `bytes=<start>-`. Caller
/// guarantees `end > start`.
fn range_header(start: u64, end: Option<u64>) -> String {
    match end {
        Some(end) => format!("bytes={start}-{}", end - 1),
        None => format!("bytes={start}-"),
    }
}

fn transport(url: &str, e: reqwest::Error) -> BufferError {
    BufferError::Transport { url: url.to_owned(), source: Box::new(e) }
}
