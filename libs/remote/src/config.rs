use std::collections::BTreeMap;

use lens_api::BufferError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

// ════════════════════════════════════════════════════════════════
//  Configuration
// ════════════════════════════════════════════════════════════════

/// Options for [`RemoteByteRangeBuffer::from_config`](crate::RemoteByteRangeBuffer::from_config).
///
/// ```json
/// { "url": "https://host/data.parquet", "headers": { "Authorization": "Bearer ..." } }
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RemoteBufferConfig {
    pub url: String,
    /// Known resource length. When absent a `HEAD` probe discovers it.
    #[serde(default)]
    pub byte_length: Option<u64>,
    /// Sent with the probe and with every range request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl RemoteBufferConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    pub(crate) fn header_map(&self) -> Result<HeaderMap, BufferError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header = HeaderName::try_from(name.as_str())
                .map_err(|e| BufferError::Config(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| BufferError::Config(format!("header {name}: {e}")))?;
            map.insert(header, value);
        }
        Ok(map)
    }
}
