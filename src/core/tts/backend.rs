//! Transport seam between the orchestrator and the synthesis service.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use url::Url;

use super::error::{TTSError, TTSResult, classify_response, classify_transport_error};
use super::qwen3::AudioRequestPayload;

/// One synthesis call: send the payload, return audio bytes or a classified error.
///
/// Implementations must classify every outcome into exactly one [`TTSError`]
/// variant and must bound the call by their own per-attempt deadline.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    async fn request_audio(&self, payload: &AudioRequestPayload) -> TTSResult<Bytes>;
}

/// HTTP backend: POSTs the payload as JSON to a fixed URL.
pub struct HttpSpeechBackend {
    client: reqwest::Client,
    api_url: Url,
    timeout: Duration,
}

impl HttpSpeechBackend {
    /// Create a backend for `api_url` with a per-request deadline.
    pub fn new(api_url: Url, timeout: Duration) -> TTSResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TTSError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url,
            timeout,
        })
    }

    #[inline]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[async_trait]
impl SpeechBackend for HttpSpeechBackend {
    async fn request_audio(&self, payload: &AudioRequestPayload) -> TTSResult<Bytes> {
        debug!(
            text_len = payload.text.len(),
            model = %payload.model,
            language = %payload.language,
            has_instruct = payload.instruct.is_some(),
            "Qwen3 TTS synthesis request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e, self.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(&e, self.timeout))?;

        debug!(status, body_len = body.len(), "Qwen3 TTS response received");

        classify_response(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_backend_creation() {
        let url = Url::parse("http://127.0.0.1:8000/v1/audio/speech").unwrap();
        let backend = HttpSpeechBackend::new(url.clone(), Duration::from_secs(5)).unwrap();
        assert_eq!(backend.api_url(), &url);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Bind then release a port so nothing is listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{port}/v1/audio/speech")).unwrap();
        let backend = HttpSpeechBackend::new(url, Duration::from_secs(5)).unwrap();

        let payload = AudioRequestPayload {
            model: "m".to_string(),
            language: "Auto".to_string(),
            text: "hello".to_string(),
            output_format: "wav".to_string(),
            voice: None,
            instruct: None,
        };

        let err = backend.request_audio(&payload).await.unwrap_err();
        assert!(matches!(err, TTSError::Network(_)));
        assert!(err.detail().starts_with("Network failure:"));
    }
}
