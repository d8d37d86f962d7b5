use reqwest::multipart;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::validate::ImageFile;

/// Base URL used when neither `--base-url` nor `COSMOS_BASE_URL` is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// The three failure classes of the client: local validation (never reaches
/// the network), an application error reported by the backend, and
/// transport/decode failures (shown to the user as a generic connection
/// error). No retries, no backoff.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Api(String),
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssCoords {
    pub latitude: f64,
    pub longitude: f64,
}

/// `GET /api/iss` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct IssStatus {
    pub visible: bool,
    pub status_text: String,
    pub distance_km: f64,
    pub iss_coords: IssCoords,
}

#[derive(Debug, Deserialize)]
struct IssResponse {
    error: Option<String>,
    visible: Option<bool>,
    status_text: Option<String>,
    distance_km: Option<f64>,
    iss_coords: Option<IssCoords>,
}

impl IssResponse {
    fn into_status(self) -> Option<IssStatus> {
        Some(IssStatus {
            visible: self.visible?,
            status_text: self.status_text?,
            distance_km: self.distance_km?,
            iss_coords: self.iss_coords?,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: Option<String>,
}

#[derive(Debug, Serialize)]
struct DarkSkyRequest<'a> {
    city: &'a str,
}

#[derive(Debug, Deserialize)]
struct DarkSkyResponse {
    error: Option<String>,
    suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    error: Option<String>,
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// CosmosClient
// ---------------------------------------------------------------------------

/// Thin client over the four CosmosAI backend endpoints.
///
/// The underlying reqwest client is built without a timeout: an unresponsive
/// backend leaves the call pending until the connection settles, matching
/// the web front end.
pub struct CosmosClient {
    client: reqwest::Client,
    base_url: String,
}

impl CosmosClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        CosmosClient {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/iss?city=…` — is the ISS near enough to a city to be seen.
    pub async fn iss_status(&self, city: &str) -> Result<IssStatus, ClientError> {
        debug!(city, "requesting ISS status");
        let body: IssResponse = self
            .client
            .get(self.url("/api/iss"))
            .query(&[("city", city)])
            .send()
            .await?
            .json()
            .await?;

        if let Some(msg) = body.error {
            warn!(%msg, "backend rejected ISS request");
            return Err(ClientError::Api(msg));
        }
        body.into_status()
            .ok_or_else(|| ClientError::Api("empty ISS response".to_string()))
    }

    /// `POST /api/analyze` — upload a sky photo, get a markdown analysis.
    /// The file must already have passed [`crate::validate::inspect`].
    pub async fn analyze_image(&self, image: &ImageFile) -> Result<String, ClientError> {
        debug!(path = %image.path.display(), bytes = image.len, "uploading sky image");
        let bytes = tokio::fs::read(&image.path)
            .await
            .map_err(|e| ClientError::Validation(format!("cannot read image: {e}")))?;

        let part = multipart::Part::bytes(bytes)
            .file_name(image.file_name())
            .mime_str(image.mime)
            .map_err(ClientError::Transport)?;
        let form = multipart::Form::new().part("image", part);

        let body: AnalyzeResponse = self
            .client
            .post(self.url("/api/analyze"))
            .multipart(form)
            .send()
            .await?
            .json()
            .await?;

        if let Some(msg) = body.error {
            warn!(%msg, "backend rejected analysis");
            return Err(ClientError::Api(msg));
        }
        body.content
            .ok_or_else(|| ClientError::Api("empty analysis response".to_string()))
    }

    /// `POST /api/chat` — one turn of the astronomy chatbot.
    pub async fn chat(&self, message: &str) -> Result<String, ClientError> {
        debug!(chars = message.len(), "sending chat message");
        let body: ChatResponse = self
            .client
            .post(self.url("/api/chat"))
            .json(&ChatRequest { message })
            .send()
            .await?
            .json()
            .await?;

        body.response
            .ok_or_else(|| ClientError::Api("unable to get response".to_string()))
    }

    /// `POST /api/dark-sky` — stargazing site suggestions near a city.
    pub async fn dark_sky(&self, city: &str) -> Result<String, ClientError> {
        debug!(city, "requesting dark sky suggestions");
        let body: DarkSkyResponse = self
            .client
            .post(self.url("/api/dark-sky"))
            .json(&DarkSkyRequest { city })
            .send()
            .await?
            .json()
            .await?;

        if let Some(msg) = body.error {
            warn!(%msg, "backend rejected dark-sky request");
            return Err(ClientError::Api(msg));
        }
        body.suggestion
            .ok_or_else(|| ClientError::Api("empty dark-sky response".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CosmosClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/api/iss"), "http://localhost:5000/api/iss");
    }

    #[test]
    fn test_iss_response_success_deserializes() {
        let json = r#"{
            "visible": true,
            "status_text": "VISIBLE NOW",
            "distance_km": 734.2,
            "iss_coords": {"latitude": 12.3, "longitude": -45.6}
        }"#;
        let resp: IssResponse = serde_json::from_str(json).expect("deser");
        assert!(resp.error.is_none());
        let status = resp.into_status().expect("status");
        assert!(status.visible);
        assert_eq!(status.status_text, "VISIBLE NOW");
        assert!((status.distance_km - 734.2).abs() < f64::EPSILON);
        assert!((status.iss_coords.longitude - -45.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_iss_response_error_deserializes() {
        let json = r#"{"error": "City not found."}"#;
        let resp: IssResponse = serde_json::from_str(json).expect("deser");
        assert_eq!(resp.error.as_deref(), Some("City not found."));
        assert!(resp.into_status().is_none());
    }

    #[test]
    fn test_chat_request_serializes() {
        let json = serde_json::to_string(&ChatRequest { message: "hi" }).expect("ser");
        assert_eq!(json, r#"{"message":"hi"}"#);
    }

    #[test]
    fn test_chat_response_missing_field_is_none() {
        let resp: ChatResponse = serde_json::from_str("{}").expect("deser");
        assert!(resp.response.is_none());
    }

    #[test]
    fn test_dark_sky_request_serializes() {
        let json = serde_json::to_string(&DarkSkyRequest { city: "Oslo" }).expect("ser");
        assert_eq!(json, r#"{"city":"Oslo"}"#);
    }

    #[test]
    fn test_dark_sky_response_error_wins() {
        let json = r#"{"error": "no key", "suggestion": "ignored"}"#;
        let resp: DarkSkyResponse = serde_json::from_str(json).expect("deser");
        assert_eq!(resp.error.as_deref(), Some("no key"));
        assert_eq!(resp.suggestion.as_deref(), Some("ignored"));
    }

    #[test]
    fn test_analyze_response_content_deserializes() {
        let json = r###"{"content": "## Orion\nNice shot."}"###;
        let resp: AnalyzeResponse = serde_json::from_str(json).expect("deser");
        assert!(resp.error.is_none());
        assert!(resp.content.expect("content").contains("Orion"));
    }

    #[test]
    fn test_iss_coords_roundtrip() {
        let coords = IssCoords {
            latitude: 51.5,
            longitude: -0.1,
        };
        let json = serde_json::to_string(&coords).expect("ser");
        let back: IssCoords = serde_json::from_str(&json).expect("deser");
        assert!((back.latitude - 51.5).abs() < f64::EPSILON);
    }
}
