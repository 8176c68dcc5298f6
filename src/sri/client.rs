use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::{TaxpayerRecord, ValidQuery};
use crate::contexts::{SearchError, SearchResult};

/// Backend that resolves a name query into registry records.
#[async_trait]
pub trait TaxpayerLookup: Send + Sync {
    /// Performs exactly one request for `query`.
    async fn lookup(&self, query: &ValidQuery) -> SearchResult<Vec<TaxpayerRecord>>;
}

/// HTTP client for the `/sri` endpoint of the lookup service.
#[derive(Clone)]
pub struct SriClient {
    http_client: Client,
    api_url: Arc<str>,
}

impl SriClient {
    pub fn new(http_client: Client, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: Arc::from(api_url),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl TaxpayerLookup for SriClient {
    async fn lookup(&self, query: &ValidQuery) -> SearchResult<Vec<TaxpayerRecord>> {
        let url = query.lookup_url(&self.api_url)?;
        tracing::debug!(%url, "requesting taxpayer lookup");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "lookup service returned an error status");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_records(&body)
    }
}

/// Decodes a lookup response body. A JSON `null` counts as no records.
pub fn parse_records(body: &[u8]) -> SearchResult<Vec<TaxpayerRecord>> {
    let records: Option<Vec<TaxpayerRecord>> = serde_json::from_slice(body)?;
    Ok(records.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::{SearchController, SearchOutcome};
    use crate::sri::SearchQuery;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    #[test]
    fn test_parse_records_keeps_backend_order() {
        let body = br#"[
            {"razonSocial": "ZAMBRANO"},
            {"razonSocial": "ALVAREZ"},
            {"razonSocial": "MORA"}
        ]"#;
        let names: Vec<_> = parse_records(body)
            .unwrap()
            .into_iter()
            .map(|r| r.razon_social.unwrap())
            .collect();
        assert_eq!(names, vec!["ZAMBRANO", "ALVAREZ", "MORA"]);
    }

    #[test]
    fn test_parse_records_null_and_empty() {
        assert!(parse_records(b"null").unwrap().is_empty());
        assert!(parse_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_rejects_non_list() {
        assert!(matches!(parse_records(b"{\"error\": \"x\"}"), Err(SearchError::Decode(_))));
        assert!(matches!(parse_records(b""), Err(SearchError::Decode(_))));
        assert!(matches!(parse_records(b"<html>"), Err(SearchError::Decode(_))));
    }

    /// Serves one canned HTTP reply on loopback; the handle yields the request line.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn client_for(base_url: &str) -> SriClient {
        SriClient::new(Client::builder().no_proxy().build().unwrap(), base_url)
    }

    fn query() -> ValidQuery {
        SearchQuery::new("JUAN CARLOS", "GARCÍA LÓPEZ").validate().unwrap()
    }

    #[tokio::test]
    async fn test_lookup_sends_encoded_request_line() {
        let (base_url, server) = serve_once("200 OK", "[]").await;

        client_for(&base_url).lookup(&query()).await.unwrap();

        assert_eq!(
            server.await.unwrap(),
            "GET /sri?nombres=JUAN%20CARLOS&apellidos=GARC%C3%8DA%20L%C3%93PEZ HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_lookup_error_status() {
        let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let result = client_for(&base_url).lookup(&query()).await;

        assert_eq!(result, Err(SearchError::Status(500)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Error en la conexión con el servidor"
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_null_body_settles_empty() {
        let (base_url, server) = serve_once("200 OK", "null").await;
        let mut controller = SearchController::default();

        let outcome = controller
            .search(&client_for(&base_url), &SearchQuery::new("JUAN", "GARCIA"))
            .await;

        assert_eq!(outcome, SearchOutcome::Empty);
        assert_eq!(outcome.message(), Some("No se encontraron registros"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_records_in_order() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"razonSocial":"MORA","estadoContribuyente":"ACTIVO"},{"razonSocial":"ALVAREZ","establecimientos":[{"estado":"ABIERTO"}]}]"#,
        )
        .await;

        let records = client_for(&base_url).lookup(&query()).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].razon_social.as_deref(), Some("MORA"));
        assert_eq!(records[1].razon_social.as_deref(), Some("ALVAREZ"));
        assert_eq!(records[1].establecimientos.len(), 1);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_malformed_body_is_decode_error() {
        let (base_url, server) = serve_once("200 OK", "<html>oops</html>").await;

        let result = client_for(&base_url).lookup(&query()).await;

        assert!(matches!(result, Err(SearchError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(&format!("http://{}", addr)).lookup(&query()).await;

        assert!(matches!(result, Err(SearchError::Transport(_))), "got {:?}", result);
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = SriClient::new(Client::new(), "https://api.example.com/");
        assert_eq!(client.api_url(), "https://api.example.com/");
    }
}
