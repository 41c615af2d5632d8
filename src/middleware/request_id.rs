use http::Extensions;
use reqwest::header::HeaderValue;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Client middleware tagging every outgoing request with a request ID for tracing
pub struct RequestId;

#[async_trait::async_trait]
impl Middleware for RequestId {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Keep a caller-supplied ID, otherwise generate one
        let request_id = match req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
        {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                let value =
                    HeaderValue::from_str(&id).map_err(reqwest_middleware::Error::middleware)?;
                req.headers_mut().insert(REQUEST_ID_HEADER, value);
                id
            }
        };

        // Path only: the query string carries the session credential
        let method = req.method().clone();
        let path = req.url().path().to_string();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Outgoing request"
        );

        let result = next.run(req, extensions).await;

        match &result {
            Ok(res) => tracing::debug!(
                request_id = %request_id,
                status = %res.status(),
                "Request completed"
            ),
            Err(e) => tracing::warn!(
                request_id = %request_id,
                error = %e,
                "Request failed"
            ),
        }

        result
    }
}
