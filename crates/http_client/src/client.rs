//! The configured HTTP client and its request/response phases.

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use platform_store::{clear_tokens, resolve_token, KvStore};

use crate::error::HttpError;
use crate::normalize::{accept, classify_status, extract_payload, probe};

/// Base URL used when `APP_API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "/api";
/// Fixed per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP method supported by the wrapper helpers.
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Returns the method name in wire form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-call flags carried alongside a request.
pub struct RequestOptions {
    /// Suppresses the wrapper's unified diagnostic logging for this call.
    /// The classified error itself still propagates to the caller.
    pub skip_error_handler: bool,
    /// Reserved: the shared loading flag lives in the app-state store and is
    /// toggled by callers, never by the wrapper.
    pub skip_loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RawResponse {
    status: u16,
    body: Value,
}

/// Single configured HTTP client: base URL, fixed timeout, default JSON
/// content type, bearer-token injection, and response normalization.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
    local_store: Rc<dyn KvStore>,
    session_store: Rc<dyn KvStore>,
}

impl HttpClient {
    /// Creates a client over the two candidate token stores.
    ///
    /// The base URL comes from the build-time `APP_API_BASE_URL` value,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn new(local_store: Rc<dyn KvStore>, session_store: Rc<dyn KvStore>) -> Self {
        Self {
            base_url: option_env!("APP_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            local_store,
            session_store,
        }
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a request path onto the base URL. Absolute `http(s)` URLs pass
    /// through unchanged.
    pub fn join_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolves the `Authorization` header value for the next request, or
    /// `None` when neither token store holds a token.
    pub async fn authorization_header(&self) -> Option<String> {
        resolve_token(self.local_store.as_ref(), self.session_store.as_ref())
            .await
            .map(|token| format!("Bearer {token}"))
    }

    /// Issues a GET request and decodes the extracted payload.
    ///
    /// # Errors
    ///
    /// Returns the classified [`HttpError`] for any transport, HTTP, business,
    /// or decode failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.get_with(path, RequestOptions::default()).await
    }

    /// [`Self::get`] with explicit [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = self.dispatch(HttpMethod::Get, path, None, options).await?;
        decode(extract_payload(body))
    }

    /// Issues a POST request with a JSON body and decodes the extracted payload.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.post_with(path, body, RequestOptions::default()).await
    }

    /// [`Self::post`] with explicit [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn post_with<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode(body)?;
        let body = self
            .dispatch(HttpMethod::Post, path, Some(body), options)
            .await?;
        decode(extract_payload(body))
    }

    /// Issues a PUT request with a JSON body and decodes the extracted payload.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.put_with(path, body, RequestOptions::default()).await
    }

    /// [`Self::put`] with explicit [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn put_with<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode(body)?;
        let body = self
            .dispatch(HttpMethod::Put, path, Some(body), options)
            .await?;
        decode(extract_payload(body))
    }

    /// Issues a PATCH request with a JSON body and decodes the extracted payload.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.patch_with(path, body, RequestOptions::default()).await
    }

    /// [`Self::patch`] with explicit [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn patch_with<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = encode(body)?;
        let body = self
            .dispatch(HttpMethod::Patch, path, Some(body), options)
            .await?;
        decode(extract_payload(body))
    }

    /// Issues a DELETE request and decodes the extracted payload.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.delete_with(path, RequestOptions::default()).await
    }

    /// [`Self::delete`] with explicit [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, HttpError> {
        let body = self
            .dispatch(HttpMethod::Delete, path, None, options)
            .await?;
        decode(extract_payload(body))
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, HttpError> {
        let url = self.join_url(path);
        let authorization = self.authorization_header().await;
        let raw = self
            .perform(method, &url, authorization.as_deref(), body.as_ref())
            .await;
        self.finish(raw, options).await
    }

    /// Applies the response-success and response-error phases to a transport
    /// outcome: envelope acceptance on 2xx, status classification otherwise,
    /// token clearing on 401, and per-category diagnostics.
    async fn finish(
        &self,
        raw: Result<RawResponse, HttpError>,
        options: RequestOptions,
    ) -> Result<Value, HttpError> {
        let err = match raw {
            Ok(response) if (200..300).contains(&response.status) => {
                match accept(probe(response.body)) {
                    Ok(body) => return Ok(body),
                    Err(err) => err,
                }
            }
            Ok(response) => {
                let err = classify_status(response.status, Some(&response.body));
                if matches!(err, HttpError::Unauthorized) {
                    // Token clearing is the 401 contract; navigation stays with callers.
                    if let Err(clear_err) =
                        clear_tokens(self.local_store.as_ref(), self.session_store.as_ref()).await
                    {
                        leptos::logging::warn!("token clear failed: {clear_err}");
                    }
                }
                err
            }
            Err(err) => err,
        };
        if !options.skip_error_handler {
            report(&err);
        }
        Err(err)
    }

    #[cfg(target_arch = "wasm32")]
    async fn perform(
        &self,
        method: HttpMethod,
        url: &str,
        authorization: Option<&str>,
        body: Option<&Value>,
    ) -> Result<RawResponse, HttpError> {
        use futures::future::{select, Either};
        use gloo_net::http::{Method, RequestBuilder};

        let method = match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut builder = RequestBuilder::new(url)
            .method(method)
            .header("Content-Type", "application/json");
        if let Some(authorization) = authorization {
            builder = builder.header("Authorization", authorization);
        }
        let request = match body {
            Some(body) => {
                let raw = serde_json::to_string(body).map_err(|e| HttpError::Request {
                    message: e.to_string(),
                })?;
                builder.body(raw)
            }
            None => builder.build(),
        }
        .map_err(|e| HttpError::Request {
            message: e.to_string(),
        })?;

        let send = request.send();
        let timeout = gloo_timers::future::TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| HttpError::Network {
                message: e.to_string(),
            })?,
            Either::Right(((), _)) => {
                return Err(HttpError::Network {
                    message: format!("request timed out after {} ms", self.timeout_ms),
                })
            }
        };

        let status = response.status();
        let text = response.text().await.map_err(|e| HttpError::Network {
            message: e.to_string(),
        })?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| HttpError::Decode {
                message: e.to_string(),
            })?
        };
        Ok(RawResponse { status, body })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn perform(
        &self,
        method: HttpMethod,
        url: &str,
        authorization: Option<&str>,
        body: Option<&Value>,
    ) -> Result<RawResponse, HttpError> {
        let _ = (method, url, authorization, body);
        Err(HttpError::Request {
            message: "browser fetch is unavailable on this target".to_string(),
        })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, HttpError> {
    serde_json::to_value(body).map_err(|e| HttpError::Request {
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, HttpError> {
    serde_json::from_value(value).map_err(|e| HttpError::Decode {
        message: e.to_string(),
    })
}

fn report(err: &HttpError) {
    match err {
        HttpError::Business { message } => {
            leptos::logging::warn!("business failure: {message}");
        }
        HttpError::Unauthorized => {
            leptos::logging::error!("authentication expired, cleared stored tokens");
        }
        HttpError::Forbidden => {
            leptos::logging::error!("no permission to access the requested resource");
        }
        HttpError::NotFound => {
            leptos::logging::error!("the requested resource does not exist");
        }
        HttpError::ServerError => {
            leptos::logging::error!("server error, try again later");
        }
        HttpError::Status { message, .. } => {
            leptos::logging::error!("{message}");
        }
        HttpError::Network { message } => {
            leptos::logging::error!("network error, check the connection: {message}");
        }
        HttpError::Request { message } => {
            leptos::logging::error!("request configuration error: {message}");
        }
        HttpError::Decode { message } => {
            leptos::logging::error!("response decode failed: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_store::{MemoryKvStore, TOKEN_KEY};
    use serde_json::json;

    use super::*;

    fn client_with_stores() -> (HttpClient, MemoryKvStore, MemoryKvStore) {
        let local = MemoryKvStore::default();
        let session = MemoryKvStore::default();
        let client = HttpClient::new(Rc::new(local.clone()), Rc::new(session.clone()))
            .with_base_url("/api");
        (client, local, session)
    }

    #[test]
    fn join_url_handles_relative_and_absolute_paths() {
        let (client, _, _) = client_with_stores();
        assert_eq!(client.join_url("posts"), "/api/posts");
        assert_eq!(client.join_url("/posts/1"), "/api/posts/1");
        assert_eq!(
            client.join_url("https://example.com/users/1"),
            "https://example.com/users/1"
        );

        let client = client.with_base_url("https://example.com/api/");
        assert_eq!(client.join_url("posts"), "https://example.com/api/posts");
    }

    #[test]
    fn authorization_header_prefers_the_durable_store() {
        let (client, local, session) = client_with_stores();
        block_on(session.save(TOKEN_KEY, "session-token")).expect("seed session");
        assert_eq!(
            block_on(client.authorization_header()),
            Some("Bearer session-token".to_string())
        );

        block_on(local.save(TOKEN_KEY, "local-token")).expect("seed local");
        assert_eq!(
            block_on(client.authorization_header()),
            Some("Bearer local-token".to_string())
        );
    }

    #[test]
    fn authorization_header_is_absent_without_tokens() {
        let (client, _, _) = client_with_stores();
        assert_eq!(block_on(client.authorization_header()), None);
    }

    #[test]
    fn unauthorized_response_clears_both_token_stores() {
        let (client, local, session) = client_with_stores();
        block_on(local.save(TOKEN_KEY, "a")).expect("seed local");
        block_on(session.save(TOKEN_KEY, "b")).expect("seed session");

        let raw = Ok(RawResponse {
            status: 401,
            body: json!({"message": "expired"}),
        });
        let err = block_on(client.finish(raw, RequestOptions::default()))
            .expect_err("expected unauthorized");

        assert_eq!(err, HttpError::Unauthorized);
        assert_eq!(local.peek(TOKEN_KEY), None);
        assert_eq!(session.peek(TOKEN_KEY), None);
    }

    #[test]
    fn non_auth_statuses_do_not_touch_the_token_stores() {
        let (client, local, session) = client_with_stores();
        block_on(local.save(TOKEN_KEY, "a")).expect("seed local");

        let raw = Ok(RawResponse {
            status: 500,
            body: Value::Null,
        });
        let err = block_on(client.finish(raw, RequestOptions::default()))
            .expect_err("expected server error");

        assert_eq!(err, HttpError::ServerError);
        assert_eq!(local.peek(TOKEN_KEY), Some("a".to_string()));
        assert_eq!(session.peek(TOKEN_KEY), None);
    }

    #[test]
    fn successful_envelope_resolves_and_business_failure_rejects() {
        let (client, _, _) = client_with_stores();

        let raw = Ok(RawResponse {
            status: 200,
            body: json!({"code": 0, "message": "ok", "data": {"id": 9}}),
        });
        let body =
            block_on(client.finish(raw, RequestOptions::default())).expect("envelope success");
        assert_eq!(extract_payload(body), json!({"id": 9}));

        let raw = Ok(RawResponse {
            status: 200,
            body: json!({"code": 4100, "message": "not allowed"}),
        });
        let err = block_on(client.finish(raw, RequestOptions::default()))
            .expect_err("expected business failure");
        assert_eq!(
            err,
            HttpError::Business {
                message: "not allowed".to_string()
            }
        );
    }

    #[test]
    fn skip_error_handler_still_propagates_the_error() {
        let (client, _, _) = client_with_stores();
        let raw = Ok(RawResponse {
            status: 404,
            body: Value::Null,
        });
        let options = RequestOptions {
            skip_error_handler: true,
            skip_loading: false,
        };
        let err = block_on(client.finish(raw, options)).expect_err("expected not-found");
        assert_eq!(err, HttpError::NotFound);
    }

    #[test]
    fn method_wire_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
