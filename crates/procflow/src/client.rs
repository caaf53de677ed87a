//! Main client implementation for the process-definition API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use procflow_transport::{HttpTransport, HttpTransportConfig, Transport};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result, SendResult, TransportFailure},
    http::{InterceptorChain, RequestDescriptor, RequestInterceptor, ResponseEnvelope},
    notify::{Notifier, TracingNotifier},
    observability::CallLog,
    resources::{Definitions, Executions, Nodes},
};

/// Client for the process-definition API.
///
/// Holds one transport bound to a fixed base path and timeout. Cloning is
/// cheap and every clone shares the same immutable state, so a single
/// client built at startup can be handed to every part of the application.
///
/// # Example
///
/// ```rust,no_run
/// use procflow::{Client, RequestDescriptor};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder()
///     .base_path("http://localhost:8080/api")
///     .build()?;
///
/// let definitions = client.send(RequestDescriptor::get("/process/definitions")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Transport performing the single network attempt per call
    transport: Arc<dyn Transport>,
    /// Parsed base path every request path is resolved against
    base_url: Url,
    timeout: Duration,
    interceptors: InterceptorChain,
    notifier: Arc<dyn Notifier>,

    // Lazy-initialized resources
    definitions: OnceLock<Definitions>,
    nodes: OnceLock<Nodes>,
    executions: OnceLock<Executions>,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object, with the default
    /// notifier and no interceptors.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path is invalid or the HTTP client cannot
    /// be initialized.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Send one request and return the response payload.
    ///
    /// The descriptor runs through the interceptor chain, is resolved against
    /// the base path and dispatched once. A 2xx response yields its payload;
    /// anything else is classified into a [`TransportFailure`], reported to
    /// the notifier exactly once, and returned.
    pub async fn send(&self, descriptor: RequestDescriptor) -> SendResult<serde_json::Value> {
        let mut log = CallLog::start(descriptor.method().as_str(), descriptor.path());

        let descriptor = match self.inner.interceptors.intercept(descriptor) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                let failure = TransportFailure::local(e.message);
                return Err(self.fail(&log, failure));
            }
        };

        // Interceptors may have rewritten the path
        let path = descriptor.path().to_string();
        log.set_path(path.as_str());

        let request = match descriptor.into_http_request(&self.inner.base_url) {
            Ok(request) => request,
            Err(failure) => return Err(self.fail(&log, failure)),
        };
        log.dispatched(request.body.as_ref().map(Vec::len));

        let response = match self.inner.transport.send_http(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "transport error");
                return Err(self.fail(&log, TransportFailure::from(e)));
            }
        };

        if !response.is_success() {
            let failure = TransportFailure::server(response.status, path);
            return Err(self.fail(&log, failure));
        }

        log.succeeded(response.status);

        Ok(ResponseEnvelope::from(response).into_payload())
    }

    /// Send one request and decode the payload into `T`.
    ///
    /// A payload that does not decode is a `LocalError`, reported to the
    /// notifier like any other failure.
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> SendResult<T> {
        let log = CallLog::start(descriptor.method().as_str(), descriptor.path());

        let payload = self.send(descriptor).await?;
        serde_json::from_value(payload)
            .map_err(|e| self.fail(&log, TransportFailure::local(e.to_string())))
    }

    /// Access the process definition endpoints.
    pub fn definitions(&self) -> &Definitions {
        self.inner
            .definitions
            .get_or_init(|| Definitions::new(self.clone()))
    }

    /// Access the process node endpoints.
    pub fn nodes(&self) -> &Nodes {
        self.inner.nodes.get_or_init(|| Nodes::new(self.clone()))
    }

    /// Access the process execution endpoint.
    pub fn executions(&self) -> &Executions {
        self.inner
            .executions
            .get_or_init(|| Executions::new(self.clone()))
    }

    /// Get the base path requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    fn fail(&self, log: &CallLog, failure: TransportFailure) -> TransportFailure {
        log.failed(&failure);
        self.inner.notifier.notify(&failure.message());
        failure
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .field("interceptors", &self.inner.interceptors)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    notifier: Option<Arc<dyn Notifier>>,
    interceptors: InterceptorChain,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base path for the API.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the sink for user-facing failure messages.
    ///
    /// Defaults to [`TracingNotifier`].
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Append an interceptor to the request stage.
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    ///
    /// The configured timeout is not applied to custom transports; they are
    /// expected to carry their own.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path is invalid or the HTTP client cannot
    /// be initialized.
    pub fn build(self) -> Result<Client> {
        let base_url = self.config.validated_base_url()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::with_config(HttpTransportConfig {
                    timeout: self.config.timeout,
                    ..Default::default()
                })
                .map_err(|e| Error::HttpClient(e.to_string()))?,
            ),
        };

        tracing::debug!(
            base_url = %base_url,
            timeout_ms = self.config.timeout.as_millis(),
            interceptors = self.interceptors.len(),
            "procflow client built"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                timeout: self.config.timeout,
                interceptors: self.interceptors,
                notifier: self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
                definitions: OnceLock::new(),
                nodes: OnceLock::new(),
                executions: OnceLock::new(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::InterceptError;
    use crate::notify::RecordingNotifier;
    use async_trait::async_trait;
    use procflow_transport::{HttpRequest, HttpResponse, TransportError};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport that replays a canned outcome and records what it saw.
    struct StubTransport {
        outcome: fn() -> procflow_transport::Result<HttpResponse>,
        calls: AtomicUsize,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn new(outcome: fn() -> procflow_transport::Result<HttpResponse>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send_http(
            &self,
            request: HttpRequest,
        ) -> procflow_transport::Result<HttpResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request);
            (self.outcome)()
        }
    }

    fn client_with(transport: Arc<StubTransport>, notifier: Arc<RecordingNotifier>) -> Client {
        Client::builder()
            .base_path("http://localhost:8080/api")
            .transport(transport)
            .notifier(notifier)
            .build()
            .expect("Failed to build client")
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .base_path("https://flows.example.com/api")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "https://flows.example.com/api");
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_client_from_config_invalid_scheme() {
        let result = Client::from_config(ClientConfig::with_base_path("ftp://invalid.example.com"));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_resource_lazy_initialization() {
        let client = Client::new().unwrap();

        assert!(std::ptr::eq(client.definitions(), client.definitions()));
        assert!(std::ptr::eq(client.nodes(), client.nodes()));
        assert!(std::ptr::eq(client.executions(), client.executions()));
    }

    #[test]
    fn test_client_clone_shares_state() {
        let client1 = Client::new().unwrap();
        let client2 = client1.clone();

        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
    }

    #[tokio::test]
    async fn test_send_unwraps_payload() {
        let transport = StubTransport::new(|| {
            Ok(HttpResponse::new(
                200,
                HashMap::from([("x-request-id".to_string(), "r1".to_string())]),
                br#"{"id":1,"name":"onboarding"}"#.to_vec(),
            ))
        });
        let notifier = Arc::new(RecordingNotifier::new());
        let client = client_with(transport.clone(), notifier.clone());

        let payload = client
            .send(RequestDescriptor::get("/process/definitions/1"))
            .await
            .unwrap();

        assert_eq!(payload, serde_json::json!({"id": 1, "name": "onboarding"}));
        assert_eq!(notifier.count(), 0);
        assert_eq!(
            transport.seen.lock().unwrap()[0].url,
            "http://localhost:8080/api/process/definitions/1"
        );
    }

    #[tokio::test]
    async fn test_send_classifies_timeout() {
        let transport = StubTransport::new(|| Err(TransportError::Timeout));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = client_with(transport, notifier.clone());

        let err = client
            .send(RequestDescriptor::get("/process/nodes"))
            .await
            .unwrap_err();

        assert_eq!(err, TransportFailure::NoResponse);
        assert_eq!(
            notifier.messages(),
            vec!["network unavailable, please check connection"]
        );
    }

    #[tokio::test]
    async fn test_send_classifies_server_error() {
        let transport =
            StubTransport::new(|| Ok(HttpResponse::new(404, HashMap::new(), Vec::new())));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = client_with(transport, notifier.clone());

        let err = client
            .send(RequestDescriptor::get("/nodes/7"))
            .await
            .unwrap_err();

        assert_eq!(err, TransportFailure::server(404, "/nodes/7"));
        assert_eq!(notifier.messages(), vec!["resource not found: /nodes/7"]);
    }

    #[tokio::test]
    async fn test_interceptor_failure_skips_dispatch() {
        struct Reject;
        impl RequestInterceptor for Reject {
            fn intercept(
                &self,
                _: RequestDescriptor,
            ) -> std::result::Result<RequestDescriptor, InterceptError> {
                Err(InterceptError::new("missing session"))
            }
        }

        let transport =
            StubTransport::new(|| Ok(HttpResponse::new(200, HashMap::new(), Vec::new())));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = Client::builder()
            .transport(transport.clone())
            .notifier(notifier.clone())
            .interceptor(Arc::new(Reject))
            .build()
            .unwrap();

        let err = client
            .send(RequestDescriptor::get("/process/definitions"))
            .await
            .unwrap_err();

        assert_eq!(err, TransportFailure::local("missing session"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.messages(), vec!["missing session"]);
    }

    #[tokio::test]
    async fn test_interceptor_rewritten_path_is_reported() {
        struct Prefix;
        impl RequestInterceptor for Prefix {
            fn intercept(
                &self,
                request: RequestDescriptor,
            ) -> std::result::Result<RequestDescriptor, InterceptError> {
                Ok(RequestDescriptor::new(
                    request.method().clone(),
                    format!("/v2{}", request.path()),
                ))
            }
        }

        let transport =
            StubTransport::new(|| Ok(HttpResponse::new(404, HashMap::new(), Vec::new())));
        let notifier = Arc::new(RecordingNotifier::new());
        let client = Client::builder()
            .transport(transport.clone())
            .notifier(notifier.clone())
            .interceptor(Arc::new(Prefix))
            .build()
            .unwrap();

        let err = client.send(RequestDescriptor::get("/nodes/1")).await.unwrap_err();

        assert_eq!(err, TransportFailure::server(404, "/v2/nodes/1"));
        assert_eq!(
            transport.seen.lock().unwrap()[0].url,
            "http://localhost:8080/api/v2/nodes/1"
        );
    }

    #[tokio::test]
    async fn test_send_as_decode_failure_is_local_and_notified_once() {
        let transport = StubTransport::new(|| {
            Ok(HttpResponse::new(200, HashMap::new(), b"\"text\"".to_vec()))
        });
        let notifier = Arc::new(RecordingNotifier::new());
        let client = client_with(transport, notifier.clone());

        let err = client
            .send_as::<Vec<u64>>(RequestDescriptor::get("/process/definitions"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportFailure::LocalError { .. }));
        assert_eq!(notifier.count(), 1);
    }
}
