use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
    Router,
};
use std::sync::Arc;
use test_utils::signing::{TestSigner, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::account::RegistrationOutcome,
    state::AppState,
    test_support::{test_state, StubAccountBackend, StubDiscordApi},
};


/// Router over stub services plus the signer whose key it trusts.
struct TestApp {
    signer: TestSigner,
    discord: Arc<StubDiscordApi>,
    state: AppState,
}

impl TestApp {
    fn new(discord: StubDiscordApi) -> Self {
        let signer = TestSigner::generate();
        let discord = Arc::new(discord);
        let accounts = Arc::new(StubAccountBackend::answering(RegistrationOutcome::Accepted));
        let state = test_state(discord.clone(), accounts, &signer);

        Self {
            signer,
            discord,
            state,
        }
    }

    fn router(&self) -> Router {
        router(self.state.clone())
    }

    async fn get(&self, uri: &str) -> Response {
        self.router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// POSTs `body` to the webhook with a valid signature.
    async fn post_signed(&self, body: &str) -> Response {
        let (signature, timestamp) = self.signer.sign_body(body);
        self.post_interaction(body, Some(&signature), Some(&timestamp))
            .await
    }

    async fn post_interaction(
        &self,
        body: &str,
        signature: Option<&str>,
        timestamp: Option<&str>,
    ) -> Response {
        let mut request = Request::post("/interactions").header(CONTENT_TYPE, "application/json");
        if let Some(signature) = signature {
            request = request.header(SIGNATURE_HEADER, signature);
        }
        if let Some(timestamp) = timestamp {
            request = request.header(TIMESTAMP_HEADER, timestamp);
        }

        self.router()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
