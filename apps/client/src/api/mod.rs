//! REST client for the deck and card API.
//!
//! Every call takes a cancellation token. A call whose token is cancelled
//! before it completes resolves with a fallback value chosen by the call
//! site instead of failing, so a view that has moved on never sees an error
//! for a result it no longer wants.

use flashcard_core::types::{Card, CardId, CreateCardInput, CreateDeckInput, Deck, DeckId};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Response status outside 200..=399.
    #[error("{status} - {status_text}")]
    RequestFailed { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

// === Request payloads ===

/// Deck update body. Never carries the embedded `cards`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeckPayload<'a> {
    id: DeckId,
    name: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCardPayload<'a> {
    front: &'a str,
    back: &'a str,
    deck_id: DeckId,
}

struct ApiClientInner {
    client: Client,
    base_url: String,
}

/// Client for the flashcards REST API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            inner: Arc::new(ApiClientInner {
                client: Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // === Decks ===

    /// All decks with their cards embedded.
    pub async fn list_decks(&self, signal: &CancellationToken) -> Result<Vec<Deck>> {
        let request = self.request(Method::GET, "decks?_embed=cards");
        self.fetch_json(request, signal, Vec::new()).await
    }

    pub async fn create_deck(
        &self,
        input: &CreateDeckInput,
        signal: &CancellationToken,
    ) -> Result<Deck> {
        let request = self.request(Method::POST, "decks").json(input);
        self.fetch_json(request, signal, Deck::default()).await
    }

    /// A single deck with its cards embedded.
    pub async fn read_deck(&self, deck_id: DeckId, signal: &CancellationToken) -> Result<Deck> {
        let request = self.request(Method::GET, &format!("decks/{deck_id}?_embed=cards"));
        self.fetch_json(request, signal, Deck::default()).await
    }

    /// Save a deck's name and description. `deck.cards` is never sent.
    pub async fn update_deck(&self, deck: &Deck, signal: &CancellationToken) -> Result<Deck> {
        let payload = DeckPayload {
            id: deck.id,
            name: &deck.name,
            description: &deck.description,
        };
        let request = self
            .request(Method::PUT, &format!("decks/{}?_embed=cards", deck.id))
            .json(&payload);
        self.fetch_json(request, signal, deck.clone()).await
    }

    pub async fn delete_deck(&self, deck_id: DeckId, signal: &CancellationToken) -> Result<()> {
        let request = self.request(Method::DELETE, &format!("decks/{deck_id}"));
        self.fetch_empty(request, signal).await
    }

    // === Cards ===

    /// Create a card owned by `deck_id`.
    pub async fn create_card(
        &self,
        deck_id: DeckId,
        input: &CreateCardInput,
        signal: &CancellationToken,
    ) -> Result<Card> {
        let payload = NewCardPayload {
            front: &input.front,
            back: &input.back,
            deck_id,
        };
        let request = self.request(Method::POST, "cards").json(&payload);
        self.fetch_json(request, signal, Card::default()).await
    }

    pub async fn read_card(&self, card_id: CardId, signal: &CancellationToken) -> Result<Card> {
        let request = self.request(Method::GET, &format!("cards/{card_id}"));
        self.fetch_json(request, signal, Card::default()).await
    }

    pub async fn update_card(&self, card: &Card, signal: &CancellationToken) -> Result<Card> {
        let request = self
            .request(Method::PUT, &format!("cards/{}", card.id))
            .json(card);
        self.fetch_json(request, signal, Card::default()).await
    }

    pub async fn delete_card(&self, card_id: CardId, signal: &CancellationToken) -> Result<()> {
        let request = self.request(Method::DELETE, &format!("cards/{card_id}"));
        self.fetch_empty(request, signal).await
    }

    // === Private methods ===

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.inner.base_url, path);
        tracing::debug!(%method, %url, "sending request");
        self.inner.client.request(method, url)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        signal: &CancellationToken,
        on_cancel: T,
    ) -> Result<T> {
        let fetch = async {
            let resp = send(request).await?;
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        };
        cancellable(fetch, signal, on_cancel).await
    }

    /// For responses whose body carries nothing of interest (deletes).
    async fn fetch_empty(&self, request: RequestBuilder, signal: &CancellationToken) -> Result<()> {
        let fetch = async { send(request).await.map(drop) };
        cancellable(fetch, signal, ()).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    if !(200..=399).contains(&status.as_u16()) {
        let err = ApiError::RequestFailed {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        };
        tracing::warn!(url = %resp.url(), error = %err, "request failed");
        return Err(err);
    }

    Ok(resp)
}

async fn cancellable<T>(
    fetch: impl Future<Output = Result<T>>,
    signal: &CancellationToken,
    on_cancel: T,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = signal.cancelled() => {
            tracing::debug!("request cancelled");
            Ok(on_cancel)
        }
        result = fetch => result,
    }
}
