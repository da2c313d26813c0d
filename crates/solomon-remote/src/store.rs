//! Remote JSON document store client and the chat persistence gateway
//!
//! The store is addressed by a two-segment path (`collection/document`) and
//! holds whole JSON records; reads report absence, writes replace wholesale.
//! There is no transactionality across documents and no versioning -- under
//! concurrent writers the last write wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use solomon_core::prelude::*;
use solomon_core::{Chat, UserSettings};

/// Default collection both documents live under.
pub const DEFAULT_COLLECTION: &str = "solomon";

const CHATS_DOCUMENT: &str = "chats";
const SETTINGS_DOCUMENT: &str = "settings";

/// Key-addressed JSON document store.
///
/// `get` distinguishes "document absent" (`Ok(None)`) from transport or
/// server failure (`Err`); `set` replaces the document wholesale.
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    async fn get(&self, collection: &str, document: &str) -> Result<Option<Value>>;
    async fn set(&self, collection: &str, document: &str, value: &Value) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// HTTP implementation
// ─────────────────────────────────────────────────────────────────

/// HTTP document store speaking `GET`/`PUT {base}/{collection}/{document}`.
///
/// A `404` on read means the document is absent; any other non-success
/// status is an error. An optional bearer token is attached to every
/// request when configured.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpDocumentStore {
    /// Create a client for the store at `base_url`.
    ///
    /// The URL is validated eagerly so a typo in the config fails at
    /// startup instead of on the first write.
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("invalid store URL {base_url:?}: {e}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    fn document_url(&self, collection: &str, document: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, document)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl DocumentStore for HttpDocumentStore {
    async fn get(&self, collection: &str, document: &str) -> Result<Option<Value>> {
        let url = self.document_url(collection, document);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| Error::store(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::store_status(
                status.as_u16(),
                format!("{collection}/{document}"),
            ));
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| Error::store(format!("undecodable document {collection}/{document}: {e}")))?;
        Ok(Some(value))
    }

    async fn set(&self, collection: &str, document: &str, value: &Value) -> Result<()> {
        let url = self.document_url(collection, document);
        let response = self
            .authorize(self.client.put(&url))
            .json(value)
            .send()
            .await
            .map_err(|e| Error::store(format!("PUT {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::store_status(
                status.as_u16(),
                format!("{collection}/{document}"),
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// In-memory implementation (tests)
// ─────────────────────────────────────────────────────────────────

/// In-memory document store used by tests of the layers above.
///
/// Clones share the same documents, so a test can keep a handle for
/// inspection after handing a clone to the code under test.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: std::sync::Arc<MemoryStoreInner>,
}

#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default)]
struct MemoryStoreInner {
    documents: std::sync::Mutex<std::collections::HashMap<(String, String), Value>>,
    set_calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-helpers"))]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for a document, if any.
    pub fn raw(&self, collection: &str, document: &str) -> Option<Value> {
        self.inner
            .documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), document.to_string()))
            .cloned()
    }

    /// Total number of `set` calls, for write-coalescing assertions.
    pub fn set_calls(&self) -> usize {
        self.inner.set_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, document: &str) -> Result<Option<Value>> {
        Ok(self.raw(collection, document))
    }

    async fn set(&self, collection: &str, document: &str, value: &Value) -> Result<()> {
        self.inner
            .set_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.inner
            .documents
            .lock()
            .unwrap()
            .insert((collection.to_string(), document.to_string()), value.clone());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// Chat persistence gateway
// ─────────────────────────────────────────────────────────────────

/// Wire form of the chats document: `{"chats": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ChatsDocument {
    #[serde(default)]
    chats: Vec<Chat>,
}

/// The persistence gateway: two documents in one collection.
///
/// Reads substitute defaults and never propagate failure (absent document,
/// transport error, and undecodable payload all log and fall back); writes
/// return the error to the caller, who decides how loudly to report it.
#[derive(Debug)]
pub struct ChatStore<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> ChatStore<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Load the chat collection. Absent or unreadable ⇒ empty.
    pub async fn load_chats(&self) -> Vec<Chat> {
        match self.store.get(&self.collection, CHATS_DOCUMENT).await {
            Ok(Some(value)) => match serde_json::from_value::<ChatsDocument>(value) {
                Ok(document) => document.chats,
                Err(e) => {
                    warn!("Discarding undecodable chats document: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load chats: {e}");
                Vec::new()
            }
        }
    }

    /// Overwrite the chats document wholesale with the full collection.
    pub async fn save_chats(&self, chats: &[Chat]) -> Result<()> {
        let value = serde_json::to_value(ChatsDocument {
            chats: chats.to_vec(),
        })?;
        self.store
            .set(&self.collection, CHATS_DOCUMENT, &value)
            .await
    }

    /// Load the dark-mode flag. Absent or unreadable ⇒ `false`.
    pub async fn load_dark_mode(&self) -> bool {
        match self.store.get(&self.collection, SETTINGS_DOCUMENT).await {
            Ok(Some(value)) => match serde_json::from_value::<UserSettings>(value) {
                Ok(settings) => settings.dark_mode,
                Err(e) => {
                    warn!("Discarding undecodable settings document: {e}");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to load settings: {e}");
                false
            }
        }
    }

    /// Overwrite the settings document wholesale.
    pub async fn save_dark_mode(&self, dark_mode: bool) -> Result<()> {
        let value = serde_json::to_value(UserSettings { dark_mode })?;
        self.store
            .set(&self.collection, SETTINGS_DOCUMENT, &value)
            .await
    }
}
