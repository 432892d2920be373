use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::store::{load_records, Collection, RecordStore, StoreError};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// A record kind stored as one named collection and managed by a [`CollectionActor`].
pub trait Entity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    type CreatePayload: Send + Sync + Debug + 'static;
    type Patch: Send + Sync + Debug + 'static;

    type Action: Send + Sync + Debug + 'static;
    type ActionResult: Send + Sync + Debug + 'static;

    /// Name of the collection in the record store.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Construct the full record from a freshly generated id and the payload.
    fn from_create(id: String, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a record-specific action. Changes made here are saved.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the request")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for FrameworkError {
    fn from(e: StoreError) -> Self {
        FrameworkError::Store(e.to_string())
    }
}

/// Maps [`FrameworkError`] onto a per-record error enum that has the usual
/// `NotFound`, `ValidationError`, `DatabaseError` and `ActorCommunicationError`
/// variants.
#[macro_export]
macro_rules! impl_from_framework_error {
    ($error:ty) => {
        impl From<$crate::actor_framework::FrameworkError> for $error {
            fn from(e: $crate::actor_framework::FrameworkError) -> Self {
                use $crate::actor_framework::FrameworkError;
                match e {
                    FrameworkError::NotFound(id) => <$error>::NotFound(id),
                    FrameworkError::Rejected(reason) => <$error>::ValidationError(reason),
                    FrameworkError::Store(reason) => <$error>::DatabaseError(reason),
                    other => <$error>::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

/// Produces a fresh opaque id for every created record.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// Random UUID v4 ids.
pub fn uuid_ids() -> IdGenerator {
    Box::new(|| uuid::Uuid::new_v4().to_string())
}

/// `prefix_1`, `prefix_2`, ... Handy in tests and demos.
pub fn sequential_ids(prefix: &'static str) -> IdGenerator {
    let counter = Arc::new(AtomicU64::new(1));
    Box::new(move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{id}")
    })
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: String,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
    Action {
        id: String,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns all writes to one collection.
///
/// Every request loads the collection, applies the change and saves the whole
/// collection back, so requests for the same collection never interleave
/// inside this process. A write never goes ahead on a collection that failed
/// to load: the request fails with [`FrameworkError::Store`] and the stored
/// document is left as it was.
pub struct CollectionActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Arc<dyn RecordStore>,
    next_id: IdGenerator,
}

impl<T: Entity> CollectionActor<T> {
    pub fn new(
        buffer_size: usize,
        store: Arc<dyn RecordStore>,
        next_id: IdGenerator,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id,
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "collection_actor", skip(self), fields(collection = T::COLLECTION))]
    pub async fn run(mut self) {
        info!("Collection actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_get(&id)));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.load()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(&id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(&id, action));
                }
            }
        }
        info!("Collection actor stopped");
    }

    fn load(&self) -> Vec<T> {
        load_records(self.store.as_ref(), T::COLLECTION)
    }

    fn load_for_write(&self) -> Result<Collection<T>, FrameworkError> {
        Collection::load(self.store.as_ref(), T::COLLECTION).map_err(|e| {
            warn!(error = %e, "Refusing to write over unreadable collection");
            FrameworkError::from(e)
        })
    }

    fn save(&self, records: &Collection<T>) -> Result<(), FrameworkError> {
        records.save(self.store.as_ref()).map_err(|e| {
            warn!(error = %e, "Failed to save collection");
            FrameworkError::from(e)
        })
    }

    fn handle_create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let mut records = self.load_for_write()?;
        let id = (self.next_id)();

        let mut item = T::from_create(id, payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;

        records.push(item.clone());
        self.save(&records)?;
        info!(id = item.id(), "Record created");
        Ok(item)
    }

    fn handle_get(&self, id: &str) -> Option<T> {
        let item = self.load().into_iter().find(|r| r.id() == id);
        if item.is_none() {
            debug!(id, "Record not found");
        }
        item
    }

    fn handle_update(&self, id: &str, patch: T::Patch) -> Result<T, FrameworkError> {
        let mut records = self.load_for_write()?;
        let slot = records
            .records_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        slot.on_update(patch).map_err(FrameworkError::Rejected)?;
        let updated = slot.clone();

        self.save(&records)?;
        info!(id, "Record updated");
        Ok(updated)
    }

    fn handle_delete(&self, id: &str) -> Result<(), FrameworkError> {
        let mut records = self.load_for_write()?;
        records
            .records()
            .find(|r| r.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?
            .on_delete()
            .map_err(FrameworkError::Rejected)?;
        records.retain(|r| r.id() != id);

        self.save(&records)?;
        info!(id, "Record deleted");
        Ok(())
    }

    fn handle_action(&self, id: &str, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        let mut records = self.load_for_write()?;
        let slot = records
            .records_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        let result = slot.handle_action(action).map_err(FrameworkError::Rejected)?;

        self.save(&records)?;
        Ok(result)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: String) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: String, patch: T::Patch) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: String) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(&self, id: String, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NotePatch {
        text: Option<String>,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    impl Entity for Note {
        type CreatePayload = NoteCreate;
        type Patch = NotePatch;
        type Action = NoteAction;
        type ActionResult = bool;

        const COLLECTION: &'static str = "notes";

        fn id(&self) -> &str {
            &self.id
        }

        fn from_create(id: String, payload: NoteCreate) -> Result<Self, String> {
            if payload.text.is_empty() {
                return Err("text required".to_string());
            }
            Ok(Self {
                id,
                text: payload.text,
                pinned: false,
            })
        }

        fn on_update(&mut self, patch: NotePatch) -> Result<(), String> {
            if let Some(text) = patch.text {
                self.text = text;
            }
            Ok(())
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<bool, String> {
            match action {
                NoteAction::Pin => {
                    if self.pinned {
                        Ok(false)
                    } else {
                        self.pinned = true;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn start(store: Arc<MemoryStore>) -> ResourceClient<Note> {
        let (actor, client) = CollectionActor::<Note>::new(10, store, sequential_ids("note"));
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_collection_actor_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let client = start(store.clone());

        let first = client.create(NoteCreate { text: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { text: "b".into() }).await.unwrap();
        assert_eq!(first.id, "note_1");
        assert_eq!(second.id, "note_2");

        // Writes land in the store as a single array.
        let stored: Vec<Note> = load_records(store.as_ref(), "notes");
        assert_eq!(stored.len(), 2);

        let updated = client
            .update(first.id.clone(), NotePatch { text: Some("a2".into()) })
            .await
            .unwrap();
        assert_eq!(updated.text, "a2");

        // Update replaces the slot in place, keeping collection order.
        let listed = client.list().await.unwrap();
        assert_eq!(listed.iter().map(|n| n.text.as_str()).collect::<Vec<_>>(), vec!["a2", "b"]);

        client.delete(first.id.clone()).await.unwrap();
        assert_eq!(client.get(first.id.clone()).await.unwrap(), None);
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_actions_are_saved() {
        let store = Arc::new(MemoryStore::new());
        let client = start(store);

        let note = client.create(NoteCreate { text: "a".into() }).await.unwrap();

        assert!(client.perform_action(note.id.clone(), NoteAction::Pin).await.unwrap());
        assert!(!client.perform_action(note.id.clone(), NoteAction::Pin).await.unwrap());
        assert!(client.get(note.id).await.unwrap().unwrap().pinned);
    }

    #[tokio::test]
    async fn test_errors() {
        let store = Arc::new(MemoryStore::new());
        let client = start(store);

        let rejected = client.create(NoteCreate { text: String::new() }).await;
        assert_eq!(rejected, Err(FrameworkError::Rejected("text required".into())));
        assert!(client.list().await.unwrap().is_empty());

        let missing = client.delete("nope".into()).await;
        assert_eq!(missing, Err(FrameworkError::NotFound("nope".into())));

        let missing = client.update("nope".into(), NotePatch { text: None }).await;
        assert_eq!(missing, Err(FrameworkError::NotFound("nope".into())));
    }

    #[tokio::test]
    async fn test_unreadable_record_is_kept_on_write() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                "notes",
                r#"[{"id":"n1","text":"a","pinned":false},{"id":"n2","text":"b"}]"#.to_string(),
            )
            .unwrap();
        let client = start(store.clone());

        // n2 lacks `pinned` and is not a valid Note; it is hidden but kept.
        assert_eq!(client.list().await.unwrap().len(), 1);
        client.create(NoteCreate { text: "c".into() }).await.unwrap();
        client.delete("n1".into()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&store.load("notes").unwrap().unwrap()).unwrap();
        let ids: Vec<_> = raw
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["n2", "note_1"]);
    }

    #[tokio::test]
    async fn test_corrupt_collection_blocks_writes() {
        let store = Arc::new(MemoryStore::new());
        store.save("notes", "[{\"id\":".to_string()).unwrap();
        let client = start(store.clone());

        let result = client.create(NoteCreate { text: "a".into() }).await;
        assert!(matches!(result, Err(FrameworkError::Store(_))));
        assert_eq!(store.load("notes").unwrap().as_deref(), Some("[{\"id\":"));

        // Reads still fall back to an empty list.
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = CollectionActor::<Note>::new(1, Arc::new(MemoryStore::new()), uuid_ids());
        drop(actor);

        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let next = uuid_ids();
        assert_ne!(next(), next());
    }
}
