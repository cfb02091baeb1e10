//! The word store: canonical word list with durable mutations.

use crate::error::{Result, StoreError};
use crate::persistence::PersistenceAdapter;
use leytext_core::{Record, WordDraft, WordFilter};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use uuid::Uuid;

/// Snapshot published after every committed change.
pub type Snapshot = Arc<[Record]>;

/// Single source of truth for the word list.
///
/// Each mutation holds the list lock from computing the new list until its
/// durable write has finished, so mutations never interleave. Memory is only
/// updated after the write succeeds.
pub struct WordStore<P> {
    adapter: P,
    records: Mutex<Vec<Record>>,
    updates: watch::Sender<Snapshot>,
}

impl<P: PersistenceAdapter> WordStore<P> {
    /// Load the word list once. A failed load starts from an empty list.
    pub async fn open(adapter: P) -> Self {
        let records = match adapter.load().await {
            Ok(records) => {
                tracing::info!("Loaded {} words", records.len());
                records
            }
            Err(e) => {
                tracing::warn!("Failed to load words, starting empty: {}", e);
                Vec::new()
            }
        };
        let (updates, _) = watch::channel(Snapshot::from(records.as_slice()));
        Self {
            adapter,
            records: Mutex::new(records),
            updates,
        }
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Receiver that sees the latest committed word list.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.updates.subscribe()
    }

    /// Re-read the durable copy, e.g. when a screen regains focus.
    ///
    /// If the read fails the in-memory list is kept.
    pub async fn reload(&self) -> Vec<Record> {
        let mut records = self.records.lock().await;
        self.refresh(&mut records).await;
        records.clone()
    }

    /// Records matching `filter`, in stored order. `None` returns everything.
    pub async fn list(&self, filter: Option<&WordFilter>) -> Vec<Record> {
        let records = self.records.lock().await;
        match filter {
            Some(filter) => filter.apply(&records),
            None => records.clone(),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<Record> {
        let records = self.records.lock().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    /// Validate and append a new word.
    pub async fn add(&self, draft: WordDraft) -> Result<Record> {
        let record = Record::create(draft)?;
        let mut records = self.records.lock().await;

        let mut next = records.clone();
        next.push(record.clone());
        self.commit(&mut records, next).await?;

        tracing::info!("Added word {:?} ({})", record.word, record.id);
        Ok(record)
    }

    /// Replace every field of the word with `id`, keeping its position.
    pub async fn update(&self, id: Uuid, draft: WordDraft) -> Result<Record> {
        let mut records = self.records.lock().await;
        let Some(index) = records.iter().position(|r| r.id == id) else {
            return Err(self.stale(&mut records, StoreError::NotFound(id)).await);
        };
        self.replace(&mut records, index, draft).await
    }

    /// Replace every field of the word at `index` of the full list.
    pub async fn update_at(&self, index: usize, draft: WordDraft) -> Result<Record> {
        let mut records = self.records.lock().await;
        if index >= records.len() {
            let len = records.len();
            return Err(self
                .stale(&mut records, StoreError::IndexOutOfRange { index, len })
                .await);
        }
        self.replace(&mut records, index, draft).await
    }

    /// Delete the word with `id`. Later words move up one position.
    pub async fn remove(&self, id: Uuid) -> Result<Record> {
        let mut records = self.records.lock().await;
        let Some(index) = records.iter().position(|r| r.id == id) else {
            return Err(self.stale(&mut records, StoreError::NotFound(id)).await);
        };
        self.splice(&mut records, index).await
    }

    /// Delete the word at `index` of the full list.
    pub async fn remove_at(&self, index: usize) -> Result<Record> {
        let mut records = self.records.lock().await;
        if index >= records.len() {
            let len = records.len();
            return Err(self
                .stale(&mut records, StoreError::IndexOutOfRange { index, len })
                .await);
        }
        self.splice(&mut records, index).await
    }

    async fn replace(
        &self,
        records: &mut Vec<Record>,
        index: usize,
        draft: WordDraft,
    ) -> Result<Record> {
        let record = Record::with_id(records[index].id, draft)?;

        let mut next = records.clone();
        next[index] = record.clone();
        self.commit(records, next).await?;

        tracing::info!("Updated word {:?} ({})", record.word, record.id);
        Ok(record)
    }

    async fn splice(&self, records: &mut Vec<Record>, index: usize) -> Result<Record> {
        let mut next = records.clone();
        let removed = next.remove(index);
        self.commit(records, next).await?;

        tracing::info!("Removed word {:?} ({})", removed.word, removed.id);
        Ok(removed)
    }

    /// Persist `next`, then make it the in-memory list.
    async fn commit(&self, records: &mut Vec<Record>, next: Vec<Record>) -> Result<()> {
        if let Err(e) = self.adapter.save(&next).await {
            tracing::error!("Failed to save words: {}", e);
            return Err(e.into());
        }
        *records = next;
        self.publish(records);
        Ok(())
    }

    /// The caller's view is out of date: reload and hand back `error`.
    async fn stale(&self, records: &mut Vec<Record>, error: StoreError) -> StoreError {
        tracing::warn!("Rejected stale word reference: {}", error);
        self.refresh(records).await;
        error
    }

    async fn refresh(&self, records: &mut Vec<Record>) {
        match self.adapter.load().await {
            Ok(loaded) => {
                *records = loaded;
                self.publish(records);
            }
            Err(e) => tracing::warn!("Failed to reload words, keeping current list: {}", e),
        }
    }

    fn publish(&self, records: &[Record]) {
        self.updates.send_replace(Snapshot::from(records));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStore;
    use crate::persistence::ScopedJsonAdapter;
    use leytext_core::{Category, Language, LanguagePair, ValidationError};
    use pretty_assertions::assert_eq;

    async fn empty_store() -> WordStore<ScopedJsonAdapter<MemoryStore>> {
        WordStore::open(ScopedJsonAdapter::new(Arc::new(MemoryStore::new()), "words")).await
    }

    #[tokio::test]
    async fn add_appends_last() {
        let store = empty_store().await;
        store.add(WordDraft::new("Isa", "One")).await.unwrap();
        let added = store.add(WordDraft::new("Duha", "Two")).await.unwrap();

        let words = store.list(None).await;
        assert_eq!(words.len(), 2);
        assert_eq!(words.last(), Some(&added));
    }

    #[tokio::test]
    async fn invalid_add_changes_nothing() {
        let store = empty_store().await;
        store.add(WordDraft::new("Isa", "One")).await.unwrap();

        let result = store.add(WordDraft::new("Duha", "")).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyMeaning))
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = empty_store().await;
        let original = store
            .add(
                WordDraft::new("Isa", "One")
                    .with_example("Isa nga saging")
                    .with_category(Category::Numbers),
            )
            .await
            .unwrap();

        let draft = WordDraft::new("Usa", "One")
            .with_languages(LanguagePair::new(Language::Bisaya, Language::English));
        let updated = store.update(original.id, draft.clone()).await.unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(store.list(None).await[0].to_draft(), draft);
        assert_eq!(updated.example, None);
        assert_eq!(updated.category, None);
    }

    #[tokio::test]
    async fn update_at_out_of_range() {
        let store = empty_store().await;
        let result = store.update_at(0, WordDraft::new("Isa", "One")).await;
        assert!(matches!(
            result,
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[tokio::test]
    async fn index_check_precedes_validation() {
        let store = empty_store().await;
        let result = store.update_at(3, WordDraft::default()).await;
        assert!(matches!(result, Err(StoreError::IndexOutOfRange { .. })));
    }

    #[tokio::test]
    async fn remove_unknown_id() {
        let store = empty_store().await;
        let id = Uuid::new_v4();
        assert!(matches!(store.remove(id).await, Err(StoreError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn subscribers_see_commits() {
        let store = empty_store().await;
        let mut rx = store.subscribe();
        store.add(WordDraft::new("Isa", "One")).await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
