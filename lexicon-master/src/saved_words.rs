use rand::{seq::SliceRandom, Rng};

use crate::error::StorageError;
use crate::storage::{load_saved_words, save_saved_words, KeyValueStore};

/// The notebook's word list, owned together with the store it is persisted to.
///
/// Words are kept lowercase and unique in insertion order. Every mutation is
/// written back before the call returns.
pub struct SavedWords {
    words: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl SavedWords {
    pub async fn load(store: impl KeyValueStore + 'static) -> Result<Self, StorageError> {
        let store: Box<dyn KeyValueStore> = Box::new(store);
        let mut words: Vec<String> = Vec::new();
        for word in load_saved_words(store.as_ref()).await? {
            let word = word.to_lowercase();
            if !words.contains(&word) {
                words.push(word);
            }
        }
        Ok(Self { words, store })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.contains(&word)
    }

    /// Flips membership of `word`. Returns whether the word is saved afterwards.
    /// The list only changes once storage has accepted it.
    pub async fn toggle(&mut self, word: &str) -> Result<bool, StorageError> {
        let word = word.to_lowercase();
        let mut words = self.words.clone();
        let saved = if words.contains(&word) {
            words.retain(|saved| saved != &word);
            false
        } else {
            words.push(word);
            true
        };
        self.commit(words).await?;
        Ok(saved)
    }

    /// Saves `word` unless it is already present. Returns whether it was added.
    pub async fn insert(&mut self, word: &str) -> Result<bool, StorageError> {
        if self.contains(word) {
            return Ok(false);
        }
        self.toggle(word).await
    }

    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    async fn commit(&mut self, words: Vec<String>) -> Result<(), StorageError> {
        save_saved_words(self.store.as_ref(), &words).await?;
        self.words = words;
        Ok(())
    }
}
