use dictionary::{Dictionary, WordRecord};
use rand::{rngs::StdRng, SeedableRng};

use crate::command::{self, Input};
use crate::error::StorageError;
use crate::notebook::{Notebook, Submission};
use crate::saved_words::SavedWords;

pub const NOT_FOUND_MESSAGE: &str = "未找到该词，请核对拼写后重试。";

/// State of the main search view. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum MainView {
    Idle,
    Loading { word: String },
    Loaded(WordRecord),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Saved(String),
    NotebookOpened,
    Searched,
}

pub struct App {
    dict: Dictionary,
    saved: SavedWords,
    view: MainView,
    notebook: Option<Notebook>,
    rng: StdRng,
}

impl App {
    pub fn new(dict: Dictionary, saved: SavedWords) -> Self {
        Self {
            dict,
            saved,
            view: MainView::Idle,
            notebook: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn view(&self) -> &MainView {
        &self.view
    }

    /// The record on display; only present while the view is `Loaded`.
    pub fn record(&self) -> Option<&WordRecord> {
        match &self.view {
            MainView::Loaded(record) => Some(record),
            _ => None,
        }
    }

    pub fn saved(&self) -> &SavedWords {
        &self.saved
    }

    pub fn notebook(&self) -> Option<&Notebook> {
        self.notebook.as_ref()
    }

    pub async fn submit(&mut self, line: &str) -> Result<Outcome, StorageError> {
        self.dispatch(command::parse(line)).await
    }

    pub async fn dispatch(&mut self, input: Input) -> Result<Outcome, StorageError> {
        match input {
            Input::Empty => Ok(Outcome::Nothing),
            Input::Add(arg) => self.add(arg).await,
            Input::List | Input::Test => {
                self.open_notebook();
                Ok(Outcome::NotebookOpened)
            }
            Input::Search(word) => Ok(self.search(&word).await),
        }
    }

    async fn add(&mut self, arg: Option<String>) -> Result<Outcome, StorageError> {
        let word = match arg {
            Some(arg) if !self.saved.contains(&arg) => arg,
            _ => match self.record() {
                Some(record) if !self.saved.contains(&record.word) => record.word.clone(),
                _ => return Ok(Outcome::Nothing),
            },
        };
        self.saved.insert(&word).await?;
        Ok(Outcome::Saved(word.to_lowercase()))
    }

    pub async fn search(&mut self, word: &str) -> Outcome {
        if !self.begin_search(word) {
            return Outcome::Nothing;
        }
        self.finish_search().await
    }

    /// Enters `Loading` for `word`, dropping any record on display.
    /// Returns `false` and leaves the view alone for a blank word.
    pub fn begin_search(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.view = MainView::Loading {
            word: word.to_string(),
        };
        true
    }

    /// Resolves a pending `Loading` view into `Loaded` or `Error`.
    pub async fn finish_search(&mut self) -> Outcome {
        let word = match &self.view {
            MainView::Loading { word } => word.clone(),
            _ => return Outcome::Nothing,
        };
        self.view = match self.dict.analyze_word(&word).await {
            Ok(record) => {
                tracing::info!(word = %record.word, "word analyzed");
                MainView::Loaded(record)
            }
            Err(_) => MainView::Error(NOT_FOUND_MESSAGE.to_string()),
        };
        Outcome::Searched
    }

    /// Flips whether `word` is saved. Returns whether it is saved afterwards.
    pub async fn toggle_save(&mut self, word: &str) -> Result<bool, StorageError> {
        self.saved.toggle(word).await
    }

    pub fn open_notebook(&mut self) {
        self.notebook = Some(Notebook::new());
    }

    pub fn close_notebook(&mut self) {
        self.notebook = None;
    }

    pub fn start_quiz(&mut self) -> bool {
        match self.notebook.as_mut() {
            Some(notebook) => notebook.start_quiz(&self.saved, &mut self.rng),
            None => false,
        }
    }

    pub fn next_quiz(&mut self) -> bool {
        match self.notebook.as_mut() {
            Some(notebook) => notebook.next(&self.saved, &mut self.rng),
            None => false,
        }
    }

    pub fn back_to_list(&mut self) {
        if let Some(notebook) = self.notebook.as_mut() {
            notebook.back_to_list();
        }
    }

    pub async fn submit_quiz_answer(&mut self, answer: &str) -> Submission {
        match self.notebook.as_mut() {
            Some(notebook) => notebook.submit_answer(&self.dict, answer).await,
            None => Submission::Ignored,
        }
    }
}
