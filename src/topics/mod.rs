//! Deck acquisition.
//!
//! A `TopicSource` hands the host a catalog of topics and builds a
//! `TopicDeck` for the one the player picks. The engine never fetches
//! anything itself; sources are called between sessions, never mid-game,
//! and a failed fetch surfaces as an error without touching any session.
//!
//! Three implementations:
//! - `ApiTopicSource`: the category endpoint of the study-games service
//! - `FileTopicSource`: a local `topics.json` fallback
//! - `StaticTopicSource`: an in-memory catalog (tests, embedded decks)

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::{EngineError, Pair, TopicDeck};

/// Topics and their pair lists, keyed by topic name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: FxHashMap<String, Vec<Pair>>,
}

impl TopicCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, topic: impl Into<String>, pairs: Vec<Pair>) {
        self.topics.insert(topic.into(), pairs);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topic names, sorted for a stable menu order.
    #[must_use]
    pub fn topic_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the deck for one topic.
    pub fn deck(&self, topic: &str) -> Result<TopicDeck, EngineError> {
        let pairs = self
            .topics
            .get(topic)
            .ok_or_else(|| EngineError::UnknownTopic(topic.to_string()))?;
        TopicDeck::new(pairs.clone())
    }
}

impl FromIterator<(String, Vec<Pair>)> for TopicCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Pair>)>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().collect(),
        }
    }
}

/// Where decks come from.
///
/// Load failures are surfaced to the caller as-is; nothing here retries.
pub trait TopicSource {
    /// Fetch the full catalog.
    fn catalog(&self) -> Result<TopicCatalog, EngineError>;

    /// Fetch one topic's deck.
    fn fetch_deck(&self, topic: &str) -> Result<TopicDeck, EngineError> {
        self.catalog()?.deck(topic)
    }
}

/// Wire shape of the category endpoint:
/// `{"success": true, "data": [{"gamedata": {"Topic": [{term, definition}]}}]}`.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    data: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    gamedata: FxHashMap<String, Vec<Pair>>,
}

/// Merge a service payload into a catalog. Entries later in `data` win on
/// duplicate topic names, matching the service's own ordering contract.
fn catalog_from_response(response: CatalogResponse) -> Result<TopicCatalog, EngineError> {
    if !response.success {
        return Err(EngineError::TopicPayload(
            "service reported failure".to_string(),
        ));
    }

    let mut catalog = TopicCatalog::new();
    for entry in response.data {
        for (topic, pairs) in entry.gamedata {
            catalog.insert(topic, pairs);
        }
    }

    if catalog.is_empty() {
        return Err(EngineError::TopicPayload(
            "payload contains no topics".to_string(),
        ));
    }

    Ok(catalog)
}

/// Catalog served over HTTP by the study-games backend.
#[derive(Debug)]
pub struct ApiTopicSource {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiTopicSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(10))
                .build(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TopicSource for ApiTopicSource {
    fn catalog(&self) -> Result<TopicCatalog, EngineError> {
        let response: CatalogResponse = self.agent.get(&self.base_url).call()?.into_json()?;
        let catalog = catalog_from_response(response)?;
        log::debug!(
            "loaded {} topics from {}",
            catalog.len(),
            self.base_url
        );
        Ok(catalog)
    }
}

/// Local fallback file, shaped `{"Topic": [{term, definition}]}`.
#[derive(Debug)]
pub struct FileTopicSource {
    path: PathBuf,
}

impl FileTopicSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TopicSource for FileTopicSource {
    fn catalog(&self) -> Result<TopicCatalog, EngineError> {
        let file = File::open(&self.path)?;
        let topics: FxHashMap<String, Vec<Pair>> = serde_json::from_reader(BufReader::new(file))?;
        if topics.is_empty() {
            return Err(EngineError::TopicPayload(
                "topics file is empty".to_string(),
            ));
        }
        Ok(topics.into_iter().collect())
    }
}

/// Fixed in-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticTopicSource {
    catalog: TopicCatalog,
}

impl StaticTopicSource {
    #[must_use]
    pub fn new(catalog: TopicCatalog) -> Self {
        Self { catalog }
    }
}

impl TopicSource for StaticTopicSource {
    fn catalog(&self) -> Result<TopicCatalog, EngineError> {
        Ok(self.catalog.clone())
    }
}
