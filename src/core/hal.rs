//! HAL-style hypermedia representations
//!
//! Entities are rendered as their own fields plus a `_links` object.
//! Collections put their items under `_embedded.<singular>List`, the way
//! HAL collection resources are usually shaped:
//!
//! ```json
//! {
//!   "_embedded": { "orderList": [ { "id": "…", "_links": { "self": { "href": "/orders/…" } } } ] },
//!   "_links": { "self": { "href": "/orders" } }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Relation name of the link pointing at the resource itself
pub const SELF_REL: &str = "self";

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Ordered map of relation name to link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(IndexMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Add (or replace) a link under `rel`
    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.0.insert(rel.into(), link);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }
}

/// Builds absolute or root-relative hrefs from a configured public base URL
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base_url: Arc<str>,
}

impl LinkBuilder {
    /// `base_url` is prepended to every path; trailing slashes are dropped.
    /// An empty base yields root-relative links.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link to `/{segments...}`
    pub fn link<I, S>(&self, segments: I) -> Link
    where
        I: IntoIterator<Item = S>,
        S: Display,
    {
        let mut href = self.base_url.to_string();
        for segment in segments {
            href.push('/');
            href.push_str(&segment.to_string());
        }
        if href.is_empty() {
            href.push('/');
        }
        Link { href }
    }
}

/// An entity together with its links
#[derive(Debug, Clone, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,

    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }

    /// The `self` href, used for `Location` headers
    pub fn self_href(&self) -> Option<&str> {
        self.links.get(SELF_REL).map(|l| l.href.as_str())
    }
}

/// A collection of entity models plus collection-level links
#[derive(Debug, Clone, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded", skip_serializing_if = "IndexMap::is_empty")]
    pub embedded: IndexMap<String, Vec<EntityModel<T>>>,

    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    /// Embed `items` under `<singular>List`. An empty collection has no
    /// `_embedded` section at all.
    pub fn new(singular: &str, items: Vec<EntityModel<T>>, links: Links) -> Self {
        let mut embedded = IndexMap::new();
        if !items.is_empty() {
            embedded.insert(format!("{}List", singular), items);
        }
        Self { embedded, links }
    }
}

/// Projection of an entity into its external representation
///
/// Implementations are pure: they look only at the entity and never touch
/// the store.
pub trait ModelAssembler<T> {
    fn to_model(&self, entity: T) -> EntityModel<T>;

    fn to_collection_model(&self, entities: Vec<T>) -> CollectionModel<T>;
}
