use std::collections::HashMap;

use crate::{
    Result,
    service::CatalogSource,
    types::{CatalogItem, PlaylistRef},
};

use super::normalize;

/// Tracks of all master playlists keyed by normalized title.
///
/// Keys keep the position of their first insertion; inserting an existing key
/// again replaces the item only. The order is what breaks exact score ties
/// in the resolver.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, CatalogItem)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under `key` as given; callers normalize the key.
    pub fn insert(&mut self, key: String, item: CatalogItem) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = item,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, item));
            }
        }
    }

    /// Inserts `item` under the normalized form of its title.
    pub fn add_item(&mut self, item: CatalogItem) {
        self.insert(normalize(&item.title), item);
    }

    pub fn get(&self, key: &str) -> Option<&CatalogItem> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for item in iter {
            catalog.add_item(item);
        }
        catalog
    }
}

pub fn is_master_playlist(name: &str, marker: &str) -> bool {
    name.to_lowercase().contains(&marker.to_lowercase())
}

/// Playlists of the account whose name contains `marker`, case-insensitively.
pub async fn find_master_playlists<S: CatalogSource>(
    source: &mut S,
    marker: &str,
) -> Result<Vec<PlaylistRef>> {
    let playlists = source.my_playlists().await?;
    Ok(playlists
        .into_iter()
        .filter(|p| is_master_playlist(&p.name, marker))
        .collect())
}

/// Builds the catalog from every master playlist.
///
/// Items are flattened in playlist order and keyed by their normalized title,
/// so a later duplicate title replaces the earlier item. No master playlist
/// means an empty catalog, not an error. Source failures propagate unchanged.
pub async fn build_catalog<S: CatalogSource>(source: &mut S, marker: &str) -> Result<Catalog> {
    let masters = find_master_playlists(source, marker).await?;

    let mut items: Vec<CatalogItem> = Vec::new();
    for playlist in &masters {
        items.extend(source.playlist_items(&playlist.id).await?);
    }

    Ok(items.into_iter().collect())
}
