//! # Playlist Synchronization
//!
//! Drives one run end to end:
//!
//! 1. Find or create the target playlist (skipped in dry-run)
//! 2. Optionally clear its existing entries
//! 3. Build the catalog from the master playlists
//! 4. Resolve every input title, in file order
//! 5. Submit all resolved tracks in one batch add
//!
//! Collaborator failures end the run with an [`Error`](crate::Error);
//! titles without a match are only recorded in the [`SyncReport`].

use crate::{
    Result,
    config::SyncConfig,
    debug, info,
    matching::{MatchResolver, MatchResult, Scorer, TokenSetScorer, build_catalog},
    service::PlaylistSink,
    success,
    types::PlaylistRef,
    warning,
};

/// Name shown for the placeholder playlist used in dry-run.
pub const DRY_RUN_PLAYLIST_NAME: &str = "(dry-run) [No Playlist]";

/// Asked before existing entries of the target are deleted.
pub type ConfirmFn = Box<dyn FnMut(&str) -> bool>;

/// What happened to a single input title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Matched and submitted to the target playlist.
    Added,
    /// Matched during a dry-run.
    WouldAdd,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOutcome {
    pub title: String,
    pub disposition: Disposition,
}

/// Summary of one run, in input order.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub playlist: PlaylistRef,
    pub requested: usize,
    pub resolved: usize,
    pub added: usize,
    pub not_found: usize,
    /// Entries deleted from the target before adding.
    pub removed: usize,
    pub not_found_titles: Vec<String>,
    pub outcomes: Vec<TitleOutcome>,
}

pub struct Synchronizer<S = TokenSetScorer> {
    config: SyncConfig,
    resolver: MatchResolver<S>,
    confirm: Option<ConfirmFn>,
}

impl Synchronizer<TokenSetScorer> {
    pub fn new(config: SyncConfig) -> Self {
        Self::with_scorer(config, TokenSetScorer)
    }
}

impl<S: Scorer> Synchronizer<S> {
    pub fn with_scorer(config: SyncConfig, scorer: S) -> Self {
        let resolver = MatchResolver::new(scorer, config.candidate_limit);
        Self {
            config,
            resolver,
            confirm: None,
        }
    }

    /// Sets the question asked before clearing a non-empty target playlist.
    /// Without it existing entries are only removed with `force_reset`.
    pub fn with_confirm(mut self, confirm: impl FnMut(&str) -> bool + 'static) -> Self {
        self.confirm = Some(Box::new(confirm));
        self
    }

    /// Finds the target playlist by exact name or creates it.
    ///
    /// In dry-run the service is not contacted and a placeholder is returned.
    pub async fn target_playlist<P: PlaylistSink>(&self, sink: &mut P) -> Result<PlaylistRef> {
        if self.config.dry_run {
            return Ok(PlaylistRef {
                id: "dry-run".to_string(),
                name: DRY_RUN_PLAYLIST_NAME.to_string(),
            });
        }

        if let Some(playlist) = sink.find_playlist_by_name(&self.config.playlist).await? {
            return Ok(playlist);
        }

        info!("Creating playlist \"{}\"", self.config.playlist);
        sink.create_playlist(
            &self.config.playlist,
            &self.config.description,
            self.config.visibility,
        )
        .await
    }

    /// Deletes the entries already in `playlist` when forced or confirmed.
    ///
    /// Returns how many entries were removed. Never touches the service in
    /// dry-run.
    pub async fn reset_playlist<P: PlaylistSink>(
        &mut self,
        sink: &mut P,
        playlist: &PlaylistRef,
    ) -> Result<usize> {
        if self.config.dry_run {
            return Ok(0);
        }

        let items = sink.playlist_items(&playlist.id).await?;
        if items.is_empty() {
            return Ok(0);
        }

        let approved = self.config.force_reset || {
            let question = format!(
                "Playlist \"{}\" already has {} songs. Delete them before adding?",
                playlist.name,
                items.len()
            );
            self.confirm.as_mut().is_some_and(|confirm| confirm(&question))
        };

        if !approved {
            info!("Keeping {} existing songs in \"{}\"", items.len(), playlist.name);
            return Ok(0);
        }

        sink.remove_items(&playlist.id, &items).await?;
        success!("Removed {} songs from \"{}\"", items.len(), playlist.name);
        Ok(items.len())
    }

    /// Runs the whole synchronization for already normalized `titles`.
    pub async fn sync<P: PlaylistSink>(
        &mut self,
        service: &mut P,
        titles: &[String],
    ) -> Result<SyncReport> {
        let playlist = self.target_playlist(service).await?;
        info!("Playlist: {}", playlist.name);

        let removed = self.reset_playlist(service, &playlist).await?;

        let catalog = build_catalog(service, &self.config.master_marker).await?;
        if catalog.is_empty() {
            warning!(
                "No songs found in playlists containing \"{}\"",
                self.config.master_marker
            );
        } else {
            info!("Catalog holds {} songs", catalog.len());
        }

        info!("Processing {} songs from file", titles.len());

        let mut native_ids: Vec<String> = Vec::new();
        let mut outcomes: Vec<TitleOutcome> = Vec::with_capacity(titles.len());

        for title in titles {
            let disposition = match self.resolver.resolve(title, &catalog) {
                MatchResult::Found(item) => {
                    if self.config.dry_run {
                        success!("(dry-run) song found for: {}", title);
                        Disposition::WouldAdd
                    } else {
                        debug!(self.config.verbose, "{} -> {}", title, item.title);
                        native_ids.push(item.native_id.clone());
                        Disposition::Added
                    }
                }
                MatchResult::NotFound { rejected } => {
                    for candidate in &rejected {
                        debug!(
                            self.config.verbose,
                            "Song name not in title: {}, {}", title, candidate
                        );
                    }
                    warning!("Could not find matching song for: {}", title);
                    Disposition::NotFound
                }
            };

            outcomes.push(TitleOutcome {
                title: title.clone(),
                disposition,
            });
        }

        if !native_ids.is_empty() && !self.config.dry_run {
            service.batch_add(&playlist.id, &native_ids).await?;
            success!("Added {} songs to \"{}\"", native_ids.len(), playlist.name);
        }

        let not_found_titles: Vec<String> = outcomes
            .iter()
            .filter(|o| o.disposition == Disposition::NotFound)
            .map(|o| o.title.clone())
            .collect();

        Ok(SyncReport {
            playlist,
            requested: titles.len(),
            resolved: outcomes.len() - not_found_titles.len(),
            added: native_ids.len(),
            not_found: not_found_titles.len(),
            removed,
            not_found_titles,
            outcomes,
        })
    }
}
