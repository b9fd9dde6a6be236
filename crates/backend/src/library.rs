//! In-memory library snapshots and the per-game achievement memo
//!
//! Snapshots are immutable and replaced wholesale on refresh, so readers
//! holding an older `Arc` are never affected by a concurrent reload.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use steam_analyzer_core::{compute_library_stats, AchievementUnlock, GameRecord, LibraryStats, LibraryView, PlayerProfile};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
pub struct LibrarySnapshot {
    pub profile: PlayerProfile,
    pub games: Vec<GameRecord>,
    pub stats: Option<LibraryStats>,
    pub is_demo: bool,
    pub fetched_at: DateTime<Utc>,
    /// Assigned by [`LibraryStore::replace`], unique per stored snapshot
    pub generation: u64,
}

impl LibrarySnapshot {
    pub fn new(profile: PlayerProfile, games: Vec<GameRecord>, is_demo: bool) -> Self {
        let stats = compute_library_stats(&games);
        Self {
            profile,
            games,
            stats,
            is_demo,
            fetched_at: Utc::now(),
            generation: 0,
        }
    }

    pub fn view(&self) -> LibraryView {
        LibraryView {
            profile: self.profile.clone(),
            stats: self.stats.clone(),
            is_demo: self.is_demo,
            fetched_at: self.fetched_at,
        }
    }
}

/// Latest snapshot per Steam ID
#[derive(Default)]
pub struct LibraryStore {
    snapshots: RwLock<HashMap<String, Arc<LibrarySnapshot>>>,
    next_generation: AtomicU64,
}

impl LibraryStore {
    pub async fn get(&self, steam_id: &str) -> Option<Arc<LibrarySnapshot>> {
        self.snapshots.read().await.get(steam_id).cloned()
    }

    pub async fn replace(&self, steam_id: &str, mut snapshot: LibrarySnapshot) -> Arc<LibrarySnapshot> {
        snapshot.generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let snapshot = Arc::new(snapshot);
        self.snapshots
            .write()
            .await
            .insert(steam_id.to_string(), Arc::clone(&snapshot));
        snapshot
    }
}

type CacheKey = (String, u64, u64);

/// Unlock lists memoized per (Steam ID, snapshot generation, appid).
///
/// Failed fetches are memoized as empty lists. Entries of a replaced snapshot
/// are never read again; [`AchievementCache::retain_generation`] drops them.
#[derive(Default)]
pub struct AchievementCache {
    entries: Mutex<HashMap<CacheKey, Arc<Vec<AchievementUnlock>>>>,
}

impl AchievementCache {
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        steam_id: &str,
        generation: u64,
        appid: u64,
        fetch: F,
    ) -> Arc<Vec<AchievementUnlock>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<AchievementUnlock>, E>>,
        E: std::fmt::Display,
    {
        let key = (steam_id.to_string(), generation, appid);
        if let Some(cached) = self.entries.lock().await.get(&key) {
            return Arc::clone(cached);
        }

        let unlocked = match fetch().await {
            Ok(list) => list,
            Err(e) => {
                tracing::info!(steam_id = %steam_id, appid = %appid, error = %e, "Achievement fetch failed");
                Vec::new()
            }
        };

        let mut entries = self.entries.lock().await;
        // Another request may have resolved the same game meanwhile
        Arc::clone(entries.entry(key).or_insert_with(|| Arc::new(unlocked)))
    }

    /// Drop a Steam ID's entries from every snapshot except `generation`
    pub async fn retain_generation(&self, steam_id: &str, generation: u64) {
        self.entries
            .lock()
            .await
            .retain(|(id, entry_generation, _), _| id != steam_id || *entry_generation == generation);
    }

    pub async fn contains(&self, steam_id: &str, generation: u64, appid: u64) -> bool {
        self.entries
            .lock()
            .await
            .contains_key(&(steam_id.to_string(), generation, appid))
    }
}
