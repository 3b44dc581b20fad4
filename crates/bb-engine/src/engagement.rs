//! # Engagement Tracker
//!
//! Bookmarks, follows, and reaction counters keyed by post id. Bookmark and
//! follow sets are loaded once at construction and written through after
//! every toggle; reaction counters are session-only and never decrement.

use std::collections::HashSet;
use std::sync::Arc;

use bb_core::error::Result;
use bb_core::models::{Post, ReactionCounts, ReactionKind};
use bb_core::traits::{keys, load_or, save, KvStore};

pub struct EngagementTracker {
    store: Arc<dyn KvStore>,
    bookmarks: HashSet<u64>,
    follows: HashSet<u64>,
    reactions: ReactionCounts,
}

impl EngagementTracker {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let bookmarks: Vec<u64> = load_or(store.as_ref(), keys::BOOKMARKED_THREADS, Vec::new);
        let follows: Vec<u64> = load_or(store.as_ref(), keys::FOLLOWED_DISCUSSIONS, Vec::new);
        Self {
            store,
            bookmarks: bookmarks.into_iter().collect(),
            follows: follows.into_iter().collect(),
            reactions: ReactionCounts::new(),
        }
    }

    /// Flips bookmark membership for `post_id` and writes the set through.
    /// Returns the new membership. Calling twice restores the original
    /// state; an id no post carries is still a safe toggle, never an error.
    pub fn toggle_bookmark(&mut self, post_id: u64) -> bool {
        let member = toggle(&mut self.bookmarks, post_id);
        persist_set(self.store.as_ref(), keys::BOOKMARKED_THREADS, &self.bookmarks);
        tracing::debug!(post_id, bookmarked = member, "bookmark toggled");
        member
    }

    /// Symmetric to `toggle_bookmark`, tracked in its own set.
    pub fn toggle_follow(&mut self, post_id: u64) -> bool {
        let member = toggle(&mut self.follows, post_id);
        persist_set(self.store.as_ref(), keys::FOLLOWED_DISCUSSIONS, &self.follows);
        tracing::debug!(post_id, following = member, "follow toggled");
        member
    }

    pub fn is_bookmarked(&self, post_id: u64) -> bool {
        self.bookmarks.contains(&post_id)
    }

    pub fn is_following(&self, post_id: u64) -> bool {
        self.follows.contains(&post_id)
    }

    /// Increments the (post, kind) counter by exactly one and returns the
    /// new count. There is no inverse operation.
    pub fn record_reaction(&mut self, post_id: u64, kind: ReactionKind) -> u32 {
        let counter = self
            .reactions
            .entry(post_id)
            .or_default()
            .entry(kind)
            .or_insert(0);
        *counter += 1;
        tracing::debug!(post_id, kind = kind.as_str(), count = *counter, "reaction recorded");
        *counter
    }

    /// String-keyed surface for reaction kinds coming off the host UI.
    pub fn record_reaction_named(&mut self, post_id: u64, kind: &str) -> Result<u32> {
        let kind: ReactionKind = kind.parse()?;
        Ok(self.record_reaction(post_id, kind))
    }

    /// Recorded count for a (post, kind) pair; absent entries read 0.
    /// For the displayed `love` figure use `effective_like_count`.
    pub fn reaction_count(&self, post_id: u64, kind: ReactionKind) -> u32 {
        self.reactions
            .get(&post_id)
            .and_then(|counts| counts.get(&kind))
            .copied()
            .unwrap_or(0)
    }

    /// The recorded `love` count if any reaction landed this session, else
    /// the post's seeded baseline. Only `love` carries a baseline;
    /// `insightful` and `curious` always start from zero.
    pub fn effective_like_count(&self, post: &Post) -> u32 {
        self.reactions
            .get(&post.id)
            .and_then(|counts| counts.get(&ReactionKind::Love))
            .copied()
            .unwrap_or(post.like_count)
    }
}

fn toggle(set: &mut HashSet<u64>, id: u64) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}

// Persisted as a sorted sequence so the durable record is stable across
// runs regardless of hash iteration order.
fn persist_set(store: &dyn KvStore, key: &str, set: &HashSet<u64>) {
    let mut ids: Vec<u64> = set.iter().copied().collect();
    ids.sort_unstable();
    save(store, key, &ids);
}
