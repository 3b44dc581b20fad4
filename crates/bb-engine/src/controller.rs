//! # Panel Controller
//!
//! Orchestration only: routes host events to the chat pipeline, the filter
//! engine, and the engagement tracker, and owns the ephemeral selection
//! state (active tab, filter criteria) that is never persisted.

use std::sync::Arc;

use bb_core::error::Result;
use bb_core::models::{ActiveTab, FilterCriteria, Forum, Post};
use bb_core::traits::{GuestNamer, KvStore};

use crate::chat::ChatPipeline;
use crate::engagement::EngagementTracker;
use crate::filter::{filter_forums, filter_posts};

/// The injected reference dataset. The panel treats it as immutable and
/// never persists it.
#[derive(Debug, Clone, Default)]
pub struct PanelDataset {
    pub forums: Vec<Forum>,
    pub posts: Vec<Post>,
    pub trending_topics: Vec<String>,
}

pub struct PanelController {
    dataset: PanelDataset,
    engagement: EngagementTracker,
    chat: ChatPipeline,
    active_tab: ActiveTab,
    criteria: FilterCriteria,
}

impl PanelController {
    pub fn new(
        store: Arc<dyn KvStore>,
        namer: Arc<dyn GuestNamer>,
        dataset: PanelDataset,
    ) -> Self {
        Self {
            engagement: EngagementTracker::new(Arc::clone(&store)),
            chat: ChatPipeline::new(store, namer),
            dataset,
            active_tab: ActiveTab::default(),
            criteria: FilterCriteria::default(),
        }
    }

    // ── Chat events ─────────────────────────────────────────────────────

    pub fn on_submit_message(&self, text: &str) -> bool {
        self.chat.submit_message(text)
    }

    pub fn on_typing_activity(&self) {
        self.chat.notify_typing();
    }

    // ── Engagement events ───────────────────────────────────────────────

    pub fn on_toggle_bookmark(&mut self, post_id: u64) -> bool {
        self.engagement.toggle_bookmark(post_id)
    }

    pub fn on_toggle_follow(&mut self, post_id: u64) -> bool {
        self.engagement.toggle_follow(post_id)
    }

    /// `kind` arrives as the UI's string form; unknown names are rejected.
    pub fn on_react(&mut self, post_id: u64, kind: &str) -> Result<u32> {
        self.engagement.record_reaction_named(post_id, kind)
    }

    // ── Browsing events ─────────────────────────────────────────────────

    pub fn on_search(&mut self, text: &str) {
        self.criteria.search_text = text.to_string();
    }

    pub fn on_filter_change(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn on_select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    // ── Derived views ───────────────────────────────────────────────────

    /// Forums passing the current search text, in dataset order.
    pub fn visible_forums(&self) -> Vec<&Forum> {
        filter_forums(&self.dataset.forums, &self.criteria.search_text)
    }

    /// Posts passing the current criteria, in dataset order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_posts(&self.dataset.posts, &self.criteria)
    }

    pub fn trending_topics(&self) -> &[String] {
        &self.dataset.trending_topics
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn engagement(&self) -> &EngagementTracker {
        &self.engagement
    }

    pub fn chat(&self) -> &ChatPipeline {
        &self.chat
    }
}
