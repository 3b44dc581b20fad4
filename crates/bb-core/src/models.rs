//! # Domain Models
//!
//! These structs represent the core entities of the Bloomboard panel.
//! Chat messages use UUID v7 for time-ordered, globally unique identification;
//! forums and posts keep the small integer ids of the seed dataset.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PanelError;

/// A single entry in the live-chat log. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    /// Display name of the sender (guest name or the scripted responder).
    pub author: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    /// True for messages produced by the scripted responder.
    #[serde(default)]
    pub is_automated: bool,
}

impl ChatMessage {
    /// Builds a message stamped with a fresh time-ordered id.
    pub fn new(author: impl Into<String>, body: impl Into<String>, is_automated: bool) -> Self {
        Self {
            id: Uuid::now_v7(),
            author: author.into(),
            body: body.into(),
            timestamp: Utc::now(),
            is_automated,
        }
    }
}

/// A topic forum. Read-only reference data for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: u64,
    pub name: String,
    pub member_count: u32,
    pub post_count: u32,
    pub expert_badges: Vec<String>,
    pub is_restricted: bool,
    pub topics: Vec<String>,
    /// Integer percentage 0–100.
    pub engagement_rate: u8,
}

/// A community post. Read-only reference data; reaction counts are layered
/// on top by the engagement tracker rather than mutated in place, so the
/// seeded baseline survives the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub author_reputation: u32,
    pub badges: Vec<String>,
    /// Seeded like baseline, see `EngagementTracker::effective_like_count`.
    pub like_count: u32,
    pub comment_count: u32,
    pub is_anonymous: bool,
    pub content_warnings: Vec<String>,
    pub category: String,
}

/// The reaction vocabulary. Anything else coming off the UI surface is
/// rejected with `InvalidReactionKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Love,
    Insightful,
    Curious,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Love => "love",
            ReactionKind::Insightful => "insightful",
            ReactionKind::Curious => "curious",
        }
    }
}

impl FromStr for ReactionKind {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "love" => Ok(ReactionKind::Love),
            "insightful" => Ok(ReactionKind::Insightful),
            "curious" => Ok(ReactionKind::Curious),
            other => Err(PanelError::InvalidReactionKind(other.to_string())),
        }
    }
}

/// Per-post reaction counters, keyed by post id. Session-only state:
/// counts are monotonically non-decreasing and never persisted.
pub type ReactionCounts = HashMap<u64, HashMap<ReactionKind, u32>>;

/// Category selector for the post filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Case-insensitive match against a post's category; `All` matches
    /// everything.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.eq_ignore_ascii_case(category),
        }
    }
}

/// The browsing filter state. Ephemeral, owned by the panel controller,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: CategoryFilter,
    pub include_anonymous: bool,
    pub experts_only: bool,
}

/// Debounced typing-indicator state. Derived, ephemeral.
#[derive(Debug, Clone, Default)]
pub struct TypingState {
    pub is_typing: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Which panel tab is in front. Ephemeral selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Forums,
    Posts,
    Chat,
}
