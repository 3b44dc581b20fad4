//! bloomboard/crates/bb-engine/src/lib.rs
//!
//! The interaction state engine behind the community panel: chat pipeline,
//! content filter, engagement tracker, and the controller that ties them to
//! a host shell.

pub mod chat;
pub mod controller;
pub mod engagement;
pub mod filter;
pub mod scripted;

pub use chat::{ChatPipeline, RandomGuestNamer, REPLY_DELAY, TYPING_WINDOW};
pub use controller::{PanelController, PanelDataset};
pub use engagement::EngagementTracker;
pub use filter::{filter_forums, filter_posts};
