//! # Bloomboard Binary
//!
//! Assembles the panel for a terminal demo session: file-backed store,
//! seed dataset, and one scripted chat exchange.

mod seed;

use std::sync::Arc;
use std::time::Duration;

use bb_core::traits::{keys, KvStore};
use bb_engine::{PanelController, RandomGuestNamer, REPLY_DELAY};
use bb_storage::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir =
        std::env::var("BLOOMBOARD_DATA").unwrap_or_else(|_| "./data/bloomboard".to_string());
    let store: Arc<dyn KvStore> = Arc::new(JsonFileStore::new(&data_dir));

    // Theme preference shares the adapter but is a shell concern, not ours.
    let dark_mode = store.get(keys::DARK_MODE).as_deref() == Some("true");
    tracing::info!(data_dir, dark_mode, "bloomboard panel starting");

    let mut panel = PanelController::new(
        Arc::clone(&store),
        Arc::new(RandomGuestNamer::new()),
        seed::dataset(),
    );

    for forum in panel.visible_forums() {
        tracing::info!(
            forum = %forum.name,
            members = forum.member_count,
            engagement = forum.engagement_rate,
            "forum"
        );
    }

    panel.on_toggle_bookmark(1);
    let likes = panel.on_react(1, "love")?;
    tracing::info!(post_id = 1, likes, "reacted to the first post");

    panel.on_typing_activity();
    panel.on_submit_message("hello");
    tokio::time::sleep(REPLY_DELAY + Duration::from_millis(200)).await;

    for message in panel.chat().messages() {
        println!(
            "[{}] {}: {}",
            message.timestamp.format("%H:%M:%S"),
            message.author,
            message.body
        );
    }

    Ok(())
}
