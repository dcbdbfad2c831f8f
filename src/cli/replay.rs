//! Replay command implementation
//!
//! Feeds recorded unlock events through a celebration scheduler and prints
//! each celebration as it takes the display slot.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::io::BufReader;
use tokio::sync::watch;

use fanfare::QueuedCelebration;
use fanfare::celebration::{self, CelebrationSnapshot, RenderMode, UnlockFeed, read_json_lines};
use fanfare::config::Config;

/// Replay unlock events from a JSON-lines file (or stdin for `-`)
pub async fn replay_command(config: &Config, source: &Path, stagger_ms: u64) -> Result<()> {
    let events = if source == Path::new("-") {
        read_json_lines(BufReader::new(tokio::io::stdin()))
            .await
            .context("Failed to read unlock events from stdin")?
    } else {
        let file = tokio::fs::File::open(source)
            .await
            .with_context(|| format!("Failed to open {}", source.display()))?;
        read_json_lines(BufReader::new(file))
            .await
            .with_context(|| format!("Failed to read unlock events from {}", source.display()))?
    };

    if events.is_empty() {
        println!("No unlock events found.");
        return Ok(());
    }

    let (handle, scheduler) = celebration::spawn(config.build_queue());
    let presenter = tokio::spawn(present(handle.subscribe()));

    let feed = UnlockFeed::new();
    let unlocked = Arc::new(AtomicUsize::new(0));
    let _badge = {
        let unlocked = Arc::clone(&unlocked);
        feed.subscribe(move |_| {
            unlocked.fetch_add(1, Ordering::Relaxed);
        })
    };
    let _celebrations = celebration::connect(&feed, handle.clone());

    for (i, event) in events.iter().enumerate() {
        if i > 0 && stagger_ms > 0 {
            tokio::time::sleep(Duration::from_millis(stagger_ms)).await;
        }
        feed.publish(event);
    }

    handle.settled().await?;
    handle.shutdown();
    scheduler.await.context("Celebration scheduler panicked")?;
    let shown = presenter.await.context("Presenter panicked")?;

    println!(
        "\nCelebrated {} of {} unlocks.",
        shown,
        unlocked.load(Ordering::Relaxed)
    );
    Ok(())
}

/// Print every celebration that takes the display slot, returning how many
async fn present(mut snapshots: watch::Receiver<CelebrationSnapshot>) -> usize {
    let mut shown = 0;
    let mut last = None;

    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        let id = snapshot.current.as_ref().map(QueuedCelebration::id);
        if id == last {
            continue;
        }
        last = id;

        if let Some(current) = &snapshot.current {
            shown += 1;
            print_celebration(current, snapshot.pending_count);
        }
    }

    shown
}

fn print_celebration(celebration: &QueuedCelebration, pending: usize) {
    let mode = RenderMode::select(Some(celebration));
    let event = celebration.event();
    let achievement = &event.achievement;

    let headline = match mode {
        RenderMode::Epic => "*** LEGENDARY ACHIEVEMENT ***",
        RenderMode::Major => "** Major Achievement **",
        RenderMode::Standard => "Achievement Unlocked!",
        RenderMode::Light | RenderMode::None => "Unlocked",
    };

    println!();
    println!(
        "[{}] {} {}  ({}, {} waiting)",
        Local::now().format("%H:%M:%S"),
        achievement.icon,
        headline,
        mode,
        pending
    );
    println!("    {}", achievement.name);
    if mode != RenderMode::Light && !achievement.description.is_empty() {
        println!("    {}", achievement.description);
    }
    if achievement.points > 0 {
        println!("    +{} pts ({})", achievement.points, achievement.rarity.label());
    }
    if event.is_first_in_category && !achievement.category.is_empty() {
        println!("    First in {}!", achievement.category);
    }
}
