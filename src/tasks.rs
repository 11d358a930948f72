// src/tasks.rs

//! Background fetch pipeline: periodically pull an APOD entry, run its
//! explanation through the mesostic engine, and cache the poem.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::api::AppState;
use crate::apod::{fetch_apod, random_date};
use crate::error::Result;
use crate::mesostic::build_mesostic;

/// Counters for the service, reported through tracing.
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    pings: AtomicU64,
    posts: AtomicU64,
    fetches: AtomicU64,
    errors: AtomicU64,
    poems_written: AtomicU64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_ping(&self) {
        self.pings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_post(&self) {
        self.posts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch(&self) {
        self.fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_poem_written(&self) {
        self.poems_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) {
        info!(
            pings = self.pings.load(Ordering::Relaxed),
            posts = self.posts.load(Ordering::Relaxed),
            fetches = self.fetches.load(Ordering::Relaxed),
            errors = self.errors.load(Ordering::Relaxed),
            poems_written = self.poems_written.load(Ordering::Relaxed),
            "service totals"
        );
    }
}

/// One run of the pipeline: fetch, build, store.
///
/// `date` is `None` for the current picture and `Some` for an archive
/// date. The spine is the APOD title unless the configured override is
/// set. Existing poems are left alone.
pub async fn run_fetch_once(state: &AppState, date: Option<&str>) -> Result<()> {
    state.metrics.record_fetch();

    let url = state.config.apod_url(date);
    let entry = fetch_apod(&state.http, &url).await?;

    let poem = build_mesostic(
        &entry.title,
        state.config.spine_override.as_deref(),
        &entry.explanation,
    )?;

    let (path, created) = state.store.write_new(&entry.date, &entry.title, &poem).await?;
    if created {
        state.metrics.record_poem_written();
        info!(
            date = %entry.date,
            spine = %entry.title,
            file = %path.display(),
            "APOD mesostic stored"
        );
    }
    Ok(())
}

/// Spawn the APOD ticker.
///
/// The caller fetches the current picture once at startup; every tick
/// here rolls a random archive date, so the store keeps filling with the
/// past. Errors are logged and counted, never fatal to the loop.
pub fn spawn_apod_ticker(state: Arc<AppState>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(every = ?every, "APOD fetch ticker started");

        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // the immediate first tick is spent; archive fetches start after
        // one full interval
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let date = Some(random_date());
            if let Err(e) = run_fetch_once(&state, date.as_deref()).await {
                state.metrics.record_error();
                error!(error = %e, "APOD fetch failed");
            }
            state.metrics.report();
        }
    })
}
