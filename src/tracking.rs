//! Order-tracking poller. One reusable subscribe/poll/cleanup resource
//! instead of per-screen timer pairs: a spawned task polls the tracking
//! endpoint while the order is in transit and publishes snapshots through a
//! watch channel; dropping the handle aborts the task.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::orders;
use crate::client::ApiClient;
use crate::models::TrackingInfo;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Locally interpolated 0–100% delivery progress against the server-supplied
/// ETA. Cosmetic only; the server stays authoritative for the real status.
#[derive(Debug)]
pub struct DeliveryProgress {
    started: Instant,
    estimated: Duration,
    confirmed: bool,
}

impl DeliveryProgress {
    pub fn new(estimated_minutes: u64) -> Self {
        Self::starting_at(Instant::now(), estimated_minutes)
    }

    pub fn starting_at(started: Instant, estimated_minutes: u64) -> Self {
        Self {
            started,
            estimated: Duration::from_secs(estimated_minutes * 60),
            confirmed: false,
        }
    }

    pub fn percent_at(&self, now: Instant) -> f64 {
        if self.estimated.is_zero() {
            return 100.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.estimated.as_secs_f64() * 100.0).min(100.0)
    }

    /// True exactly once: at the first call where progress has reached 100%.
    /// Later calls return false so the confirmation mutation cannot repeat.
    pub fn take_confirmation(&mut self, now: Instant) -> bool {
        if self.confirmed || self.percent_at(now) < 100.0 {
            return false;
        }
        self.confirmed = true;
        true
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackingSnapshot {
    pub info: Option<TrackingInfo>,
    pub progress_percent: f64,
    pub delivery_confirmed: bool,
    /// Set when the server reports a terminal status and polling has stopped.
    pub finished: bool,
}

pub struct OrderTracker {
    rx: watch::Receiver<TrackingSnapshot>,
    task: JoinHandle<()>,
}

impl OrderTracker {
    pub fn spawn(client: ApiClient, order_id: i64) -> Self {
        Self::with_interval(client, order_id, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(client: ApiClient, order_id: i64, poll_interval: Duration) -> Self {
        let (tx, rx) = watch::channel(TrackingSnapshot::default());
        let task = tokio::spawn(run(client, order_id, poll_interval, tx));
        Self { rx, task }
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackingSnapshot> {
        self.rx.clone()
    }

    pub fn snapshot(&self) -> TrackingSnapshot {
        self.rx.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for OrderTracker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: ApiClient,
    order_id: i64,
    poll_interval: Duration,
    tx: watch::Sender<TrackingSnapshot>,
) {
    let mut poll = tokio::time::interval(poll_interval);
    // The progress figure advances between polls on a one-second cadence.
    let mut progress_tick = tokio::time::interval(Duration::from_secs(1));
    let mut info: Option<TrackingInfo> = None;
    let mut progress: Option<DeliveryProgress> = None;
    let mut confirmed = false;

    loop {
        tokio::select! {
            _ = poll.tick() => {
                match orders::track_order(&client, order_id).await {
                    Ok(tracking) => {
                        if progress.is_none() && tracking.status.as_deref() == Some("shipped") {
                            if let Some(minutes) = tracking.estimated_minutes {
                                progress = Some(DeliveryProgress::new(minutes));
                            }
                        }
                        let finished = matches!(
                            tracking.status.as_deref(),
                            Some("delivered") | Some("cancelled")
                        );
                        info = Some(tracking);
                        publish(&tx, &info, &progress, confirmed, finished);
                        if finished {
                            break;
                        }
                    }
                    Err(err) => {
                        // Transient poll failures keep the last snapshot.
                        tracing::warn!(error = %err, order_id, "tracking poll failed");
                    }
                }
            }
            _ = progress_tick.tick() => {
                let Some(p) = progress.as_mut() else { continue };
                if p.take_confirmation(Instant::now()) {
                    match orders::confirm_delivery(&client, order_id).await {
                        Ok(()) => confirmed = true,
                        Err(err) => {
                            tracing::warn!(error = %err, order_id, "delivery confirmation failed");
                        }
                    }
                }
                publish(&tx, &info, &progress, confirmed, false);
            }
        }
    }
}

fn publish(
    tx: &watch::Sender<TrackingSnapshot>,
    info: &Option<TrackingInfo>,
    progress: &Option<DeliveryProgress>,
    confirmed: bool,
    finished: bool,
) {
    let percent = progress
        .as_ref()
        .map(|p| p.percent_at(Instant::now()))
        .unwrap_or(0.0);
    tx.send_replace(TrackingSnapshot {
        info: info.clone(),
        progress_percent: percent,
        delivery_confirmed: confirmed,
        finished,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_interpolates_against_eta() {
        let start = Instant::now();
        let progress = DeliveryProgress::starting_at(start, 10);
        assert_eq!(progress.percent_at(start), 0.0);
        let halfway = progress.percent_at(start + Duration::from_secs(300));
        assert!((halfway - 50.0).abs() < 0.5, "got {halfway}");
        assert_eq!(progress.percent_at(start + Duration::from_secs(1200)), 100.0);
    }

    #[test]
    fn confirmation_fires_exactly_once() {
        let start = Instant::now();
        let mut progress = DeliveryProgress::starting_at(start, 10);
        assert!(!progress.take_confirmation(start + Duration::from_secs(599)));
        assert!(progress.take_confirmation(start + Duration::from_secs(600)));
        // The next tick after confirmation must not re-trigger.
        assert!(!progress.take_confirmation(start + Duration::from_secs(601)));
        assert!(progress.is_confirmed());
    }

    #[test]
    fn zero_estimate_is_complete_immediately() {
        let start = Instant::now();
        let progress = DeliveryProgress::starting_at(start, 0);
        assert_eq!(progress.percent_at(start), 100.0);
    }
}
