use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::domain::hotness::{HotnessServiceApi, HotnessServiceError};

/// Window recomputed by the background pass, in days
pub const REFRESH_WINDOW_DAYS: i64 = 7;

/// Outcome of a single refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed { scored: usize, skipped: usize },
    NoData,
}

/// Periodically rescores the recent window so stored hotness keeps decaying
/// even when nobody calls the analysis endpoints.
pub struct HotnessRefreshJob {
    service: Arc<dyn HotnessServiceApi>,
    period: Duration,
    days: i64,
}

impl HotnessRefreshJob {
    pub fn new(service: Arc<dyn HotnessServiceApi>, period: Duration) -> Self {
        Self {
            service,
            period,
            days: REFRESH_WINDOW_DAYS,
        }
    }

    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            info!(
                period_secs = self.period.as_secs(),
                days = self.days,
                "Starting hotness refresh job"
            );

            loop {
                ticker.tick().await;

                if let Err(e) = self.run_once().await {
                    error!(error = %e, "Hotness refresh cycle failed");
                }
            }
        })
    }

    pub async fn run_once(&self) -> Result<RefreshOutcome, HotnessServiceError> {
        debug!(days = self.days, "Starting hotness refresh cycle");

        match self.service.recompute(self.days).await {
            Ok(result) => {
                info!(
                    scored = result.scores.len(),
                    skipped = result.skipped_count,
                    "Hotness refresh cycle complete"
                );
                Ok(RefreshOutcome::Refreshed {
                    scored: result.scores.len(),
                    skipped: result.skipped_count,
                })
            }
            Err(HotnessServiceError::NoData(_)) => {
                debug!(days = self.days, "No recent news to rescore");
                Ok(RefreshOutcome::NoData)
            }
            Err(e) => Err(e),
        }
    }
}
