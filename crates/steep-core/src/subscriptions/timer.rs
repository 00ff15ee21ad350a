use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

/// A repeating timer: waits `period`, emits the current [`Instant`], repeats.
///
/// The first emission happens one full period after the subscription starts.
/// If the runtime falls behind, late ticks are delayed rather than fired in a
/// burst.  The `id` distinguishes several `Every` timers in one program.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use steep_core::{subscribe, Every};
///
/// let sub = subscribe(Every::new(Duration::from_secs(1), "tick")).map(|_| Msg::Tick);
/// ```
pub struct Every {
    /// Time between emissions.
    pub period: Duration,
    /// Identifier used to tell this timer apart from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given period and identifier.
    pub fn new(period: Duration, id: &'static str) -> Self {
        Self { period, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        // interval() panics on a zero period
        let period = self.period.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Box::pin(IntervalStream::new(interval).map(|tick| tick.into_std()))
    }
}

/// A one-shot delay: emits a single [`Instant`] after `duration`, then ends.
pub struct After {
    /// How long to wait before firing.
    pub duration: Duration,
}

impl After {
    /// Create a new one-shot delay for the given duration.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl SubscriptionSource for After {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::new::<Self>(self.duration.as_nanos() as u64)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let stream = futures::stream::once(async move {
            tokio::time::sleep(self.duration).await;
            Instant::now()
        });
        Box::pin(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn every_waits_a_full_period_before_the_first_tick() {
        let start = tokio::time::Instant::now();
        let mut ticks = Every::new(Duration::from_secs(1), "tick").stream();

        ticks.next().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        ticks.next().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn after_fires_once() {
        let start = tokio::time::Instant::now();
        let mut once = After::new(Duration::from_millis(250)).stream();

        assert!(once.next().await.is_some());
        assert_eq!(start.elapsed(), Duration::from_millis(250));
        assert!(once.next().await.is_none());
    }

    #[test]
    fn timers_with_different_names_are_distinct() {
        let tick = Every::new(Duration::from_secs(1), "tick");
        let frame = Every::new(Duration::from_secs(1), "frame");
        assert_ne!(tick.id(), frame.id());
    }
}
