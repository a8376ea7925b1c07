use crate::subscription::{Subscription, SubscriptionId};
use futures::StreamExt;
use std::time::{Duration, Instant};

/// Marker type identifying repeating-timer subscriptions.
struct Every;

/// Marker type identifying one-shot delay subscriptions.
struct After;

/// A repeating timer that fires at a fixed interval.
///
/// Each tick is mapped to a message. The `id` string distinguishes multiple
/// timers from one another when diffing subscriptions.
///
/// ```rust,ignore
/// every(Duration::from_secs(1), "clock", |_| Msg::Tick)
/// ```
pub fn every<Msg: Send + 'static>(
    interval: Duration,
    id: &str,
    map: impl Fn(Instant) -> Msg + Send + Sync + 'static,
) -> Subscription<Msg> {
    let stream =
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(interval))
            .map(move |tick| map(tick.into_std()));
    Subscription::from_stream(SubscriptionId::with_str::<Every>(id), Box::pin(stream))
}

/// A one-shot delay that fires once after `duration`, then completes.
///
/// The `id` string keeps concurrent delays distinct; the search page issues
/// one per row while its expand/collapse transition settles.
///
/// ```rust,ignore
/// after(Duration::from_millis(300), "expand-3", |_| Msg::AnimationComplete(3))
/// ```
pub fn after<Msg: Send + 'static>(
    duration: Duration,
    id: &str,
    map: impl FnOnce(Instant) -> Msg + Send + 'static,
) -> Subscription<Msg> {
    let stream = futures::stream::once(async move {
        tokio::time::sleep(duration).await;
        map(Instant::now())
    });
    Subscription::from_stream(SubscriptionId::with_str::<After>(id), Box::pin(stream))
}
