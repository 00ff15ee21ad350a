use crate::event::{key_token, KeyPress};
use crate::subscription::{forward, Subscription, SubscriptionId};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;

/// Marker type identifying the keyboard subscription.
pub struct KeyPresses;

/// Subscribe to key presses from the terminal.
///
/// Raw crossterm events are decoded with [`key_token`]; anything that is not a
/// key press, or that has no token, is dropped.  Read errors are skipped.
///
/// The crossterm [`EventStream`] is created inside the spawned task, not when
/// the subscription value is built, so building it has no effect on a stream
/// that is already being polled.
pub fn key_presses<Msg: Send + 'static>(
    map: impl Fn(KeyPress) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    Subscription {
        id: SubscriptionId::of::<KeyPresses>(),
        spawn: Box::new(move |tx| {
            let stream = EventStream::new().filter_map(move |result| {
                let msg = match result {
                    Ok(Event::Key(key)) => key_token(&key).map(KeyPress::new).and_then(&map),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::debug!(%err, "skipping unreadable terminal event");
                        None
                    }
                };
                futures::future::ready(msg)
            });
            forward(Box::pin(stream), tx)
        }),
    }
}
