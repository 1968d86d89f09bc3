use anyhow::Result;
use crossterm::event::EventStream;
use futures_util::stream::StreamExt;
use tracing::warn;

use super::InputEvent;

/// Asynchronously listens for terminal events and invokes `on_event` with
/// each one converted to an [`InputEvent`].
///
/// Stream errors are logged and skipped so a transient failure does not end
/// the UI. The handler runs on the awaiting task and should return quickly.
///
/// ```ignore
/// travelZoom::input::async_input::event_listener(|ev| {
///     // feed the event into the app
/// });
/// ```
pub async fn event_listener<F>(mut on_event: F) -> Result<()>
where
    F: FnMut(InputEvent) + Send + 'static,
{
    let mut stream = EventStream::new();
    while let Some(result) = stream.next().await {
        match result {
            Ok(event) => on_event(event.into()),
            Err(e) => warn!("async input event stream error (continuing): {}", e),
        }
    }
    Ok(())
}
