//! Terminal event loop.

use console_term::{Rect, Terminal};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::MissedTickBehavior;

use super::App;
use crate::error::AppError;

/// Drive `app` until it asks to quit or the input stream ends.
pub async fn run(mut app: App) -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    let mut ticks = tokio::time::interval(app.tick_rate());
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let (width, height) = terminal.size();
    let mut area = Rect::from_size(width, height);
    let mut dirty = true;
    log::info!("Event loop started at {}x{}", width, height);

    loop {
        if dirty {
            terminal.draw(|buf| app.render(buf))?;
            let (width, height) = terminal.size();
            area = Rect::from_size(width, height);
            dirty = false;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Event::Resize(width, height) = event {
                        area = Rect::from_size(width, height);
                    }
                    dirty |= app.handle_event(event, area).await?;
                }
                Some(Err(e)) => log::error!("Event stream error: {}", e),
                None => {
                    log::warn!("Event stream closed");
                    break;
                }
            },
            _ = ticks.tick() => {
                dirty |= app.tick();
            }
        }

        if app.should_quit() {
            break;
        }
    }

    log::info!("Event loop stopped");
    Ok(())
}
