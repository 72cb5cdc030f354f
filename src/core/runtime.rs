//! Event loop for the interactive tracker.
//!
//! One task multiplexes the 1-second tick, the startup location lookup, user
//! commands read line by line, and a shutdown signal. The interval and the
//! lookup future live only as long as the loop.

use crate::core::clock::Clock;
use crate::core::location::{LocationService, resolve_label};
use crate::core::tracker::{Msg, Tracker};
use crate::errors::AppResult;
use crate::models::session::SessionEvent;
use crate::models::snapshot::Snapshot;
use crate::ui::dashboard::{CLEAR_SCREEN, RenderOptions, render};
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Session(SessionEvent),
    Quit,
}

impl UserCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(UserCommand::Quit),
            other => SessionEvent::from_input(other).map(UserCommand::Session),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop after this many ticks.
    pub ticks: Option<u64>,
    pub clear_screen: bool,
    pub color: bool,
}

fn draw<W: Write>(
    out: &mut W,
    tracker: &Tracker,
    snapshot: &Snapshot,
    opts: &RunOptions,
) -> AppResult<()> {
    if opts.clear_screen {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    let text = render(
        snapshot,
        &tracker.settings().locale,
        RenderOptions {
            color: opts.color,
            key_hint: true,
        },
    );
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub async fn run_tracker<R, W, S>(
    tracker: &mut Tracker,
    clock: &dyn Clock,
    location: &dyn LocationService,
    input: R,
    out: &mut W,
    shutdown: S,
    opts: RunOptions,
) -> AppResult<()>
where
    R: AsyncRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    let lookup = resolve_label(location, tracker.settings().location_timeout);
    tokio::pin!(lookup);
    let mut lookup_done = false;

    tokio::pin!(shutdown);

    let mut lines = BufReader::new(input).lines();
    let mut input_open = true;

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut ticks: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = tracker.update(Msg::Tick(clock.now()));
                draw(out, tracker, &snapshot, &opts)?;

                ticks += 1;
                if opts.ticks.is_some_and(|limit| ticks >= limit) {
                    debug!(ticks, "Tick limit reached");
                    break;
                }
            }
            res = &mut lookup, if !lookup_done => {
                lookup_done = true;
                let snapshot = tracker.update(Msg::LocationResolved(res));
                draw(out, tracker, &snapshot, &opts)?;
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    input_open = false;
                    continue;
                };

                match UserCommand::parse(&line) {
                    Some(UserCommand::Quit) => break,
                    Some(UserCommand::Session(event)) => {
                        let snapshot = tracker.update(Msg::from_event(event, clock.now()));
                        draw(out, tracker, &snapshot, &opts)?;
                    }
                    None => debug!(input = %line.trim(), "Unknown command"),
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}
