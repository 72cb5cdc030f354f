//! Plain-text rendering of a snapshot.

use crate::models::locale::Locale;
use crate::models::session::SessionStatus;
use crate::models::snapshot::Snapshot;
use crate::utils::formatting::{display_width, pad_right, progress_bar};
use ansi_term::Colour;

/// Clear screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub key_hint: bool,
}

fn status_line(snapshot: &Snapshot, locale: &Locale, color: bool) -> String {
    let (text, colour) = match snapshot.status {
        SessionStatus::NotStarted => (locale.status_not_started, Colour::Yellow),
        SessionStatus::Active => (locale.status_active, Colour::Green),
        SessionStatus::Completed => (locale.status_completed, Colour::Cyan),
    };
    let line = format!("● {}", text);
    if color {
        colour.bold().paint(line).to_string()
    } else {
        line
    }
}

fn rows(snapshot: &Snapshot, locale: &Locale) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let dash = || "-".to_string();

    match snapshot.status {
        SessionStatus::NotStarted => {
            rows.push((locale.label_target, snapshot.target.clone()));
        }
        SessionStatus::Active => {
            rows.push((
                locale.label_progress,
                format!(
                    "{} {}% {}",
                    progress_bar(snapshot.progress_percent, BAR_WIDTH),
                    snapshot.progress_percent,
                    locale.progress_suffix
                ),
            ));
            rows.push((
                locale.label_check_in,
                snapshot.check_in.clone().unwrap_or_else(dash),
            ));
            rows.push((locale.label_elapsed, snapshot.elapsed.clone()));
            rows.push((
                locale.label_remaining,
                snapshot.remaining.clone().unwrap_or_else(dash),
            ));
            rows.push((
                locale.label_projected,
                snapshot.projected_check_out.clone().unwrap_or_default(),
            ));
            rows.push((locale.label_target, snapshot.target.clone()));
        }
        SessionStatus::Completed => {
            rows.push((
                locale.label_check_in,
                snapshot.check_in.clone().unwrap_or_else(dash),
            ));
            rows.push((
                locale.label_check_out,
                snapshot.check_out.clone().unwrap_or_else(dash),
            ));
            rows.push((locale.label_total, snapshot.elapsed.clone()));
        }
    }

    if let Some(extra) = &snapshot.overtime {
        rows.push((locale.label_overtime, extra.clone()));
    }

    rows
}

pub fn render(snapshot: &Snapshot, locale: &Locale, opts: RenderOptions) -> String {
    let mut out = String::new();

    out.push_str(&snapshot.date);
    out.push('\n');
    if let Some(place) = &snapshot.location {
        out.push_str(&format!("{}: {}\n", locale.label_location, place));
    }
    out.push_str(&snapshot.clock);
    out.push_str("\n\n");

    out.push_str(&status_line(snapshot, locale, opts.color));
    out.push('\n');

    let rows = rows(snapshot, locale);
    let width = rows
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        out.push_str(&format!("  {}  {}\n", pad_right(label, width), value));
    }

    if opts.key_hint {
        out.push('\n');
        out.push_str(locale.key_hint);
        out.push('\n');
    }

    out
}
