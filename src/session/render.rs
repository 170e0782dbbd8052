//! Plain-text rendering of a session.

use std::fmt::Write;

use super::{Session, Tone};
use crate::core::{Card, Clock};
use crate::engine::Phase;
use crate::scores::{format_clock, KeyValueStore};

/// Cards per board row.
pub const COLUMNS: usize = 4;

/// High-score rows shown under the board.
pub const SHOWN_SCORES: usize = 5;

/// Face of one card as drawn on the board.
#[must_use]
pub fn card_face<C: Clock + Clone, S: KeyValueStore>(session: &Session<C, S>, card: &Card) -> String {
    let glyph = session.engine().symbol_glyph(card.symbol);
    if card.is_hidden() {
        "??".to_string()
    } else if session.is_turning(card.id) {
        "<>".to_string()
    } else if card.is_matched && session.is_confirmed(card.id) {
        format!("[{glyph}]")
    } else {
        glyph.to_string()
    }
}

/// Whole screen: status line, board, notice, high scores, help.
#[must_use]
pub fn render<C: Clock + Clone, S: KeyValueStore>(session: &Session<C, S>) -> String {
    let engine = session.engine();
    let mut out = String::new();

    let _ = write!(
        out,
        "Score: {}   Moves: {}   Time: {}",
        engine.score(),
        engine.moves(),
        format_clock(engine.elapsed_seconds())
    );
    match engine.phase() {
        Phase::Paused => out.push_str("   [PAUSED]"),
        Phase::Completed => out.push_str("   [DONE]"),
        Phase::Idle | Phase::Running => {}
    }
    out.push('\n');

    if engine.phase() == Phase::Idle {
        out.push_str("\nPress n to start a new game.\n");
    } else {
        out.push('\n');
        for row in engine.cards().chunks(COLUMNS) {
            for card in row {
                let _ = write!(out, "{:>3} {:<5}", card.id.index() + 1, card_face(session, card));
            }
            out.push('\n');
        }
    }

    if let Some(notice) = session.notice() {
        let marker = match notice.tone {
            Tone::Success => '+',
            Tone::Error => '!',
        };
        let _ = writeln!(out, "\n{marker} {}", notice.text);
    }

    let scores = session.high_scores();
    if !scores.is_empty() {
        out.push_str("\nHigh scores:\n");
        for (rank, entry) in scores.entries().iter().take(SHOWN_SCORES).enumerate() {
            let _ = writeln!(
                out,
                "{:>2}. {:>5} pts  {:>3} moves  {}  {}",
                rank + 1,
                entry.score,
                entry.moves,
                entry.time_display(),
                entry.date.format("%Y-%m-%d")
            );
        }
    }

    let _ = writeln!(
        out,
        "\n[1-{}] flip  [n] new game  [p] pause/resume  [q] quit",
        engine.config().card_count()
    );
    out
}
