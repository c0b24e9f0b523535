//! Navigation tracing with short colored ids.
//!
//! Each navigation the web engine starts gets a 5-character id, logged when
//! it starts and again when the page finishes loading, so interleaved
//! redirects and sub-frame loads stay readable in the terminal.

use nanoid::nanoid;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};
use std::time::{Duration, Instant};

/// Palette for id tags; readable on light and dark terminals.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Picks a palette color for `id`. Stable across runs.
pub fn color_for(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    PALETTE[hash as usize % PALETTE.len()]
}

/// Renders `[id]` in the id's color.
pub fn tag(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for(id)));
    format!("[{}]", id).style(style).to_string()
}

/// A navigation in flight.
#[derive(Debug, Clone)]
pub struct NavigationTrace {
    pub id: String,
    pub url: String,
    pub started: Instant,
}

/// Navigations the engine has started but not finished loading.
#[derive(Debug, Default)]
pub struct NavigationLog {
    pending: Vec<NavigationTrace>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a navigation to `url` and returns its id.
    pub fn begin(&mut self, url: &str) -> String {
        let id = nanoid!(5);
        self.pending.push(NavigationTrace {
            id: id.clone(),
            url: url.to_string(),
            started: Instant::now(),
        });
        id
    }

    /// Closes the navigation that produced a load of `url`.
    ///
    /// A load settles every navigation started before it: redirects, cancelled
    /// loads and in-page jumps never report their own URL, so they are dropped
    /// here too. Reports the oldest pending navigation to `url`, or the oldest
    /// pending one overall when none matches (a redirect chain ending
    /// somewhere else). Returns `None` only when nothing is pending.
    pub fn finish(&mut self, url: &str) -> Option<(String, Duration)> {
        let settled = match self.pending.iter().position(|trace| trace.url == url) {
            Some(index) => self.pending.drain(..=index).last(),
            None => self.pending.drain(..).next(),
        }?;
        Some((settled.id, settled.started.elapsed()))
    }

    /// Number of navigations still waiting for a load event.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_color_spreads_across_palette() {
        let mut seen = Vec::new();
        for i in 0..64 {
            let color = std::mem::discriminant(&color_for(&format!("id{:02}", i)));
            if !seen.contains(&color) {
                seen.push(color);
            }
        }
        assert_eq!(seen.len(), PALETTE.len());
    }

    #[test]
    fn test_tag_is_colored_bracketed_id() {
        let rendered = tag("abc12");
        assert!(rendered.starts_with("\x1b["));
        assert_eq!(strip_ansi(&rendered), "[abc12]");
        assert_eq!(rendered, tag("abc12"));
    }

    #[test]
    fn test_begin_then_finish() {
        let mut log = NavigationLog::new();
        let id = log.begin("https://example.com/a");
        assert_eq!(id.len(), 5);
        assert_eq!(log.pending(), 1);

        let (finished, _) = log.finish("https://example.com/a").unwrap();
        assert_eq!(finished, id);
        assert_eq!(log.pending(), 0);
    }

    #[test]
    fn test_finish_with_nothing_pending() {
        let mut log = NavigationLog::new();
        assert!(log.finish("https://example.com/").is_none());
    }

    #[test]
    fn test_redirected_load_settles_navigation() {
        let mut log = NavigationLog::new();
        let id = log.begin("https://dashboard.example.app/");

        let (finished, _) = log.finish("https://share.example.io/-/auth/app").unwrap();
        assert_eq!(finished, id);
        assert_eq!(log.pending(), 0);
    }

    #[test]
    fn test_repeated_redirects_do_not_accumulate() {
        let mut log = NavigationLog::new();
        for _ in 0..1000 {
            log.begin("https://dashboard.example.app/");
            log.finish("https://share.example.io/-/auth/app");
        }
        assert_eq!(log.pending(), 0);
    }

    #[test]
    fn test_load_settles_earlier_navigations() {
        let mut log = NavigationLog::new();
        log.begin("https://example.com/a");
        let b = log.begin("https://example.com/b");
        let c = log.begin("https://example.com/c");

        assert_eq!(log.finish("https://example.com/b").unwrap().0, b);
        assert_eq!(log.pending(), 1);
        assert_eq!(log.finish("https://example.com/c").unwrap().0, c);
        assert_eq!(log.pending(), 0);
    }
}
