use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use creditsearch_core::{CreditCard, ErrorSink, PLATFORMS_HEADING, ResultsSink};
use owo_colors::OwoColorize;
use tracing::debug;

/// Film-frame prefix for all front-end output
const REEL: &str = "🎬";

/// Terminal rendering of the results and error regions
///
/// A terminal is append-only, so clearing a region prints nothing: the
/// next block written after a search is the new content of the page.
pub struct TerminalPage<W: Write> {
    out: Mutex<W>,
}

impl TerminalPage<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPage<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_block(&self, block: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(block.as_bytes()).and_then(|_| out.flush()) {
            debug!(error = %e, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Format one card as a colored text block
fn card_block(card: &CreditCard) -> String {
    let mut block = String::new();
    block.push('\n');
    block.push_str(&format!("{}\n", card.heading.bright_white().bold()));
    block.push_str(&format!("{}\n", card.subheading.dimmed()));
    block.push_str(&format!("{}\n", card.description));
    if let Some(trailer) = &card.trailer {
        block.push_str(&format!(
            "{} {}\n",
            format!("▶ {}:", trailer.label).red().bold(),
            trailer.url.underline()
        ));
    }
    if let Some(platforms) = &card.platforms {
        block.push_str(&format!("{}\n", PLATFORMS_HEADING.bold()));
        for platform in platforms {
            block.push_str(&format!("  • {}\n", platform.cyan()));
        }
    }
    block
}

impl<W: Write> ResultsSink for TerminalPage<W> {
    fn render_credits(&self, cards: &[CreditCard]) {
        let block: String = cards.iter().map(card_block).collect();
        self.write_block(&block);
    }

    fn clear_results(&self) {}
}

impl<W: Write> ErrorSink for TerminalPage<W> {
    fn set_error(&self, message: &str) {
        self.write_block(&format!("\n{} {}\n", REEL, message.red()));
    }

    fn clear_error(&self) {}
}

/// Print the startup banner
pub fn startup_banner(search_url: &str) {
    println!();
    println!("{} {}", REEL, "Credit search".bright_white().bold());
    println!(
        "{} {} {}",
        REEL,
        "backend:".bright_white(),
        search_url.bright_cyan()
    );
    println!(
        "{} {}",
        REEL,
        "Type a person's name and press Enter. Ctrl-D quits.".dimmed()
    );
}

/// Print the input prompt
pub fn prompt() {
    if let Err(e) = write_prompt(&mut io::stdout()) {
        debug!(error = %e, "failed to write prompt");
    }
}

fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{} ", "name>".green().bold())?;
    out.flush()
}

/// Print a fatal startup error
pub fn fatal(message: &str) {
    eprintln!("{} {}", REEL, message.red().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditsearch_core::{Credit, build_cards};

    #[test]
    fn test_cards_are_written_in_order() {
        let page = TerminalPage::new(Vec::new());
        let cards = build_cards(&[
            Credit::new("Film A", "Movie", "Director"),
            Credit::new("Show B", "TV Show", "Host"),
        ]);

        page.render_credits(&cards);

        let text = String::from_utf8(page.into_inner()).unwrap();
        let a = text.find("Film A").expect("first card written");
        let b = text.find("Show B").expect("second card written");
        assert!(a < b);
        assert!(text.contains("No description available"));
        assert!(!text.contains(PLATFORMS_HEADING));
    }

    #[test]
    fn test_optional_sections_are_written() {
        let credit = Credit {
            trailer: Some("https://www.youtube.com/watch?v=abc".to_string()),
            streaming_platforms: Some(vec!["Netflix".to_string()]),
            ..Credit::new("Film A", "Movie", "Director")
        };
        let page = TerminalPage::new(Vec::new());

        page.render_credits(&build_cards(&[credit]));

        let text = String::from_utf8(page.into_inner()).unwrap();
        assert!(text.contains("Watch Trailer"));
        assert!(text.contains("https://www.youtube.com/watch?v=abc"));
        assert!(text.contains(PLATFORMS_HEADING));
        assert!(text.contains("Netflix"));
    }

    #[test]
    fn test_error_is_written() {
        let page = TerminalPage::new(Vec::new());
        page.set_error("Person not found");
        let text = String::from_utf8(page.into_inner()).unwrap();
        assert!(text.contains("Person not found"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_prompt_is_written_and_flushed() {
        let mut out = Vec::new();
        write_prompt(&mut out).expect("prompt should be written");
        assert!(String::from_utf8(out).unwrap().contains("name>"));
    }

    #[test]
    fn test_prompt_reports_write_failure() {
        let err = write_prompt(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_failed_writes_do_not_panic() {
        let page = TerminalPage::new(BrokenPipe);
        page.set_error("Person not found");
        page.render_credits(&build_cards(&[Credit::new("Film A", "Movie", "Lead")]));
    }

    #[test]
    fn test_clearing_writes_nothing() {
        let page = TerminalPage::new(Vec::new());
        page.clear_results();
        page.clear_error();
        assert!(page.into_inner().is_empty());
    }
}
