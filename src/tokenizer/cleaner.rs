use lazy_static::lazy_static;
use regex::Regex;

use crate::config::TokenizerConfig;

lazy_static! {
    // Everything outside letters, digits, commas and periods becomes a
    // separator; commas and periods are deleted so that abbreviations and
    // decimals join into a single token.
    static ref SEPARATORS: Regex = Regex::new(r"[^A-Za-z0-9,.]").expect("valid regex");
    static ref JOINERS: Regex = Regex::new(r"[,.]").expect("valid regex");
    static ref SPACE_RUNS: Regex = Regex::new(r" {2,}").expect("valid regex");
    // A word fragment broken by a hyphen at end of line.
    static ref HYPHEN_BREAK: Regex = Regex::new(r"^[A-Za-z-]+-$").expect("valid regex");
}

/// Stateless text cleaner and tokenizer
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Clean a piece of text: keep ASCII letters and digits, collapse
    /// whitespace runs, strip punctuation.
    pub fn clean(&self, text: &str) -> String {
        let cleaned = SEPARATORS.replace_all(text, " ");
        let cleaned = JOINERS.replace_all(&cleaned, "");
        let cleaned = SPACE_RUNS.replace_all(&cleaned, " ");
        let cleaned = cleaned.trim();

        if self.config.lowercase {
            cleaned.to_lowercase()
        } else {
            cleaned.to_string()
        }
    }

    /// Clean text and split it into non-empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }

    /// A stateful cleaner for multi-line documents, carrying hyphenated
    /// fragments from one line to the next.
    pub fn line_cleaner(&self) -> LineCleaner {
        LineCleaner {
            tokenizer: Tokenizer::new(&self.config),
            carry: String::new(),
        }
    }
}

/// Line-by-line cleaner that re-joins words split across a line wrap
///
/// When a line's last raw token is a run of letters and hyphens ending in
/// a hyphen, the fragment (minus the trailing hyphen) is held and glued
/// to the front of the next line before cleaning. A fragment still held
/// when the document ends is dropped.
pub struct LineCleaner {
    tokenizer: Tokenizer,
    carry: String,
}

impl LineCleaner {
    /// Clean one line, applying and updating the hyphenation carry
    pub fn clean_line(&mut self, line: &str) -> String {
        let mut line = line.trim().to_string();
        if !self.carry.is_empty() {
            line = format!("{}{}", self.carry, line);
        }

        self.carry = match line.split_whitespace().next_back() {
            Some(last) if HYPHEN_BREAK.is_match(last) => {
                last.strip_suffix('-').unwrap_or(last).to_string()
            }
            _ => String::new(),
        };

        self.tokenizer.clean(&line)
    }

    /// Clean one line and split it into non-empty tokens
    pub fn tokenize_line(&mut self, line: &str) -> Vec<String> {
        self.clean_line(line)
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }

    /// Drop any held fragment (call between documents)
    pub fn reset(&mut self) {
        self.carry.clear();
    }
}
