//! The two fixed text rules and the function that applies them.
//!
//! Rules run in order over the whole text, not line by line. Replacement
//! text is inserted literally.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Font family every `GoogleFonts.*` call collapses onto.
pub const FONT_FAMILY: &str = "GoogleSansFlex";

static GOOGLE_FONTS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    // The import, then any whitespace after the semicolon (blank lines included)
    Regex::new(r"import\s+'package:google_fonts/google_fonts\.dart';\s*\n?").unwrap()
});

static GOOGLE_FONTS_CALL: LazyLock<Regex> = LazyLock::new(|| {
    // `GoogleFonts.<font>(`, whitespace allowed before the paren
    Regex::new(r"GoogleFonts\.\w+\s*\(").unwrap()
});

/// A fixed find-and-replace rule.
#[derive(Debug)]
pub struct RewriteRule {
    pub name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

impl RewriteRule {
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Apply the rule, returning the new text and the number of matches.
    fn apply(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        let replaced = self.pattern.replace_all(text, NoExpand(self.replacement));
        (replaced.into_owned(), count)
    }
}

/// Rules in application order.
pub static RULES: [RewriteRule; 2] = [
    RewriteRule {
        name: "strip_import",
        pattern: &GOOGLE_FONTS_IMPORT,
        replacement: "",
    },
    RewriteRule {
        name: "rewrite_call",
        pattern: &GOOGLE_FONTS_CALL,
        replacement: "TextStyle(fontFamily: 'GoogleSansFlex', ",
    },
];

/// How many substitutions one rule made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule: &'static str,
    pub count: usize,
}

/// Result of running every rule over one text.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub content: String,
    pub changed: bool,
    /// Only rules that matched at least once.
    pub replacements: Vec<RuleHit>,
}

/// Run both rules over `text`.
pub fn rewrite_text(text: &str) -> Rewrite {
    let mut content = text.to_string();
    let mut replacements = Vec::new();

    for rule in RULES.iter() {
        let (next, count) = rule.apply(&content);
        if count > 0 {
            replacements.push(RuleHit {
                rule: rule.name,
                count,
            });
        }
        content = next;
    }

    let changed = content != text;
    Rewrite {
        content,
        changed,
        replacements,
    }
}
