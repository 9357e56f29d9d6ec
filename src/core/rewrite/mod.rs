//! Dart font migration: drop the google_fonts import and turn every
//! `GoogleFonts.<font>(` call into a `TextStyle(fontFamily: ..., ` call.
//!
//! Walks `.dart` files under a root, rewrites each one's full text with two
//! fixed regex rules, and writes back only the files that changed.

mod rules;
mod updater;
mod walker;

pub use rules::{rewrite_text, Rewrite, RewriteRule, RuleHit, FONT_FAMILY, RULES};
pub use updater::{rewrite_tree, update_file, FileOutcome, RewriteSummary};
pub use walker::{is_source_file, SourceFiles, SOURCE_SUFFIX};
