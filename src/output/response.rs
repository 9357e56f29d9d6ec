//! CLI console output.
//!
//! Provides the `Updated <path>` report lines, error rendering, and exit code
//! mapping.

use fontswap::rewrite::RuleHit;
use fontswap::{Error, ErrorCode, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn updated_line(path: &Path) -> String {
    format!("Updated {}", path.display())
}

/// Print one `Updated <path>` line on stdout.
pub fn print_updated(path: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", updated_line(path)) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Per-rule substitution counts, e.g. `strip_import x1, rewrite_call x3`.
pub fn replacement_counts(hits: &[RuleHit]) -> String {
    hits.iter()
        .map(|hit| format!("{} x{}", hit.rule, hit.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_error(err: &Error) -> String {
    let mut out = format!("Error: {} [{}]", err.message, err.code.as_str());

    let has_details = err
        .details
        .as_object()
        .map(|obj| !obj.is_empty())
        .unwrap_or(!err.details.is_null());
    if has_details {
        if let Ok(details) = serde_json::to_string_pretty(&err.details) {
            out.push('\n');
            out.push_str(&details);
        }
    }

    for hint in &err.hints {
        out.push_str("\nHint: ");
        out.push_str(&hint.message);
    }

    out
}

pub fn print_error(err: &Error) {
    eprintln!("{}", render_error(err));
}

pub fn exit_code_for_error(code: ErrorCode) -> u8 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::RootNotFound => 4,

        ErrorCode::InternalIoError | ErrorCode::InternalDecodeError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_line_names_the_path() {
        assert_eq!(
            updated_line(Path::new("lumina_lanka/lib/main.dart")),
            "Updated lumina_lanka/lib/main.dart"
        );
    }

    #[test]
    fn replacement_counts_lists_each_rule() {
        let hits = [
            RuleHit {
                rule: "strip_import",
                count: 1,
            },
            RuleHit {
                rule: "rewrite_call",
                count: 3,
            },
        ];
        assert_eq!(
            replacement_counts(&hits),
            "strip_import x1, rewrite_call x3"
        );
        assert_eq!(replacement_counts(&[]), "");
    }

    #[test]
    fn render_error_includes_code_details_and_hint() {
        let rendered = render_error(&Error::root_not_found("lumina_lanka/lib"));

        assert!(rendered.starts_with("Error: Root directory not found [root.not_found]"));
        assert!(rendered.contains("\"path\": \"lumina_lanka/lib\""));
        assert!(rendered.contains("\nHint: "));
    }

    #[test]
    fn render_error_skips_empty_details() {
        let err = Error::new(
            ErrorCode::InternalIoError,
            "IO error",
            serde_json::Value::Object(serde_json::Map::new()),
        );
        assert_eq!(render_error(&err), "Error: IO error [internal.io_error]");
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::RootNotFound), 4);
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
        assert_eq!(exit_code_for_error(ErrorCode::InternalDecodeError), 1);
    }
}
