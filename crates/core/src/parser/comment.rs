//! Comment text normalisation
//!
//! Turns a group of raw Go comment tokens into plain text:
//! - `//` and one following space are stripped, `/*` and `*/` are stripped
//! - tool directives (`//go:generate ...`, `//line ...`) are dropped
//! - trailing whitespace is trimmed on every line
//! - leading and trailing blank lines are removed, inner runs collapse to one

/// Extract the text of a comment group
///
/// `comments` are the raw tokens in source order, markers included.
pub fn text(comments: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for raw in comments {
        let body = if let Some(rest) = raw.strip_prefix("//") {
            if let Some(rest) = rest.strip_prefix(' ') {
                rest
            } else if is_directive(rest) {
                continue;
            } else {
                rest
            }
        } else if let Some(rest) = raw.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            raw
        };

        lines.extend(body.split('\n').map(|line| line.trim_end()));
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let blank = line.is_empty();
        let previous_blank = out.last().map_or(true, |l| l.is_empty());
        if blank && previous_blank {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }

    out.join("\n")
}

/// Whether the text after `//` is a tool directive rather than prose
///
/// Matches `line `, `extern `, `export ` and the `name:value` form
/// (`go:generate`, `nolint:errcheck`).
fn is_directive(body: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| body.starts_with(prefix))
    {
        return true;
    }

    let is_word = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    match body.split_once(':') {
        Some((name, value)) => {
            !name.is_empty() && name.chars().all(is_word) && value.starts_with(is_word)
        }
        None => false,
    }
}
