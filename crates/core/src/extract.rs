//! Fragment extraction: isolate the markup fragment from a raw model
//! response.
//!
//! Model responses arrive as free text. The markup we want may be wrapped
//! in a markdown fence (with or without a language tag), prefixed with
//! prose, or wrapped in component boilerplate the prompt told the model
//! not to emit. Extraction is best-effort and never fails: the worst case
//! is returning text the renderer will later reject.

const FENCE: &str = "```";

/// Extract the markup fragment from a raw model response.
///
/// Resolution order:
/// 1. The first complete fenced code block -- inner content, trimmed.
///    A language tag on the fence line is discarded.
/// 2. Boilerplate cleanup -- drop `import`/`export` lines, unwrap a
///    `return ( ... );` wrapper.
/// 3. The whole trimmed input.
pub fn extract_fragment(raw: &str) -> String {
    if let Some(inner) = first_fenced_block(raw) {
        return inner.trim().to_string();
    }
    strip_boilerplate(raw)
}

/// Find the first complete triple-backtick fenced block and return its
/// inner content. Returns `None` when there is no fence or the fence is
/// unterminated.
fn first_fenced_block(raw: &str) -> Option<&str> {
    let open = raw.find(FENCE)?;
    let after_open = &raw[open + FENCE.len()..];

    // The rest of the fence line is the optional language tag; the block
    // body starts on the next line. A fence with no newline after it has
    // no body.
    let body_start = after_open.find('\n')?;
    let body = &after_open[body_start + 1..];

    let close = body.find(FENCE)?;
    Some(&body[..close])
}

/// Heuristic cleanup for unfenced responses: drop module boilerplate
/// lines and unwrap a `return ( ... );` expression wrapper.
fn strip_boilerplate(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .lines()
        .filter(|line| !is_boilerplate_line(line))
        .collect();
    let joined = kept.join("\n");

    if let Some(inner) = unwrap_return(&joined) {
        return inner.trim().to_string();
    }

    let trimmed = joined.trim();
    if trimmed.is_empty() {
        // Everything was boilerplate (or the input was empty); fall back
        // to the whole trimmed input so nothing is silently lost.
        return raw.trim().to_string();
    }
    trimmed.to_string()
}

fn is_boilerplate_line(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("import ") || t.starts_with("export ")
}

/// Unwrap `return ( <markup> );`, the shape a model emits when it wraps
/// the fragment in a component body despite instructions. First closing
/// `);` after the opening wins.
fn unwrap_return(s: &str) -> Option<&str> {
    let open = s.find("return (")?;
    let body = &s[open + "return (".len()..];
    let close = body.find(");")?;
    Some(&body[..close])
}
