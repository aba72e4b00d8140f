//! Text sanitization and terminal-safe rendering helpers.
//!
//! Feed text arrives as HTML fragments with entity escapes and arbitrary
//! whitespace, and — being untrusted input headed for a terminal — may also
//! carry control characters or ANSI escape sequences. Everything rendered by
//! the UI passes through here first.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::feed::FeedItem;

/// Convert an HTML fragment to plain text.
///
/// Removes `<script>` and `<style>` blocks wholesale (case-insensitive),
/// strips remaining tags, decodes common character entities, collapses
/// whitespace runs to single spaces, and trims both ends.
pub fn html_to_plain_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let stripped = strip_tags(&drop_blocks(input, &["script", "style"]));
    let decoded = decode_entities(&stripped);
    collapse_whitespace(&decoded)
}

/// Sanitize one feed item in place.
///
/// `title`, `media_description`, and `media_text` are converted to plain
/// text and trimmed when present; absent fields stay absent. `media_title`
/// is deliberately left untouched — the original screen never sanitized it,
/// and the subtitle fallback chain depends on seeing it raw.
pub fn sanitize_item(item: &mut FeedItem) {
    for field in [
        &mut item.title,
        &mut item.media_description,
        &mut item.media_text,
    ] {
        if let Some(text) = field.as_mut() {
            *text = html_to_plain_text(text);
        }
    }
}

/// Sanitize every item of a freshly parsed feed.
///
/// The list is not considered ready for rendering until this has run.
pub fn sanitize_all(items: &mut [FeedItem]) {
    for item in items.iter_mut() {
        sanitize_item(item);
    }
}

/// Remove `<tag>...</tag>` blocks, contents included. An unterminated block
/// drops everything to the end of input.
fn drop_blocks(input: &str, tags: &[&str]) -> String {
    let mut buf = input.to_string();
    for tag in tags {
        let open = format!("<{}", tag);
        let close = format!("</{}>", tag);
        loop {
            // ASCII lowercasing keeps byte offsets valid for `buf`.
            let lower = buf.to_ascii_lowercase();
            let Some(start) = lower.find(&open) else { break };
            match lower[start..].find(&close) {
                Some(rel) => {
                    buf.replace_range(start..start + rel + close.len(), "");
                }
                None => {
                    buf.truncate(start);
                    break;
                }
            }
        }
    }
    buf
}

/// Drop everything between `<` and the matching `>`.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the handful of character entities that actually occur in feed
/// text: the named XML/HTML basics plus numeric references.
fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // Look for the terminator within the next few characters; entity
        // names are short and this avoids scanning the whole tail.
        let end = rest
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);
        let Some(end) = end else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => entity
                .strip_prefix('#')
                .and_then(|num| {
                    num.strip_prefix('x')
                        .or_else(|| num.strip_prefix('X'))
                        .map_or_else(|| num.parse::<u32>().ok(), |hex| u32::from_str_radix(hex, 16).ok())
                })
                .and_then(char::from_u32),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Truncate to at most `max` characters (character count, not bytes and not
/// display columns — this mirrors the subtitle cap of the original screen).
pub fn truncate_chars(s: &str, max: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => Cow::Owned(s[..byte_idx].to_string()),
        None => Cow::Borrowed(s),
    }
}

/// Strip ASCII control characters and ANSI escape sequences.
///
/// Sanitized feed text should already be clean, but this is the last line of
/// defense before untrusted bytes reach the terminal. Tab, newline, and
/// carriage return are preserved. CSI sequences (`ESC [` ... final byte) and
/// OSC sequences (`ESC ]` ... BEL or `ESC \`) are dropped whole; any other
/// control character is dropped individually.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    fn is_control(c: char) -> bool {
        matches!(c, '\u{00}'..='\u{1f}' | '\u{7f}') && !matches!(c, '\t' | '\n' | '\r')
    }

    if !s.chars().any(is_control) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Consume parameter bytes until the final byte 0x40..=0x7e.
                    for t in chars.by_ref() {
                        if ('\u{40}'..='\u{7e}').contains(&t) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(t) = chars.next() {
                        if t == '\u{07}' {
                            break;
                        }
                        if t == '\u{1b}' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {} // bare ESC: drop it
            }
        } else if !is_control(c) {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

const ELLIPSIS: &str = "...";

/// Truncate to a maximum terminal display width, appending `...` when text
/// was cut. Unicode-aware: CJK characters and emoji count as two columns.
///
/// Widths of three columns or fewer return as many characters as fit,
/// without the ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut width = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS.len() {
        // Too narrow for "char + ellipsis": recompute against max_width itself.
        let mut width = 0;
        let mut end = 0;
        for (idx, c) in s.char_indices() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if width + w > max_width {
                break;
            }
            width += w;
            end = idx + c.len_utf8();
        }
        return Cow::Owned(s[..end].to_string());
    }

    Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
}
