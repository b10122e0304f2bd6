//! Text wrapping for body content

use crate::constants::DEFAULT_LINE_HEIGHT_MULTIPLIER;
use crate::font::{self, FontMetrics};
use tracing::trace;

/// Break text into lines that fit within `max_width` points.
///
/// Explicit newlines are preserved as line breaks. Words longer than a
/// whole line are split on character boundaries, which keeps multi-byte
/// UTF-8 intact.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: Option<&dyn FontMetrics>,
) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut all_lines = Vec::new();

    for segment in text.split('\n') {
        let words: Vec<&str> = segment.split_whitespace().collect();
        if words.is_empty() {
            // Blank or whitespace-only segment keeps its line
            all_lines.push(String::new());
            continue;
        }

        let space_width = font::text_width(" ", font_size, metrics);
        let mut current_line = String::new();
        let mut current_width: f32 = 0.0;

        for word in words {
            let word_width = font::text_width(word, font_size, metrics);

            if word_width > max_width {
                // Flush the line in progress, then split the word itself
                if !current_line.is_empty() {
                    all_lines.push(std::mem::take(&mut current_line));
                }
                let (chunks, tail, tail_width) = split_long_word(word, max_width, font_size, metrics);
                all_lines.extend(chunks);
                current_line = tail;
                current_width = tail_width;
                continue;
            }

            if current_width > 0.0 && current_width + space_width + word_width > max_width {
                all_lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_width = word_width;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += space_width;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            all_lines.push(current_line);
        }
    }

    if all_lines.is_empty() {
        all_lines.push(String::new());
    }

    trace!("Wrapped text into {} lines", all_lines.len());
    all_lines
}

/// Split a word wider than a full line into full-width chunks plus the
/// remaining partial chunk and its width.
fn split_long_word(
    word: &str,
    max_width: f32,
    font_size: f32,
    metrics: Option<&dyn FontMetrics>,
) -> (Vec<String>, String, f32) {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width: f32 = 0.0;

    for ch in word.chars() {
        let cw = font::text_width(&ch.to_string(), font_size, metrics);
        if !chunk.is_empty() && chunk_width + cw > max_width {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0.0;
        }
        chunk.push(ch);
        chunk_width += cw;
    }

    (chunks, chunk, chunk_width)
}

/// Height in points needed to render `text` wrapped at `max_width`
pub fn wrapped_text_height(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: Option<&dyn FontMetrics>,
) -> f32 {
    let lines = wrap_text(text, max_width, font_size, metrics);
    lines.len() as f32 * line_height(font_size)
}

/// Line height for a font size
pub fn line_height(font_size: f32) -> f32 {
    font_size * DEFAULT_LINE_HEIGHT_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_long_text() {
        let text = "This is a long piece of text that should be wrapped into multiple lines";
        let lines = wrap_text(text, 100.0, 10.0, None);
        assert!(lines.len() > 1);
    }

    #[test]
    fn test_empty_text() {
        let lines = wrap_text("", 100.0, 10.0, None);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_newlines_preserved() {
        let lines = wrap_text("Line 1\nLine 2\nLine 3", 200.0, 10.0, None);
        assert_eq!(lines, vec!["Line 1", "Line 2", "Line 3"]);
    }

    #[test]
    fn test_consecutive_newlines_keep_blank_lines() {
        let lines = wrap_text("Line 1\n\nLine 3", 200.0, 10.0, None);
        assert_eq!(lines, vec!["Line 1", "", "Line 3"]);
    }

    #[test]
    fn test_long_word_split_preserves_chars() {
        let text = "supercalifragilisticexpialidocious";
        let lines = wrap_text(text, 50.0, 10.0, None);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(""), text);
    }

    #[test]
    fn test_multibyte_long_word_no_panic() {
        let text = "caf\u{00e9}caf\u{00e9}caf\u{00e9}caf\u{00e9}caf\u{00e9}";
        let lines = wrap_text(text, 30.0, 10.0, None);
        assert_eq!(lines.join(""), text);
    }

    #[test]
    fn test_height_counts_lines() {
        let h = wrapped_text_height("Line 1\nLine 2\nLine 3", 200.0, 10.0, None);
        // 3 lines at 10pt with the 1.2 multiplier
        assert!((h - 36.0).abs() < 0.001);
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_text("Bulletin", 500.0, 10.0, None);
        assert_eq!(lines, vec!["Bulletin"]);
    }
}
