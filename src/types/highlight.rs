use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Map byte offsets into `text` onto char positions.
///
/// Offsets that fall inside a multi-byte char are dropped.
pub(crate) fn char_positions(text: &str, byte_offsets: &[usize]) -> Vec<usize> {
	text.char_indices()
		.enumerate()
		.filter(|(_, (byte, _))| byte_offsets.contains(byte))
		.map(|(position, _)| position)
		.collect()
}

/// Build a line that highlights matching character indices within `text`.
pub(crate) fn highlight_line(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: Option<u16>,
	base: Style,
	highlight: Style,
) -> Line<'static> {
	let (display_text, indices) = match max_width.map(usize::from) {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Line::from(Span::styled(display_text, base));
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted { highlight } else { base };
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted { highlight } else { base };
		spans.push(Span::styled(buffer, style));
	}

	Line::from(spans)
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}

	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis = "…";
	let ellipsis_width = ellipsis.width();
	if max_width <= ellipsis_width {
		return (ellipsis.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.to_string();
	truncated.push_str(ellipsis);
	let limit = slice.chars().count();
	let indices = indices.and_then(|indices| {
		let adjusted: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
		(!adjusted.is_empty()).then_some(adjusted)
	});
	(truncated, indices)
}
