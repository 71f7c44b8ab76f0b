//! Per-field similarity scoring

use std::ops::Range;

/// Lowest similarity a plain substring hit can score; longer coverage climbs toward 1.0
pub(crate) const SUBSTRING_FLOOR: f64 = 0.8;

/// How well `query` matches `field`, plus the char span that matched.
///
/// Both inputs must already be lowercased and `query` trimmed. Returns `None`
/// when either side is empty.
pub(crate) fn field_similarity(query: &str, field: &str) -> Option<(f64, Range<usize>)> {
	if query.is_empty() || field.is_empty() {
		return None;
	}

	let query_len = query.chars().count();
	let field_len = field.chars().count();

	if field == query {
		return Some((1.0, 0..field_len));
	}

	if let Some(byte_pos) = field.find(query) {
		let start = field[..byte_pos].chars().count();
		let coverage = query_len as f64 / field_len as f64;
		let score = SUBSTRING_FLOOR + (1.0 - SUBSTRING_FLOOR) * coverage;
		return Some((score.min(1.0), start..start + query_len));
	}

	let mut best = (ratio(query, field), 0..field_len);
	for (span, word) in words(field) {
		let score = ratio(query, word);
		if score > best.0 {
			best = (score, span);
		}
	}

	Some(best)
}

/// Normalized Indel similarity in `[0, 1]`
fn ratio(a: &str, b: &str) -> f64 {
	rapidfuzz::fuzz::ratio(a.chars(), b.chars()).clamp(0.0, 1.0)
}

/// Whitespace separated words with their char spans
fn words(text: &str) -> Vec<(Range<usize>, &str)> {
	let mut out = Vec::new();
	let mut start: Option<(usize, usize)> = None;
	let mut char_idx = 0;

	for (byte_idx, ch) in text.char_indices() {
		if ch.is_whitespace() {
			if let Some((char_start, byte_start)) = start.take() {
				out.push((char_start..char_idx, &text[byte_start..byte_idx]));
			}
		} else if start.is_none() {
			start = Some((char_idx, byte_idx));
		}
		char_idx += 1;
	}

	if let Some((char_start, byte_start)) = start {
		out.push((char_start..char_idx, &text[byte_start..]));
	}

	out
}
