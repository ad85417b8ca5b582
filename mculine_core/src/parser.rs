use std::ops::Range;

use crate::lexer::SpannedToken;
use crate::lexer::Token;
use crate::lexer::tokenize;

/// Characters accepted on either side of an included path.
const QUOTES: [u8; 3] = [b'"', b'\'', b'|'];

/// A single conditional include found in a dispatch file:
///
/// ```c
/// #ifdef STM32F2xx
/// #include "stm32f2xx_ll_usb.h"
/// #endif
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
	/// The `#ifdef` symbol, which is also the sort key.
	pub identifier: &'a str,
	/// The included file name, without quotes.
	pub path: &'a str,
	/// The directive as written, from `#ifdef` through `#endif`.
	pub raw: &'a str,
	/// Byte range of `raw` in the parsed text.
	pub span: Range<usize>,
}

/// A piece of a dispatch file. Concatenating the text of every segment in
/// order reproduces the parsed content exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
	/// Anything that is not a directive, kept verbatim.
	Text(&'a str),
	Directive(Directive<'a>),
}

impl<'a> Segment<'a> {
	pub fn text(&self) -> &'a str {
		match self {
			Segment::Text(text) => text,
			Segment::Directive(directive) => directive.raw,
		}
	}

	pub fn as_directive(&self) -> Option<&Directive<'a>> {
		match self {
			Segment::Directive(directive) => Some(directive),
			Segment::Text(_) => None,
		}
	}

	fn is_blank(&self) -> bool {
		match self {
			Segment::Text(text) => text.bytes().all(is_space_byte),
			Segment::Directive(_) => false,
		}
	}
}

/// Split `content` into directive and text segments.
///
/// A directive must open at the start of a line and its `#endif` must be the
/// last thing on its line. The parts may be separated by any whitespace,
/// including blank lines.
pub fn parse_segments(content: &str) -> Vec<Segment<'_>> {
	let tokens = tokenize(content);
	let mut segments = Vec::new();
	let mut text_start = 0;
	let mut cursor = 0;

	while cursor < tokens.len() {
		let at_line_start = cursor == 0 || tokens[cursor - 1].token == Token::Newline;

		if at_line_start && tokens[cursor].token == Token::Ifdef {
			if let Some((directive, next)) = match_directive(content, &tokens, cursor) {
				if text_start < directive.span.start {
					segments.push(Segment::Text(&content[text_start..directive.span.start]));
				}
				text_start = directive.span.end;
				segments.push(Segment::Directive(directive));
				cursor = next;
				continue;
			}
		}

		cursor += 1;
	}

	if text_start < content.len() {
		segments.push(Segment::Text(&content[text_start..]));
	}

	segments
}

/// All directives of `content` in file order.
pub fn parse_directives(content: &str) -> Vec<Directive<'_>> {
	parse_segments(content)
		.into_iter()
		.filter_map(|segment| {
			match segment {
				Segment::Directive(directive) => Some(directive),
				Segment::Text(_) => None,
			}
		})
		.collect()
}

/// Byte range of the first run of directives, from the first `#ifdef` to the
/// last `#endif`. A run continues across text that is only whitespace.
/// Directives after any other text are not part of it.
pub fn first_run(segments: &[Segment<'_>]) -> Option<Range<usize>> {
	let first = segments.iter().position(|segment| segment.as_directive().is_some())?;
	let mut run = segments[first].as_directive()?.span.clone();

	for segment in &segments[first + 1..] {
		match segment {
			Segment::Directive(directive) => run.end = directive.span.end,
			text if text.is_blank() => {}
			Segment::Text(_) => break,
		}
	}

	Some(run)
}

/// Try to read `#ifdef ID #include "path" #endif` starting at the `#ifdef`
/// token at `start`. Returns the directive and the index of the first token
/// after `#endif`.
fn match_directive<'a>(
	content: &'a str,
	tokens: &[SpannedToken],
	start: usize,
) -> Option<(Directive<'a>, usize)> {
	let mut cursor = skip_required_space(tokens, start + 1)?;

	let identifier = tokens.get(cursor).filter(|t| !t.token.is_space())?;
	cursor = skip_required_space(tokens, cursor + 1)?;

	tokens.get(cursor).filter(|t| t.token == Token::Include)?;
	cursor = skip_required_space(tokens, cursor + 1)?;

	let quoted = tokens.get(cursor).filter(|t| t.token == Token::Word)?;
	let path = unquote(&content[quoted.span.clone()])?;
	cursor = skip_required_space(tokens, cursor + 1)?;

	let endif = tokens.get(cursor).filter(|t| t.token == Token::Endif)?;
	if !ends_line(tokens, cursor + 1) {
		return None;
	}

	let span = tokens[start].span.start..endif.span.end;
	let directive = Directive {
		identifier: &content[identifier.span.clone()],
		path,
		raw: &content[span.clone()],
		span,
	};

	Some((directive, cursor + 1))
}

/// Skip one or more whitespace tokens. Returns `None` when there are none.
fn skip_required_space(tokens: &[SpannedToken], start: usize) -> Option<usize> {
	let end = tokens[start.min(tokens.len())..]
		.iter()
		.position(|t| !t.token.is_space())
		.map_or(tokens.len(), |offset| start + offset);

	(end > start).then_some(end)
}

/// Only spaces may follow `#endif` before the line ends.
fn ends_line(tokens: &[SpannedToken], index: usize) -> bool {
	match tokens.get(index).map(|t| t.token) {
		None | Some(Token::Newline) => true,
		Some(Token::Whitespace) => {
			matches!(tokens.get(index + 1).map(|t| t.token), None | Some(Token::Newline))
		}
		Some(_) => false,
	}
}

/// `"name.h"` → `name.h`. Any of the accepted quote characters may appear on
/// either side and the name must not be empty.
fn unquote(word: &str) -> Option<&str> {
	let bytes = word.as_bytes();
	let [open, .., close] = bytes else {
		return None;
	};

	if bytes.len() < 3 || !QUOTES.contains(open) || !QUOTES.contains(close) {
		return None;
	}

	Some(&word[1..word.len() - 1])
}

fn is_space_byte(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}
