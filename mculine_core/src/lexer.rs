use std::ops::Range;

use logos::Logos;

/// Flat tokens for the preprocessor lines the editor cares about. Every
/// maximal run of non-whitespace characters becomes exactly one token, so a
/// keyword glued to other text (`#endif//`) lexes as a plain [`Word`].
///
/// [`Word`]: Token::Word
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	#[token("#ifdef")]
	Ifdef,
	#[token("#include")]
	Include,
	#[token("#endif")]
	Endif,
	#[token("\n")]
	Newline,
	/// ` ` | `\t` | `\r` | `\x0B` | `\x0C`
	#[regex(r"[ \t\r\x0B\x0C]+")]
	Whitespace,
	#[regex(r"[^ \t\r\n\x0B\x0C]+")]
	Word,
}

impl Token {
	/// `\s` in the directive grammar: line breaks count as whitespace.
	pub fn is_space(self) -> bool {
		matches!(self, Token::Whitespace | Token::Newline)
	}
}

/// A token together with its byte range in the lexed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
	pub token: Token,
	pub span: Range<usize>,
}

/// Split `content` into tokens. Bytes logos cannot classify are kept as
/// [`Token::Word`] so the spans always cover the whole input.
pub fn tokenize(content: &str) -> Vec<SpannedToken> {
	Token::lexer(content)
		.spanned()
		.map(|(token, span)| {
			SpannedToken {
				token: token.unwrap_or(Token::Word),
				span,
			}
		})
		.collect()
}
