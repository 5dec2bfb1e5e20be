//! Single-pass tokenizer for duration strings.
//!
//! Input is cleaned (trimmed, lowercased, internal whitespace removed, one
//! leading sign extracted) and then scanned left to right into `Number`,
//! `Unit`, and `Garbage` tokens. Recognition of unit symbols happens later,
//! in the parser; the tokenizer only classifies character runs.

/// Classification of a scanned character run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of ASCII digits and `.`.
    Number,
    /// A maximal run of alphabetic characters. May or may not name a known
    /// unit; the parser decides.
    Unit,
    /// A single character that fits neither run. Signals garbage was present.
    Garbage,
}

/// One scanned token. Garbage tokens keep their single offending character
/// so errors can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: String) -> Self {
        Token { kind, text }
    }
}

/// The result of tokenizing one input string: the ordered token sequence plus
/// the extracted leading sign. Lives only for the duration of one parse call.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    negative: bool,
}

impl TokenStream {
    /// All tokens in input order, garbage included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The tokens with garbage filtered out, for lenient parsing.
    pub fn clean(&self) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Garbage)
            .collect()
    }

    /// Whether any garbage token was produced during the scan.
    pub fn has_garbage(&self) -> bool {
        self.tokens.iter().any(|t| t.kind == TokenKind::Garbage)
    }

    /// Whether the input carried a leading `-`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

/// Scans a duration string into a `TokenStream`.
///
/// Preprocessing: trim, lowercase, strip all internal whitespace, and consume
/// at most one leading `+`/`-`. The sign is handled here rather than in the
/// scan loop so that `"-5s"` tokenizes without a garbage token and the sign
/// applies to the whole accumulated total, never per component.
pub fn tokenize(input: &str) -> TokenStream {
    let cleaned: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let chars: Vec<char> = rest.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if is_number_char(c) {
            tokens.push(Token::new(TokenKind::Number, read_run(&chars, &mut pos, is_number_char)));
        } else if c.is_alphabetic() {
            tokens.push(Token::new(TokenKind::Unit, read_run(&chars, &mut pos, char::is_alphabetic)));
        } else {
            tokens.push(Token::new(TokenKind::Garbage, c.to_string()));
            pos += 1;
        }
    }

    TokenStream { tokens, negative }
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Greedily consumes the maximal run of characters satisfying `pred`,
/// advancing the cursor past it.
fn read_run(chars: &[char], pos: &mut usize, pred: fn(char) -> bool) -> String {
    let start = *pos;
    while *pos < chars.len() && pred(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}
