//! Lexer (tokenizer) for lcc source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer never fails: a character that matches no rule becomes a single
//! [`TokenKind::Unknown`] token and it is up to the parser to reject it.
//!
//! Besides the batch [`Lexer::tokenize`], the lexer can be pulled one token at
//! a time through [`Lexer::next_token`] / [`Lexer::peek_token`] (or as an
//! [`Iterator`]), with a single cached look-ahead slot.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Let,
    Fn,
    Exit,
    If, // reserved, no grammar rule uses it yet

    // Operators
    Plus,  // +
    Minus, // -
    Eq,    // =
    EqEq,  // ==

    // Data types
    Int,

    // Literals
    IntLiteral,
    FloatLiteral, // reserved, only produced by `classify`

    Ident,

    // Punctuation
    LParen,    // (
    RParen,    // )
    Colon,     // :
    Semicolon, // ;
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,

    Unknown,
}

/// Coarse grouping of [`TokenKind`]s; the parser dispatches on these where
/// the grammar names a whole category rather than a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Keyword,
    Operator,
    DataType,
    Literal,
    Identifier,
    Punctuation,
    Unknown,
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("let", TokenKind::Let),
        ("fn", TokenKind::Fn),
        ("exit", TokenKind::Exit),
        ("if", TokenKind::If),
        ("int", TokenKind::Int),
    ]
    .into_iter()
    .collect()
});

static SYMBOLS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("=", TokenKind::Eq),
        ("==", TokenKind::EqEq),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        (":", TokenKind::Colon),
        (";", TokenKind::Semicolon),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        (",", TokenKind::Comma),
    ]
    .into_iter()
    .collect()
});

/// Longest symbol in [`SYMBOLS`], in characters.
const MAX_SYMBOL_LEN: usize = 2;

impl TokenKind {
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Let | TokenKind::Fn | TokenKind::Exit | TokenKind::If => {
                TokenCategory::Keyword
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Eq | TokenKind::EqEq => {
                TokenCategory::Operator
            }
            TokenKind::Int => TokenCategory::DataType,
            TokenKind::IntLiteral | TokenKind::FloatLiteral => TokenCategory::Literal,
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Comma => TokenCategory::Punctuation,
            TokenKind::Unknown => TokenCategory::Unknown,
        }
    }

    /// Classify an already assembled lexeme.
    ///
    /// Lookup order: integer literal, float literal, keyword table, symbol
    /// table, and finally identifier. An empty lexeme is `Unknown`.
    pub fn classify(lexeme: &str) -> TokenKind {
        if lexeme.is_empty() {
            TokenKind::Unknown
        } else if is_numeric(lexeme) {
            TokenKind::IntLiteral
        } else if is_float_literal(lexeme) {
            TokenKind::FloatLiteral
        } else if let Some(&kind) = KEYWORDS.get(lexeme) {
            kind
        } else if let Some(&kind) = SYMBOLS.get(lexeme) {
            kind
        } else {
            TokenKind::Ident
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Let => "'let'",
            TokenKind::Fn => "'fn'",
            TokenKind::Exit => "'exit'",
            TokenKind::If => "'if'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::Int => "'int'",
            TokenKind::IntLiteral => "int literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::Ident => "identifier",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

fn is_numeric(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.chars().all(|c| c.is_ascii_digit())
}

/// `digits "." digits`, both sides non-empty.
fn is_float_literal(lexeme: &str) -> bool {
    match lexeme.split_once('.') {
        Some((whole, frac)) => is_numeric(whole) && is_numeric(frac),
        None => false,
    }
}

/// One lexeme together with its kind and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            value: value.into(),
            kind,
            location,
        }
    }

    /// The parser's synthetic end-of-stream token: unknown kind, empty value.
    pub fn end_of_stream(location: SourceLocation) -> Self {
        Self::new(TokenKind::Unknown, String::new(), location)
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.kind == TokenKind::Unknown && self.value.is_empty()
    }

    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Width of the lexeme in characters
    pub fn width(&self) -> usize {
        self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Unknown if self.value.is_empty() => write!(f, "end of input"),
            TokenKind::Unknown => write!(f, "unknown token '{}'", self.value),
            TokenKind::Ident => write!(f, "identifier '{}'", self.value),
            TokenKind::IntLiteral => write!(f, "int literal {}", self.value),
            TokenKind::FloatLiteral => write!(f, "float literal {}", self.value),
            _ => write!(f, "'{}'", self.value),
        }
    }
}

/// Tokenize `source` with a fresh lexer.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Lexer for lcc source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    peeked: Option<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            peeked: None,
        }
    }

    /// Tokenize the entire input, starting over from the beginning.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.reset();

        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Return the next token and advance past it. `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.peeked.take() {
            return Some(token);
        }
        self.scan_token()
    }

    /// Look at the next token without consuming it.
    pub fn peek_token(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.scan_token();
        }
        self.peeked.as_ref()
    }

    /// Rewind to the start of the input and drop any cached look-ahead.
    pub fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
        self.column = 1;
        self.peeked = None;
    }

    fn scan_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = self.peek()?;

        if ch.is_ascii_digit() {
            // Only a digit run; a '.' is never part of a number here.
            let lexeme = self.consume_while(|c| c.is_ascii_digit());
            return Some(Token::new(TokenKind::classify(&lexeme), lexeme, loc));
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let lexeme = self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
            return Some(Token::new(TokenKind::classify(&lexeme), lexeme, loc));
        }

        Some(self.symbol(loc))
    }

    /// Longest match against the symbol table, widest window first.
    fn symbol(&mut self, loc: SourceLocation) -> Token {
        for width in (1..=MAX_SYMBOL_LEN).rev() {
            let Some(window) = self.input.get(self.position..self.position + width) else {
                continue;
            };
            let window: String = window.iter().collect();
            if let Some(&kind) = SYMBOLS.get(window.as_str()) {
                for _ in 0..width {
                    self.advance();
                }
                return Token::new(kind, window, loc);
            }
        }

        // Nothing matched: exactly one character becomes an unknown token.
        let value = self.advance().map(String::from).unwrap_or_default();
        Token::new(TokenKind::Unknown, value, loc)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut lexeme = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            lexeme.push(ch);
            self.advance();
        }
        lexeme
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n\r\n   ").is_empty());
    }

    #[test]
    fn test_var_decl_tokens() {
        let tokens = tokenize("let x : int = 5 + 3;");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Int,
                TokenKind::Eq,
                TokenKind::IntLiteral,
                TokenKind::Plus,
                TokenKind::IntLiteral,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(tokens[1].value, "x");
        assert_eq!(tokens[5].value, "5");
        assert_eq!(tokens[7].value, "3");
    }

    #[test]
    fn test_longest_symbol_match() {
        assert_eq!(kinds("=="), vec![TokenKind::EqEq]);
        assert_eq!(kinds("= ="), vec![TokenKind::Eq, TokenKind::Eq]);
        assert_eq!(kinds("==="), vec![TokenKind::EqEq, TokenKind::Eq]);
        assert_eq!(kinds("a==b"), vec![TokenKind::Ident, TokenKind::EqEq, TokenKind::Ident]);
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = tokenize("x @ 1.5");

        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].value, "@");
        // '.' is not a symbol, so a float splits into three tokens
        assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[3].kind, TokenKind::Unknown);
        assert_eq!(tokens[3].value, ".");
        assert_eq!(tokens[4].kind, TokenKind::IntLiteral);
    }

    #[test]
    fn test_words_and_numbers() {
        let tokens = tokenize("fn exit if _tmp1 42abc");

        assert_eq!(tokens[0].kind, TokenKind::Fn);
        assert_eq!(tokens[1].kind, TokenKind::Exit);
        assert_eq!(tokens[2].kind, TokenKind::If);
        assert_eq!(tokens[3].kind, TokenKind::Ident);
        assert_eq!(tokens[3].value, "_tmp1");
        assert_eq!(tokens[4].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[4].value, "42");
        assert_eq!(tokens[5].kind, TokenKind::Ident);
        assert_eq!(tokens[5].value, "abc");
    }

    #[test]
    fn test_classify() {
        assert_eq!(TokenKind::classify("123"), TokenKind::IntLiteral);
        assert_eq!(TokenKind::classify("3.14"), TokenKind::FloatLiteral);
        assert_eq!(TokenKind::classify("3."), TokenKind::Ident);
        assert_eq!(TokenKind::classify(".5"), TokenKind::Ident);
        assert_eq!(TokenKind::classify("1.2.3"), TokenKind::Ident);
        assert_eq!(TokenKind::classify("let"), TokenKind::Let);
        assert_eq!(TokenKind::classify("=="), TokenKind::EqEq);
        assert_eq!(TokenKind::classify("letter"), TokenKind::Ident);
        assert_eq!(TokenKind::classify(""), TokenKind::Unknown);
    }

    #[test]
    fn test_categories() {
        assert_eq!(TokenKind::Int.category(), TokenCategory::DataType);
        assert_eq!(TokenKind::If.category(), TokenCategory::Keyword);
        assert_eq!(TokenKind::EqEq.category(), TokenCategory::Operator);
        assert_eq!(TokenKind::FloatLiteral.category(), TokenCategory::Literal);
        assert_eq!(TokenKind::Comma.category(), TokenCategory::Punctuation);
        assert_eq!(TokenKind::Unknown.category(), TokenCategory::Unknown);
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("let a\n  exit(a);");

        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 5));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 3));
        assert_eq!(tokens[3].location, SourceLocation::new(2, 7));
    }

    #[test]
    fn test_peek_then_next() {
        let mut lexer = Lexer::new("a = 1;");

        let peeked = lexer.peek_token().cloned().unwrap();
        assert_eq!(peeked.kind, TokenKind::Ident);
        // peeking twice does not advance
        assert_eq!(lexer.peek_token(), Some(&peeked));
        assert_eq!(lexer.next_token(), Some(peeked));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Eq));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::IntLiteral));
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Semicolon));
        assert_eq!(lexer.peek_token(), None);
        assert_eq!(lexer.next_token(), None);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut lexer = Lexer::new("exit(0);");
        let first = lexer.next_token();
        lexer.peek_token();

        lexer.reset();
        assert_eq!(lexer.next_token(), first);
        assert_eq!(lexer.by_ref().count(), 4);
    }

    #[test]
    fn test_tokenize_is_repeatable() {
        let source = "fn int main(int argc) { exit(argc - 1); }";
        let mut lexer = Lexer::new(source);

        let first = lexer.tokenize();
        let second = lexer.tokenize();
        assert_eq!(first, second);
        assert_eq!(first, tokenize(source));
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("x 7 ; $");

        assert_eq!(tokens[0].to_string(), "identifier 'x'");
        assert_eq!(tokens[1].to_string(), "int literal 7");
        assert_eq!(tokens[2].to_string(), "';'");
        assert_eq!(tokens[3].to_string(), "unknown token '$'");
        assert_eq!(
            Token::end_of_stream(SourceLocation::new(1, 1)).to_string(),
            "end of input"
        );
    }
}
