//! Scanner (tokenizer) for sild source code
//!
//! Produces one [`Token`] per call to [`Scanner::next_token`], so the parser
//! pulls tokens on demand instead of receiving a pre-built list.
//!
//! Words are classified by the [`WordContext`] they appear in: right after a
//! `:` or right before a `=`, a word is looked up in the type-name table,
//! otherwise in the keyword table. This is what lets `number` be a type in
//! `let x: number = 1;` and still be usable as a plain identifier elsewhere.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // Identifiers and literals
    Ident,
    Number,
    String,
    Boolean,

    // Punctuation
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Bang,      // !
    Assign,    // =

    // Keywords
    Let,
    Function,
    Return,

    // Type names
    TypeNumber,
    TypeString,
    TypeBoolean,
    TypeVoid,

    /// Unrecognized character, only produced by a strict scanner
    Illegal,
}

impl TokenKind {
    pub fn is_type_name(self) -> bool {
        matches!(
            self,
            TokenKind::TypeNumber
                | TokenKind::TypeString
                | TokenKind::TypeBoolean
                | TokenKind::TypeVoid
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number literal",
            TokenKind::String => "string literal",
            TokenKind::Boolean => "boolean literal",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Bang => "'!'",
            TokenKind::Assign => "'='",
            TokenKind::Let => "'let'",
            TokenKind::Function => "'function'",
            TokenKind::Return => "'return'",
            TokenKind::TypeNumber => "type 'number'",
            TokenKind::TypeString => "type 'string'",
            TokenKind::TypeBoolean => "type 'boolean'",
            TokenKind::TypeVoid => "type 'void'",
            TokenKind::Illegal => "illegal character",
        };
        f.write_str(text)
    }
}

/// A single token with its source text.
///
/// String literals carry the text between the quotes; every other token
/// carries exactly the characters it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            literal: literal.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.literal),
            TokenKind::Number => write!(f, "number literal {}", self.literal),
            TokenKind::String => write!(f, "string literal \"{}\"", self.literal),
            TokenKind::Boolean => write!(f, "boolean literal {}", self.literal),
            TokenKind::Illegal => write!(f, "illegal character '{}'", self.literal),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Where a word appears, decided before it is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordContext {
    /// The previous token was `:`
    TypeAnnotation,
    /// The next non-whitespace character is `=`
    BeforeAssign,
    Plain,
}

/// Scanner for sild source code
pub struct Scanner {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    previous: Option<TokenKind>,
    strict: bool,
    keywords: FxHashMap<&'static str, TokenKind>,
    types: FxHashMap<&'static str, TokenKind>,
}

impl Scanner {
    /// Create a permissive scanner: unrecognized characters are skipped.
    pub fn new(input: &str) -> Self {
        let keywords = [
            ("let", TokenKind::Let),
            ("function", TokenKind::Function),
            ("return", TokenKind::Return),
            ("true", TokenKind::Boolean),
            ("false", TokenKind::Boolean),
        ]
        .into_iter()
        .collect();

        let types = [
            ("number", TokenKind::TypeNumber),
            ("string", TokenKind::TypeString),
            ("boolean", TokenKind::TypeBoolean),
            ("void", TokenKind::TypeVoid),
        ]
        .into_iter()
        .collect();

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            previous: None,
            strict: false,
            keywords,
            types,
        }
    }

    /// In strict mode an unrecognized character becomes an
    /// [`TokenKind::Illegal`] token instead of being skipped.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Scan the next token. Returns [`TokenKind::Eof`] forever once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let loc = self.current_location();
            let Some(ch) = self.advance() else {
                return self.emit(Token::new(TokenKind::Eof, "", loc));
            };

            let kind = match ch {
                ':' => TokenKind::Colon,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '!' => TokenKind::Bang,
                '=' => TokenKind::Assign,

                '"' => {
                    let token = self.string_literal(loc);
                    return self.emit(token);
                }
                c if c.is_ascii_alphabetic() => {
                    let token = self.word(c, loc);
                    return self.emit(token);
                }
                c if c.is_ascii_digit() => {
                    let token = self.number_literal(c, loc);
                    return self.emit(token);
                }

                _ if self.strict => TokenKind::Illegal,
                other => {
                    log::debug!("skipping unrecognized character {:?} at {}", other, loc);
                    continue;
                }
            };

            return self.emit(Token::new(kind, ch.to_string(), loc));
        }
    }

    /// Scan the entire input, including the final [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Classify a scanned word.
    pub fn classify_word(&self, word: &str, context: WordContext) -> TokenKind {
        let table = match context {
            WordContext::TypeAnnotation | WordContext::BeforeAssign => &self.types,
            WordContext::Plain => &self.keywords,
        };
        table.get(word).copied().unwrap_or(TokenKind::Ident)
    }

    fn emit(&mut self, token: Token) -> Token {
        self.previous = Some(token.kind);
        token
    }

    /// Parse string literal (no escape sequences)
    fn string_literal(&mut self, loc: SourceLocation) -> Token {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Token::new(TokenKind::String, string, loc);
            }
            string.push(ch);
        }

        log::warn!("unterminated string literal starting at {}", loc);
        Token::new(TokenKind::String, string, loc)
    }

    /// Parse numeric literal (digits only, no sign or decimal point)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut digits = String::from(first_digit);

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Number, digits, loc)
    }

    /// Parse identifier, keyword or type name
    fn word(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut word = String::from(first_char);

        while let Some(ch) = self.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            word.push(ch);
            self.advance();
        }

        let kind = self.classify_word(&word, self.word_context());
        Token::new(kind, word, loc)
    }

    fn word_context(&self) -> WordContext {
        if self.previous == Some(TokenKind::Colon) {
            WordContext::TypeAnnotation
        } else if self.next_significant() == Some('=') {
            WordContext::BeforeAssign
        } else {
            WordContext::Plain
        }
    }

    /// First non-whitespace character at or after the cursor, without
    /// moving the cursor.
    fn next_significant(&self) -> Option<char> {
        self.input[self.position..]
            .iter()
            .copied()
            .find(|ch| !is_whitespace(*ch))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
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

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_variable_declaration_tokens() {
        let tokens = Scanner::new("let x: number = 42;").tokenize();
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "x"),
            (TokenKind::Colon, ":"),
            (TokenKind::TypeNumber, "number"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "42"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.literal, literal);
        }
    }

    #[test]
    fn test_punctuation_and_keywords() {
        assert_eq!(
            kinds("function f(a: boolean, b: string): void { return !a; }"),
            vec![
                TokenKind::Function,
                TokenKind::Ident,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::TypeBoolean,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::TypeString,
                TokenKind::RParen,
                TokenKind::Colon,
                TokenKind::TypeVoid,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::Bang,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_type_names_are_identifiers_outside_annotations() {
        assert_eq!(
            kinds("number + string"),
            vec![TokenKind::Ident, TokenKind::Plus, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_word_before_assign_uses_type_table() {
        let tokens = Scanner::new("let number = 1;").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::TypeNumber);

        let tokens = Scanner::new("let x = 1;").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_unknown_type_after_colon_is_identifier() {
        let tokens = Scanner::new("let x: invalid = 42;").tokenize();
        assert_eq!(tokens[3].kind, TokenKind::Ident);
        assert_eq!(tokens[3].literal, "invalid");
    }

    #[test]
    fn test_classify_word_contexts() {
        let scanner = Scanner::new("");
        assert_eq!(
            scanner.classify_word("let", WordContext::Plain),
            TokenKind::Let
        );
        assert_eq!(
            scanner.classify_word("let", WordContext::TypeAnnotation),
            TokenKind::Ident
        );
        assert_eq!(
            scanner.classify_word("void", WordContext::BeforeAssign),
            TokenKind::TypeVoid
        );
        assert_eq!(
            scanner.classify_word("void", WordContext::Plain),
            TokenKind::Ident
        );
        assert_eq!(
            scanner.classify_word("true", WordContext::Plain),
            TokenKind::Boolean
        );
    }

    #[test]
    fn test_string_literal_is_raw() {
        let tokens = Scanner::new(r#""hello\nworld""#).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, r"hello\nworld");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = Scanner::new("\"abc ;").tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, "abc ;");
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        assert_eq!(
            kinds("1 @ 2 # 3"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_strict_scanner_reports_illegal_characters() {
        let tokens = Scanner::new("1 @ 2").with_strict(true).tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[1].location, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        for _ in 0..5 {
            assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let literals: Vec<String> = Scanner::new("a + 1").map(|t| t.literal).collect();
        assert_eq!(literals, vec!["a", "+", "1"]);
    }

    #[test]
    fn test_locations_track_lines() {
        let tokens = Scanner::new("let\n  x").tokenize();
        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_whitespace_before_colon_type() {
        assert_eq!(
            kinds("let\t x\n: \t number \t =\n 42 \t ;"),
            kinds("let x: number = 42;")
        );
    }
}
