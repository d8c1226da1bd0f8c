//! Raw tokens produced by logos, before interning and trivia attachment.

use logos::Logos;
use propex_ir::{TokenKind, TriviaKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    // === Trivia ===
    #[regex(r"[ \t\x0C\x{FEFF}]+")]
    Whitespace,
    #[regex(r"\r\n|\n|\r")]
    Newline,
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,
    #[regex(r"#[^\r\n]*")]
    Directive,

    // === Names and literals ===
    #[regex(r"@?[_\p{L}][_\p{L}\p{N}]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[a-zA-Z]*")]
    #[regex(r"0[xXbB][0-9a-fA-F_]+[a-zA-Z]*")]
    Number,
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    #[regex(r#"@"([^"]|"")*""#)]
    #[regex(r#"\$"([^"\\\r\n]|\\[^\r\n])*""#)]
    #[regex(r#"(\$@|@\$)"([^"]|"")*""#)]
    Str,
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])+'")]
    Char,

    // === Delimiters ===
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    // === Punctuation ===
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("?")]
    Question,
    #[token("??")]
    QuestionQuestion,
    #[token("=>")]
    FatArrow,
    #[token("->")]
    ThinArrow,

    // === Operators ===
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    // `>` is never fused: `List<List<int>>` closes two type argument lists.
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token("??=")]
    CompoundAssign,
}

/// Extend `/*` through the matching `*/`. Block comments do not nest; an
/// unterminated one is an error.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// What a raw token becomes.
pub(crate) enum Lexeme {
    Trivia(TriviaKind),
    Token(TokenKind),
}

impl RawToken {
    pub(crate) fn lexeme(self, slice: &str) -> Lexeme {
        let kind = match self {
            RawToken::Whitespace => return Lexeme::Trivia(TriviaKind::Whitespace),
            RawToken::Newline => return Lexeme::Trivia(TriviaKind::Newline),
            RawToken::LineComment => {
                let doc = slice.starts_with("///") && !slice.starts_with("////");
                return Lexeme::Trivia(if doc {
                    TriviaKind::DocComment
                } else {
                    TriviaKind::LineComment
                });
            }
            RawToken::BlockComment => return Lexeme::Trivia(TriviaKind::BlockComment),
            RawToken::Directive => return Lexeme::Trivia(TriviaKind::Directive),

            RawToken::Ident if is_reserved_keyword(slice) => TokenKind::Keyword,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Number => TokenKind::Number,
            RawToken::Str => TokenKind::Str,
            RawToken::Char => TokenKind::Char,

            RawToken::OpenBrace => TokenKind::OpenBrace,
            RawToken::CloseBrace => TokenKind::CloseBrace,
            RawToken::OpenParen => TokenKind::OpenParen,
            RawToken::CloseParen => TokenKind::CloseParen,
            RawToken::OpenBracket => TokenKind::OpenBracket,
            RawToken::CloseBracket => TokenKind::CloseBracket,

            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Colon => TokenKind::Colon,
            RawToken::ColonColon => TokenKind::ColonColon,
            RawToken::Question => TokenKind::Question,
            RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
            RawToken::FatArrow => TokenKind::FatArrow,
            RawToken::ThinArrow => TokenKind::ThinArrow,

            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Amp => TokenKind::Amp,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::CompoundAssign => TokenKind::CompoundAssign,
        };
        Lexeme::Token(kind)
    }
}

/// Reserved C# keywords. Contextual keywords (`get`, `set`, `value`,
/// `partial`, `var`, ...) are identifiers, and `@`-prefixed words never match.
pub fn is_reserved_keyword(word: &str) -> bool {
    matches!(
        word,
        "abstract"
            | "as"
            | "base"
            | "bool"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "checked"
            | "class"
            | "const"
            | "continue"
            | "decimal"
            | "default"
            | "delegate"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "event"
            | "explicit"
            | "extern"
            | "false"
            | "finally"
            | "fixed"
            | "float"
            | "for"
            | "foreach"
            | "goto"
            | "if"
            | "implicit"
            | "in"
            | "int"
            | "interface"
            | "internal"
            | "is"
            | "lock"
            | "long"
            | "namespace"
            | "new"
            | "null"
            | "object"
            | "operator"
            | "out"
            | "override"
            | "params"
            | "private"
            | "protected"
            | "public"
            | "readonly"
            | "ref"
            | "return"
            | "sbyte"
            | "sealed"
            | "short"
            | "sizeof"
            | "stackalloc"
            | "static"
            | "string"
            | "struct"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "uint"
            | "ulong"
            | "unchecked"
            | "unsafe"
            | "ushort"
            | "using"
            | "virtual"
            | "void"
            | "volatile"
            | "while"
    )
}
