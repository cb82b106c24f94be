use std::fmt;

/// Tokens of the core language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Illegal(char),
    Eof,

    Ident(String),
    Int(String),

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    Lt,
    Gt,
    Eq,
    NotEq,

    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Let,
    True,
    False,
    If,
    Else,
}

impl Token {
    /// Keywords win over identifiers.
    pub fn lookup_identifier(identifier: &str) -> Token {
        match identifier {
            "let" => Token::Let,
            "true" => Token::True,
            "false" => Token::False,
            "if" => Token::If,
            "else" => Token::Else,
            _ => Token::Ident(identifier.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(ch) => write!(f, "ILLEGAL({})", ch),
            Token::Eof => f.write_str("EOF"),
            Token::Ident(name) => f.write_str(name),
            Token::Int(literal) => f.write_str(literal),
            Token::Assign => f.write_str("="),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Bang => f.write_str("!"),
            Token::Asterisk => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::Eq => f.write_str("=="),
            Token::NotEq => f.write_str("!="),
            Token::Semicolon => f.write_str(";"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::Let => f.write_str("let"),
            Token::True => f.write_str("true"),
            Token::False => f.write_str("false"),
            Token::If => f.write_str("if"),
            Token::Else => f.write_str("else"),
        }
    }
}
