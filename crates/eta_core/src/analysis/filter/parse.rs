//! Textual filter expressions.
//!
//! ```text
//! expr    := conj ("or" conj)*
//! conj    := clause ("and" clause)*
//! clause  := ["not"] field op value | ["not"] field "in" "[" value ("," value)* "]"
//! field   := venue_type | competition | opposition | venue | manager | date | year
//! op      := == | != | >= | <= | > | <
//! ```
//!
//! Values are bare words or quoted with `'` / `"`. Bare multi-word values run
//! until the next `and`/`or`; names containing those words must be quoted.

use super::{CmpOp, MatchFilter, TextField};
use crate::error::FilterError;
use crate::models::VenueType;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Quoted(String),
    Op(CmpOp),
    LBracket,
    RBracket,
    Comma,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, FilterError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '[' => {
                chars.next();
                tokens.push(Token::LBracket);
            }
            ']' => {
                chars.next();
                tokens.push(Token::RBracket);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some(ch) if ch == quote => break,
                        Some(ch) => value.push(ch),
                        None => {
                            return Err(FilterError::MalformedClause(format!(
                                "unterminated quote in '{}'",
                                expr
                            )))
                        }
                    }
                }
                tokens.push(Token::Quoted(value));
            }
            '=' | '!' | '<' | '>' => {
                chars.next();
                let followed_by_eq = chars.peek() == Some(&'=');
                if followed_by_eq {
                    chars.next();
                }
                let op = match (c, followed_by_eq) {
                    ('=', true) => CmpOp::Eq,
                    ('!', true) => CmpOp::Ne,
                    ('>', true) => CmpOp::Ge,
                    ('<', true) => CmpOp::Le,
                    ('>', false) => CmpOp::Gt,
                    ('<', false) => CmpOp::Lt,
                    _ => {
                        return Err(FilterError::MalformedClause(format!(
                            "unknown operator near '{}'",
                            c
                        )))
                    }
                };
                tokens.push(Token::Op(op));
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || "[],'\"=!<>".contains(ch) {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }
    Ok(tokens)
}

fn is_keyword(token: &Token, keyword: &str) -> bool {
    matches!(token, Token::Word(w) if w.eq_ignore_ascii_case(keyword))
}

/// Split a token stream on a keyword at bracket depth zero.
fn split_on<'t>(tokens: &'t [Token], keyword: &str) -> Vec<&'t [Token]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LBracket => depth += 1,
            Token::RBracket => depth = depth.saturating_sub(1),
            t if depth == 0 && is_keyword(t, keyword) => {
                parts.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

pub(super) fn parse_filter(expr: &str) -> Result<MatchFilter, FilterError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(FilterError::Empty);
    }

    let mut alternatives = Vec::new();
    for disjunct in split_on(&tokens, "or") {
        let mut clauses = Vec::new();
        for clause in split_on(disjunct, "and") {
            clauses.push(parse_clause(clause)?);
        }
        alternatives.push(collapse(clauses, MatchFilter::All));
    }
    Ok(collapse(alternatives, MatchFilter::Any))
}

fn collapse(mut parts: Vec<MatchFilter>, join: fn(Vec<MatchFilter>) -> MatchFilter) -> MatchFilter {
    if parts.len() == 1 {
        parts.remove(0)
    } else {
        join(parts)
    }
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Word(w) => w.clone(),
            Token::Quoted(q) => format!("'{}'", q),
            Token::Op(op) => format!("{:?}", op),
            Token::LBracket => "[".to_string(),
            Token::RBracket => "]".to_string(),
            Token::Comma => ",".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy)]
enum Operator {
    Cmp(CmpOp),
    In,
}

fn parse_clause(tokens: &[Token]) -> Result<MatchFilter, FilterError> {
    let (negated, tokens) = match tokens.first() {
        Some(t) if is_keyword(t, "not") => (true, &tokens[1..]),
        _ => (false, tokens),
    };

    let [Token::Word(field), op, rest @ ..] = tokens else {
        return Err(FilterError::MalformedClause(render(tokens)));
    };
    let op = match op {
        Token::Op(op) => Operator::Cmp(*op),
        t if is_keyword(t, "in") => Operator::In,
        _ => return Err(FilterError::MalformedClause(render(tokens))),
    };
    let values = match op {
        Operator::In => parse_list(rest).ok_or_else(|| FilterError::MalformedClause(render(tokens)))?,
        Operator::Cmp(_) => vec![parse_scalar(rest).ok_or_else(|| FilterError::MalformedClause(render(tokens)))?],
    };

    let filter = build(&field.to_ascii_lowercase(), op, values)?;
    Ok(if negated { filter.negate() } else { filter })
}

/// Consecutive words/quoted strings joined with a space.
fn parse_scalar(tokens: &[Token]) -> Option<String> {
    let mut words = Vec::new();
    for token in tokens {
        match token {
            Token::Word(w) | Token::Quoted(w) => words.push(w.as_str()),
            _ => return None,
        }
    }
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn parse_list(tokens: &[Token]) -> Option<Vec<String>> {
    let [Token::LBracket, inner @ .., Token::RBracket] = tokens else {
        return None;
    };
    let mut values = Vec::new();
    for item in inner.split(|t| *t == Token::Comma) {
        values.push(parse_scalar(item)?);
    }
    Some(values)
}

fn build(field: &str, op: Operator, values: Vec<String>) -> Result<MatchFilter, FilterError> {
    let unsupported = |op: &str| FilterError::UnsupportedOperator {
        field: field.to_string(),
        op: op.to_string(),
    };

    match field {
        "venue_type" | "home_away" => {
            let types = values
                .iter()
                .map(|v| {
                    VenueType::from_token(v).ok_or_else(|| FilterError::InvalidLiteral {
                        field: field.to_string(),
                        value: v.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            match op {
                Operator::In | Operator::Cmp(CmpOp::Eq) => Ok(MatchFilter::VenueTypeIn(types)),
                Operator::Cmp(CmpOp::Ne) => Ok(MatchFilter::VenueTypeIn(types).negate()),
                Operator::Cmp(other) => Err(unsupported(&format!("{:?}", other))),
            }
        }
        "competition" | "opposition" | "venue" | "manager" => {
            let text_field = match field {
                "competition" => TextField::Competition,
                "opposition" => TextField::Opposition,
                "venue" => TextField::Venue,
                _ => TextField::Manager,
            };
            match op {
                Operator::In | Operator::Cmp(CmpOp::Eq) => Ok(MatchFilter::TextIn(text_field, values)),
                Operator::Cmp(CmpOp::Ne) => Ok(MatchFilter::TextIn(text_field, values).negate()),
                Operator::Cmp(other) => Err(unsupported(&format!("{:?}", other))),
            }
        }
        "date" => {
            let Operator::Cmp(op) = op else {
                return Err(unsupported("in"));
            };
            let value = &values[0];
            let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                FilterError::InvalidLiteral {
                    field: field.to_string(),
                    value: value.clone(),
                }
            })?;
            Ok(MatchFilter::Date(op, date))
        }
        "year" => {
            let literal = |v: &String| {
                v.parse::<i32>().map_err(|_| FilterError::InvalidLiteral {
                    field: field.to_string(),
                    value: v.clone(),
                })
            };
            match op {
                Operator::Cmp(op) => Ok(MatchFilter::Year(op, literal(&values[0])?)),
                Operator::In => {
                    let years = values
                        .iter()
                        .map(|v| literal(v).map(|y| MatchFilter::Year(CmpOp::Eq, y)))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(collapse(years, MatchFilter::Any))
                }
            }
        }
        other => Err(FilterError::UnknownField(other.to_string())),
    }
}
