use crate::error::MarkupError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `<` opening a start tag
    LAngle,
    /// `</` opening a close tag
    LAngleSlash,
    /// `>` ending a tag
    RAngle,
    /// `/>` ending a self-closing tag
    SlashRAngle,
    /// `=` between attribute name and value
    Eq,
    /// Tag or attribute name (may contain `-` for `aria-*`/`data-*`)
    Ident(String),
    /// Quoted attribute value (content without quotes)
    Str(String),
    /// `{...}` expression blob, captured raw -- never evaluated
    Expr(String),
    /// Text run between tags
    Text(String),
    /// End of input
    Eof,
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
}

/// Tokenize a markup fragment.
///
/// The lexer is modal: between tags it produces [`Token::Text`] and
/// [`Token::Expr`] runs; inside a tag (`<` .. `>`) it produces names,
/// `=`, quoted strings, and expression values. HTML comments
/// (`<!-- -->`) are skipped entirely.
pub fn lex(src: &str) -> Result<Vec<Spanned>, MarkupError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0usize;
    let mut line: u32 = 1;
    let mut in_tag = false;

    while pos < chars.len() {
        let c = chars[pos];

        if !in_tag {
            // Comment
            if starts_with_at(&chars, pos, "<!--") {
                let start_line = line;
                pos += 4;
                loop {
                    if pos >= chars.len() {
                        return Err(MarkupError::lex(start_line, "unterminated comment"));
                    }
                    if chars[pos] == '\n' {
                        line += 1;
                    }
                    if starts_with_at(&chars, pos, "-->") {
                        pos += 3;
                        break;
                    }
                    pos += 1;
                }
                continue;
            }

            if c == '<' {
                let tok_line = line;
                if pos + 1 < chars.len() && chars[pos + 1] == '/' {
                    tokens.push(Spanned {
                        token: Token::LAngleSlash,
                        line: tok_line,
                    });
                    pos += 2;
                } else {
                    tokens.push(Spanned {
                        token: Token::LAngle,
                        line: tok_line,
                    });
                    pos += 1;
                }
                in_tag = true;
                continue;
            }

            if c == '{' {
                let (expr, consumed, lines) = lex_expr(&chars, pos, line)?;
                tokens.push(Spanned {
                    token: Token::Expr(expr),
                    line,
                });
                pos = consumed;
                line += lines;
                continue;
            }

            // Text run until the next tag or expression
            let tok_line = line;
            let mut text = String::new();
            while pos < chars.len() && chars[pos] != '<' && chars[pos] != '{' {
                if chars[pos] == '\n' {
                    line += 1;
                }
                text.push(chars[pos]);
                pos += 1;
            }
            if !text.trim().is_empty() {
                tokens.push(Spanned {
                    token: Token::Text(text),
                    line: tok_line,
                });
            }
            continue;
        }

        // -- Inside a tag --

        if c.is_whitespace() {
            if c == '\n' {
                line += 1;
            }
            pos += 1;
            continue;
        }

        let tok_line = line;

        if c == '>' {
            tokens.push(Spanned {
                token: Token::RAngle,
                line: tok_line,
            });
            pos += 1;
            in_tag = false;
            continue;
        }

        if c == '/' && pos + 1 < chars.len() && chars[pos + 1] == '>' {
            tokens.push(Spanned {
                token: Token::SlashRAngle,
                line: tok_line,
            });
            pos += 2;
            in_tag = false;
            continue;
        }

        if c == '=' {
            tokens.push(Spanned {
                token: Token::Eq,
                line: tok_line,
            });
            pos += 1;
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = c;
            pos += 1;
            let mut s = String::new();
            loop {
                if pos >= chars.len() {
                    return Err(MarkupError::lex(tok_line, "unterminated attribute value"));
                }
                let sc = chars[pos];
                if sc == quote {
                    pos += 1;
                    break;
                }
                if sc == '\n' {
                    line += 1;
                }
                s.push(sc);
                pos += 1;
            }
            tokens.push(Spanned {
                token: Token::Str(s),
                line: tok_line,
            });
            continue;
        }

        if c == '{' {
            let (expr, consumed, lines) = lex_expr(&chars, pos, line)?;
            tokens.push(Spanned {
                token: Token::Expr(expr),
                line: tok_line,
            });
            pos = consumed;
            line += lines;
            continue;
        }

        if is_ident_start(c) {
            let mut name = String::new();
            while pos < chars.len() && is_ident_char(chars[pos]) {
                name.push(chars[pos]);
                pos += 1;
            }
            tokens.push(Spanned {
                token: Token::Ident(name),
                line: tok_line,
            });
            continue;
        }

        return Err(MarkupError::lex(
            tok_line,
            format!("unexpected character '{}' in tag", c),
        ));
    }

    if in_tag {
        return Err(MarkupError::lex(line, "unterminated tag"));
    }

    tokens.push(Spanned {
        token: Token::Eof,
        line,
    });
    Ok(tokens)
}

/// Lex a `{...}` expression blob with brace nesting. Returns the inner
/// text, the position after the closing brace, and the newline count.
fn lex_expr(
    chars: &[char],
    start: usize,
    start_line: u32,
) -> Result<(String, usize, u32), MarkupError> {
    let mut pos = start + 1;
    let mut depth = 1usize;
    let mut lines = 0u32;
    let mut expr = String::new();

    while pos < chars.len() {
        let c = chars[pos];
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((expr, pos + 1, lines));
                }
            }
            '\n' => lines += 1,
            _ => {}
        }
        expr.push(c);
        pos += 1;
    }

    Err(MarkupError::lex(start_line, "unterminated '{' expression"))
}

fn starts_with_at(chars: &[char], pos: usize, pat: &str) -> bool {
    pat.chars()
        .enumerate()
        .all(|(i, p)| chars.get(pos + i) == Some(&p))
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        lex(src).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn lexes_simple_element() {
        let toks = kinds("<div>hi</div>");
        assert_eq!(
            toks,
            vec![
                Token::LAngle,
                Token::Ident("div".into()),
                Token::RAngle,
                Token::Text("hi".into()),
                Token::LAngleSlash,
                Token::Ident("div".into()),
                Token::RAngle,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_attributes_and_self_close() {
        let toks = kinds("<img src=\"x.png\" alt='pic' />");
        assert_eq!(
            toks,
            vec![
                Token::LAngle,
                Token::Ident("img".into()),
                Token::Ident("src".into()),
                Token::Eq,
                Token::Str("x.png".into()),
                Token::Ident("alt".into()),
                Token::Eq,
                Token::Str("pic".into()),
                Token::SlashRAngle,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_expression_attribute_with_nested_braces() {
        let toks = kinds("<div style={{color: 'red'}}>x</div>");
        assert!(toks.contains(&Token::Expr("{color: 'red'}".into())));
    }

    #[test]
    fn skips_html_comments() {
        let toks = kinds("<div><!-- note -->hi</div>");
        assert!(!toks
            .iter()
            .any(|t| matches!(t, Token::Text(s) if s.contains("note"))));
    }

    #[test]
    fn tracks_line_numbers() {
        let spanned = lex("<div>\n  <span>\n</div>").unwrap();
        let span_line = spanned
            .iter()
            .find(|s| s.token == Token::Ident("span".into()))
            .unwrap()
            .line;
        assert_eq!(span_line, 2);
    }

    #[test]
    fn unterminated_tag_is_an_error() {
        let err = lex("<div").unwrap_err();
        assert!(err.message.contains("unterminated tag"));
    }

    #[test]
    fn unterminated_attribute_value_is_an_error() {
        let err = lex("<div class=\"oops>").unwrap_err();
        assert!(err.message.contains("unterminated attribute value"));
    }

    #[test]
    fn unterminated_expression_is_an_error() {
        let err = lex("<div>{count</div>").unwrap_err();
        assert!(err.message.contains("unterminated '{' expression"));
    }

    #[test]
    fn whitespace_only_text_is_dropped() {
        let toks = kinds("<div>\n   \n</div>");
        assert!(!toks.iter().any(|t| matches!(t, Token::Text(_))));
    }
}
