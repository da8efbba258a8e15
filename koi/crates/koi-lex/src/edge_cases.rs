//! Edge case and property tests for koi-lex

#[cfg(test)]
mod tests {
    use crate::{
        tokenize, tokenize_all, LexErrorKind, LexResult, LexerConfig, LineSplitter, Position,
        Token, TokenKind, TokenStreamExt,
    };

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize_all(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    /// Runs the line-level passes only, before word splitting.
    fn lines(source: &str) -> LexResult<Vec<Token>> {
        let config = LexerConfig::default();
        LineSplitter::new(source)
            .extract_strings(&config)
            .filter_comments(&config)
            .collect()
    }

    /// Rebuilds source text from `line` and `string` tokens alone, padding
    /// each gap with spaces up to the next token's position.
    fn rebuild(tokens: &[Token]) -> String {
        let mut rows: Vec<String> = Vec::new();
        for token in tokens {
            let text = token.text().unwrap_or_default();
            let (column, piece) = match token.kind {
                TokenKind::Line => (token.position.column, text.to_string()),
                TokenKind::String => (token.position.column - 1, format!("\"{}\"", text)),
                _ => continue,
            };
            let mut row = token.position.row;
            pad_to(&mut rows, row, column);
            for (i, part) in piece.split('\n').enumerate() {
                if i > 0 {
                    row += 1;
                    pad_to(&mut rows, row, 0);
                }
                rows[row].push_str(part);
            }
        }
        normalize(&rows.join("\n"))
    }

    fn pad_to(rows: &mut Vec<String>, row: usize, column: usize) {
        while rows.len() <= row {
            rows.push(String::new());
        }
        let width = rows[row].chars().count();
        rows[row].extend(std::iter::repeat(' ').take(column.saturating_sub(width)));
    }

    /// Drops trailing whitespace from every row and from the whole text.
    fn normalize(text: &str) -> String {
        let rows: Vec<&str> = text.split('\n').map(str::trim_end).collect();
        rows.join("\n").trim_end().to_string()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(
            tokenize_all("").unwrap(),
            vec![Token::new(TokenKind::Eof, Position::new(0, 0))]
        );
    }

    #[test]
    fn test_edge_only_comments_and_blanks() {
        assert_eq!(kinds("; one\n\n   \n  ; two\n"), [TokenKind::Eof]);
    }

    #[test]
    fn test_edge_indented_comment_before_first_line() {
        assert_eq!(kinds("    ; header\nx\n"), [TokenKind::Name, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_blank_lines_inside_block() {
        assert_eq!(
            kinds("a\n  b\n\n  c\n"),
            [
                TokenKind::Name,
                TokenKind::OpenLevel,
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::CloseLevel,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_tabs_count_as_one_column() {
        let tokens = tokenize_all("a\n\tb\n").unwrap();
        assert_eq!(tokens[1], Token::new(TokenKind::OpenLevel, Position::new(1, 1)));
        assert_eq!(tokens[2].position, Position::new(1, 1));
    }

    #[test]
    fn test_edge_string_only_line_at_top() {
        let tokens = tokenize_all("\"hi\"\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::with_text(TokenKind::String, Position::new(0, 1), "hi"),
                Token::new(TokenKind::Eof, Position::new(1, 0)),
            ]
        );
    }

    #[test]
    fn test_edge_indented_string_first_fails() {
        let err = tokenize_all("  \"hi\"\n").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InitialIndent);
        assert_eq!(err.position, Position::new(0, 2));
    }

    #[test]
    fn test_edge_string_spanning_blank_and_comment_lines() {
        let tokens = lines("x = \"a\n\n; not a comment\nb\"\n").unwrap();
        assert_eq!(tokens[1].text(), Some("a\n\n; not a comment\nb"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_edge_crlf_source() {
        let tokens = tokenize_all("a = 1\r\nif a\r\n  b\r\n").unwrap();
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Eof, Position::new(3, 0))));
        assert!(tokens.contains(&Token::new(TokenKind::OpenLevel, Position::new(2, 2))));
    }

    #[test]
    fn test_edge_form_feed_ends_line() {
        assert_eq!(
            tokenize_all("a\x0cb").unwrap(),
            vec![
                Token::with_text(TokenKind::Name, Position::new(0, 0), "a"),
                Token::with_text(TokenKind::Name, Position::new(1, 0), "b"),
                Token::new(TokenKind::Eof, Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_unicode_separators_end_lines() {
        let tokens = tokenize_all("if a\u{2028}  b\u{2029}c\u{85}").unwrap();
        assert!(tokens.contains(&Token::new(TokenKind::OpenLevel, Position::new(1, 2))));
        assert!(tokens.contains(&Token::with_text(TokenKind::Name, Position::new(2, 0), "c")));
        assert_eq!(tokens.last(), Some(&Token::new(TokenKind::Eof, Position::new(3, 0))));
    }

    #[test]
    fn test_edge_rebuild_restores_stripped_indentation() {
        let source = "a\n  b \"x\n y\"  c\n    d\n";
        let tokens: Vec<Token> = LineSplitter::new(source)
            .extract_strings(&LexerConfig::default())
            .filter_comments(&LexerConfig::default())
            .track_indentation()
            .collect::<LexResult<_>>()
            .unwrap();
        assert!(tokens.contains(&Token::line(Position::new(1, 2), "b")));
        assert!(tokens.contains(&Token::line(Position::new(2, 5), "c")));
        assert_eq!(rebuild(&tokens), normalize(source));
    }

    #[test]
    fn test_edge_dedent_after_string_row() {
        let source = "a\n  \"s\"\nb\n";
        assert_eq!(
            kinds(source),
            [
                TokenKind::Name,
                TokenKind::OpenLevel,
                TokenKind::String,
                TokenKind::CloseLevel,
                TokenKind::Name,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = tokenize_all(&format!("{} = 1", name)).unwrap();
        assert_eq!(tokens[0].text(), Some(name.as_str()));
        assert_eq!(tokens[1].position, Position::new(0, 10001));
    }

    #[test]
    fn test_edge_u64_max() {
        let tokens = tokenize_all("0xFFFFFFFFFFFFFFFF").unwrap();
        assert_eq!(tokens[0].int(), Some(u64::MAX));
    }

    #[test]
    fn test_edge_deep_nesting() {
        let source: String = (0..50).map(|d| format!("{}x\n", " ".repeat(d))).collect();
        let tokens = tokenize_all(&source).unwrap();
        let opens = tokens.iter().filter(|t| t.kind == TokenKind::OpenLevel).count();
        let closes = tokens.iter().filter(|t| t.kind == TokenKind::CloseLevel).count();
        assert_eq!(opens, 49);
        assert_eq!(closes, 49);
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_single_trailing_eof() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-c \n;\"=+0-9()\t]{0,60}")| {
            let results: Vec<LexResult<Token>> = tokenize(&source).collect();
            let eofs = results
                .iter()
                .filter(|r| matches!(r, Ok(t) if t.is_eof()))
                .count();
            match results.last() {
                Some(Ok(last)) => {
                    prop_assert!(last.is_eof());
                    prop_assert_eq!(eofs, 1);
                }
                Some(Err(_)) => prop_assert_eq!(eofs, 0),
                None => prop_assert!(false, "empty token stream"),
            }
        });
    }

    #[test]
    fn test_property_tokens_in_source_order() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-c \n\"=+0-9]{0,60}")| {
            let positions: Vec<Position> = tokenize(&source)
                .take_while(Result::is_ok)
                .map(|r| r.map(|t| (t.kind, t.position)))
                .filter_map(Result::ok)
                .filter(|(kind, _)| !kind.is_structural())
                .map(|(_, position)| position)
                .collect();
            for pair in positions.windows(2) {
                prop_assert!(pair[0] < pair[1], "{:?} not before {:?}", pair[0], pair[1]);
            }
        });
    }

    #[test]
    fn test_property_balanced_levels() {
        use proptest::prelude::*;

        proptest!(|(steps in proptest::collection::vec(0usize..3, 1..40))| {
            // Each step either goes one level deeper or dedents by some amount.
            let mut depth = 0usize;
            let mut source = String::from("x\n");
            for step in steps {
                depth = match step {
                    0 => depth + 1,
                    1 => depth,
                    _ => depth / 2,
                };
                source.push_str(&"  ".repeat(depth));
                source.push_str("x\n");
            }

            let tokens = tokenize_all(&source).unwrap();
            let opens = tokens.iter().filter(|t| t.kind == TokenKind::OpenLevel).count();
            let closes = tokens.iter().filter(|t| t.kind == TokenKind::CloseLevel).count();
            prop_assert_eq!(opens, closes);
        });
    }

    #[test]
    fn test_property_dedent_mismatch_position() {
        use proptest::prelude::*;

        proptest!(|(inner in 2usize..8, offset in 1usize..8)| {
            let width = offset % inner;
            prop_assume!(width != 0);
            let source = format!("a\n{}b\n{}c\n", " ".repeat(inner), " ".repeat(width));
            let err = tokenize_all(&source).unwrap_err();
            prop_assert_eq!(err.kind, LexErrorKind::DedentMismatch);
            prop_assert_eq!(err.position, Position::new(2, width));
        });
    }

    #[test]
    fn test_property_integer_literals() {
        use proptest::prelude::*;

        proptest!(|(value in any::<u64>(), radix in 0usize..4)| {
            let literal = match radix {
                0 => format!("{}", value),
                1 => format!("0x{:X}", value),
                2 => format!("0o{:o}", value),
                _ => format!("0b{:b}", value),
            };
            let tokens = tokenize_all(&format!("{} x", literal)).unwrap();
            prop_assert_eq!(tokens[0].int(), Some(value));
            prop_assert_eq!(tokens[1].position, Position::new(0, literal.len() + 1));
        });
    }

    #[test]
    fn test_property_line_round_trip() {
        use proptest::prelude::*;

        proptest!(|(rows in proptest::collection::vec("[a-z ]{0,10}", 0..10))| {
            let source = rows.join("\n");
            let tokens = lines(&source).unwrap();
            let expected: Vec<Token> = rows
                .iter()
                .enumerate()
                .filter(|(_, row)| !row.trim().is_empty())
                .map(|(i, row)| Token::line(Position::new(i, 0), row.trim_end()))
                .collect();
            prop_assert_eq!(&tokens[..tokens.len() - 1], &expected[..]);
        });
    }

    #[test]
    fn test_property_string_round_trip() {
        use proptest::prelude::*;

        proptest!(|(
            prefix in "[a-z][a-z ]{0,5}",
            body in "[a-z \n]{0,12}",
            suffix in "[a-z ]{0,5}"
        )| {
            let source = format!("{}\"{}\"{}", prefix, body, suffix);
            let tokens = lines(&source).unwrap();

            prop_assert_eq!(&tokens[0], &Token::line(Position::new(0, 0), prefix.trim_end()));
            prop_assert_eq!(
                &tokens[1],
                &Token::with_text(TokenKind::String, Position::new(0, prefix.len() + 1), &body)
            );

            // The closing quote sits on the string's last row.
            let rows = body.matches('\n').count();
            let last = body.rsplit('\n').next().unwrap_or_default();
            let start = if rows == 0 { prefix.len() + 1 } else { 0 };
            let after_quote = Position::new(rows, start + last.len() + 1);
            let tail = suffix.trim_end();
            if tail.is_empty() {
                prop_assert_eq!(tokens.len(), 3);
            } else {
                prop_assert_eq!(&tokens[2], &Token::line(after_quote, tail));
                prop_assert_eq!(tokens.len(), 4);
            }

            prop_assert_eq!(rebuild(&tokens), normalize(&source));
        });
    }

    #[test]
    fn test_property_rebuild_from_line_tokens() {
        use proptest::prelude::*;

        proptest!(|(source in "([a-z ]|\n|\"[a-z \n]{0,6}\"){0,30}")| {
            let tokens = lines(&source).unwrap();
            prop_assert_eq!(rebuild(&tokens), normalize(&source));
        });
    }

    #[test]
    fn test_property_rebuild_after_indentation() {
        use proptest::prelude::*;

        proptest!(|(
            steps in proptest::collection::vec(
                (0usize..3, "[a-z]{1,4}( \"[a-z \n]{0,4}\" ?[a-z]{0,3})?"),
                1..20
            )
        )| {
            let mut depth = 0usize;
            let mut source = String::from("x\n");
            for (step, content) in steps {
                depth = match step {
                    0 => depth + 1,
                    1 => depth,
                    _ => depth / 2,
                };
                source.push_str(&"  ".repeat(depth));
                source.push_str(&content);
                source.push('\n');
            }

            let config = LexerConfig::default();
            let tokens: Vec<Token> = LineSplitter::new(&source)
                .extract_strings(&config)
                .filter_comments(&config)
                .track_indentation()
                .collect::<LexResult<_>>()
                .unwrap();
            for token in tokens.iter().filter(|t| t.kind == TokenKind::Line) {
                let text = token.text().unwrap_or_default();
                prop_assert!(!text.starts_with(char::is_whitespace), "{:?}", token);
            }
            prop_assert_eq!(rebuild(&tokens), normalize(&source));
        });
    }
}
