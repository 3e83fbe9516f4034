//! Edge case tests for cfgs-lex

#[cfg(test)]
mod tests {
    use crate::test_util::{lex, lex_err};
    use crate::{tokenize, LexErrorKind, Lexer, Operator, TokenCollector, TokenKind};
    use cfgs_util::Handler;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|(kind, _)| kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), [TokenKind::Eol, TokenKind::Eof]);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex("x")[0], (TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("{} = 1", name);
        assert_eq!(lex(&source)[0], (TokenKind::Identifier, name.as_str()));
    }

    #[test]
    fn test_edge_long_comment() {
        let source = format!("/*{}*/", "-".repeat(10000));
        assert_eq!(lex(&source)[0], (TokenKind::Comment, source.as_str()));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            kinds("a\r\nb\r\n"),
            [
                TokenKind::Identifier,
                TokenKind::Eol,
                TokenKind::Identifier,
                TokenKind::Eol,
                TokenKind::Eol,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_zero_at_eof() {
        assert_eq!(lex("x=0")[2], (TokenKind::Integer, "0"));
    }

    #[test]
    fn test_edge_adjacent_operators() {
        assert_eq!(
            kinds("(){}[]")[..6],
            [
                TokenKind::Operator(Operator::LParen),
                TokenKind::Operator(Operator::RParen),
                TokenKind::Operator(Operator::LBrace),
                TokenKind::Operator(Operator::RBrace),
                TokenKind::Operator(Operator::LBracket),
                TokenKind::Operator(Operator::RBracket),
            ]
        );
    }

    #[test]
    fn test_edge_arrow_vs_minus_gt() {
        assert_eq!(lex("a->b")[1], (TokenKind::Operator(Operator::Arrow), "->"));
        assert_eq!(lex("a- >b")[1], (TokenKind::Operator(Operator::Minus), "-"));
    }

    #[test]
    fn test_edge_percent_before_space_and_digit() {
        assert_eq!(lex("% 1")[0], (TokenKind::Operator(Operator::Percent), "%"));
        assert_eq!(lex("%%")[0], (TokenKind::Operator(Operator::Percent), "%"));
    }

    #[test]
    fn test_edge_slash_before_newline() {
        assert_eq!(kinds("/\n")[..2], [TokenKind::Operator(Operator::Slash), TokenKind::Eol]);
    }

    #[test]
    fn test_edge_comment_inside_string_is_text() {
        assert_eq!(lex("\"// x\"")[0], (TokenKind::String, "\"// x\""));
    }

    #[test]
    fn test_edge_string_inside_comment_is_text() {
        assert_eq!(lex("// \"x")[0], (TokenKind::Comment, "// \"x"));
    }

    #[test]
    fn test_edge_error_after_many_lines() {
        let source = format!("{}  ?`", "ok\n".repeat(99));
        let (err, diags) = lex_err(&source);
        assert_eq!(err.kind(), LexErrorKind::InvalidCharacter('`'));
        assert_eq!((err.line(), err.column()), (100, 3));
        assert_eq!(diags[0].position.line, 100);
    }

    #[test]
    fn test_edge_bom_is_invalid() {
        let (err, _) = lex_err("\u{FEFF}x");
        assert_eq!(err.kind(), LexErrorKind::InvalidCharacter('\u{FEFF}'));
    }

    #[test]
    fn test_edge_rescan_with_fresh_lexer() {
        let handler = Handler::new();
        let source = "k = [1, .5, \"s\"] /* c */\n";
        let first = tokenize(source, "a", &handler).unwrap();
        let second = tokenize(source, "a", &handler).unwrap();
        assert_eq!(first, second);
    }

    // ==================== PROPERTIES ====================

    /// Inputs built from fragments that always lex cleanly.
    fn valid_source() -> impl Strategy<Value = String> {
        let fragment = prop_oneof![
            "[a-zA-Z_$@][a-zA-Z0-9_$@.]{0,8}",
            "[1-9][0-9]{0,6}",
            "0x[0-9a-fA-F]{1,6}",
            "[0-9]{1,4}\\.[0-9]{0,4}",
            "\\.[0-9]{1,4}([eE][+-]?[0-9]{1,3})?",
            "\"([a-z ]|\\\\\")*\"",
            "//[a-z ]*\n",
            "/\\*[a-z \n]*\\*/",
            prop::sample::select(Operator::ALL.to_vec()).prop_map(|op| op.as_str().to_string()),
        ];
        let separator = prop_oneof![Just(" "), Just("\t"), Just("\n"), Just("\r\n")];
        prop::collection::vec((fragment, separator), 0..24).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(fragment, sep)| format!("{fragment}{sep}"))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_text_matches_span(source in valid_source()) {
            let handler = Handler::new();
            let lexemes = tokenize(&source, "p", &handler).unwrap();
            for lexeme in &lexemes {
                prop_assert_eq!(lexeme.span.slice(&source), Some(lexeme.text));
            }
            prop_assert!(!handler.has_errors());
        }

        #[test]
        fn prop_rescan_is_identical(source in valid_source()) {
            let handler = Handler::new();
            let first = tokenize(&source, "p", &handler).unwrap();
            let second = tokenize(&source, "p", &handler).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_ends_with_one_eol_and_eof(source in valid_source()) {
            let handler = Handler::new();
            let lexemes = tokenize(&source, "p", &handler).unwrap();
            let n = lexemes.len();
            prop_assert!(n >= 2);
            prop_assert_eq!(lexemes[n - 2].kind, TokenKind::Eol);
            prop_assert_eq!(lexemes[n - 1].kind, TokenKind::Eof);
            prop_assert!(lexemes[n - 2].text.is_empty());
            prop_assert_eq!(
                lexemes.iter().filter(|l| l.kind == TokenKind::Eof).count(),
                1
            );
        }

        #[test]
        fn prop_one_eol_per_newline(source in valid_source()) {
            let handler = Handler::new();
            let lexemes = tokenize(&source, "p", &handler).unwrap();
            let newlines_outside_comments = lexemes
                .iter()
                .filter(|l| l.kind == TokenKind::Eol && l.text == "\n")
                .count();
            let newlines_in_comments: usize = lexemes
                .iter()
                .filter(|l| l.kind == TokenKind::Comment)
                .map(|l| l.text.matches('\n').count())
                .sum();
            prop_assert_eq!(
                newlines_outside_comments + newlines_in_comments,
                source.matches('\n').count()
            );
        }

        #[test]
        fn prop_whitespace_is_silent(source in "[ \t\r]{0,64}") {
            let handler = Handler::new();
            let kinds: Vec<_> = tokenize(&source, "p", &handler)
                .unwrap()
                .into_iter()
                .map(|l| l.kind)
                .collect();
            prop_assert_eq!(kinds, vec![TokenKind::Eol, TokenKind::Eof]);
        }

        #[test]
        fn prop_limit_cuts_scan_short(source in valid_source(), limit in 0usize..8) {
            let handler = Handler::new();
            let mut collector = TokenCollector::new().with_limit(limit);
            Lexer::new(&source, "p", &handler).consume(&mut collector).unwrap();
            let lexemes = collector.lexemes();
            if collector.stopped() {
                prop_assert!(lexemes.iter().all(|l| l.kind != TokenKind::Eof));
                let content = lexemes
                    .iter()
                    .filter(|l| !matches!(l.kind, TokenKind::Eol | TokenKind::Eof))
                    .count();
                prop_assert_eq!(content, limit);
            } else {
                prop_assert_eq!(lexemes.last().map(|l| l.kind), Some(TokenKind::Eof));
            }
        }

        #[test]
        fn prop_arbitrary_input_never_panics(source in "\\PC{0,64}") {
            let handler = Handler::new();
            match tokenize(&source, "p", &handler) {
                Ok(_) => prop_assert!(!handler.has_errors()),
                Err(err) => {
                    let diags = handler.diagnostics();
                    prop_assert_eq!(diags.len(), 1);
                    prop_assert_eq!(&diags[0].message, &err.to_string());
                    prop_assert_eq!(diags[0].position.line, err.line());
                    prop_assert_eq!(diags[0].position.column, err.column());
                }
            }
        }
    }
}
