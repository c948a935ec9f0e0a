//! Edge case tests for monkey-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert_eq!(tokenize("").len(), 1);
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n \n").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[0].literal, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert_eq!(t[1].literal, name);
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LParen).count(), 3);
        assert_eq!(t.iter().filter(|k| **k == TokenKind::RParen).count(), 3);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Fn fn"), vec![TokenKind::Ident, TokenKind::Function]);
    }

    #[test]
    fn test_edge_consecutive_operators() {
        assert_eq!(
            kinds("+-*/"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash
            ]
        );
    }

    #[test]
    fn test_edge_whitespace_variations() {
        assert_eq!(
            kinds("let\tx\r\n=\n1"),
            vec![TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int]
        );
    }

    #[test]
    fn test_edge_no_comments() {
        assert_eq!(
            kinds("// x"),
            vec![TokenKind::Slash, TokenKind::Slash, TokenKind::Ident]
        );
    }

    #[test]
    fn test_edge_no_strings() {
        let t = lex_all("\"hi\"");
        assert_eq!(t[0].kind, TokenKind::Illegal);
        assert_eq!(t[0].literal, "\"");
        assert_eq!(t[1].kind, TokenKind::Ident);
        assert_eq!(t[2].kind, TokenKind::Illegal);
    }

    #[test]
    fn test_edge_brackets_are_illegal() {
        assert_eq!(kinds("[]"), vec![TokenKind::Illegal, TokenKind::Illegal]);
    }

    // ==================== ILLEGAL INPUT ====================

    #[test]
    fn test_err_each_bad_byte_is_one_token() {
        let t = lex_all("@#$%");
        assert_eq!(t.len(), 4);
        assert!(t.iter().all(|x| x.kind == TokenKind::Illegal));
        let literals: Vec<&str> = t.iter().map(|x| x.literal.as_str()).collect();
        assert_eq!(literals, vec!["@", "#", "$", "%"]);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let mut lexer = Lexer::new("let x = # 1;");
        let t: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(
            t,
            vec![
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Illegal,
                TokenKind::Int,
                TokenKind::Semicolon
            ]
        );
        assert_eq!(lexer.illegal_count(), 1);
    }

    #[test]
    fn test_err_interior_nul_is_illegal_not_eof() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind, TokenKind::Illegal);
        assert_eq!(t[1].literal, "\0");
        assert_eq!(t[2].literal, "b");
    }

    #[test]
    fn test_err_control_whitespace_is_illegal() {
        assert_eq!(kinds("\x0b\x0c"), vec![TokenKind::Illegal, TokenKind::Illegal]);
    }

    #[test]
    fn test_err_non_ascii_character_is_one_token() {
        let t = lex_all("let π = 3;");
        assert_eq!(t[1].kind, TokenKind::Illegal);
        assert_eq!(t[1].literal, "π");
        assert_eq!(t[1].span.len(), 2);
        assert_eq!(t[2].kind, TokenKind::Assign);
    }

    #[test]
    fn test_err_unicode_letter_splits_identifier() {
        let t = lex_all("naïve");
        let literals: Vec<&str> = t.iter().map(|x| x.literal.as_str()).collect();
        assert_eq!(literals, vec!["na", "ï", "ve"]);
    }

    #[test]
    fn test_err_emoji() {
        let t = lex_all("🙈");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal, "🙈");
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_stream_terminates_in_eof() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let tokens = tokenize(&input);
            // Every call makes progress, so the stream can be at most one
            // token per byte plus the EOF.
            prop_assert!(tokens.len() <= input.len() + 1);
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
            prop_assert!(tokens.last().is_some_and(Token::is_eof));
        });
    }

    #[test]
    fn test_property_eof_tail_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9=!;@ \n]{0,50}")| {
            let mut lexer = Lexer::new(&input);
            let mut eof = lexer.next_token();
            while !eof.is_eof() {
                eof = lexer.next_token();
            }
            for _ in 0..3 {
                prop_assert_eq!(lexer.next_token(), eof.clone());
            }
        });
    }

    #[test]
    fn test_property_literals_cover_non_whitespace() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let joined: String = lex_all(&input).into_iter().map(|t| t.literal).collect();
            let expected: String = input
                .chars()
                .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
                .collect();
            prop_assert_eq!(joined, expected);
        });
    }

    #[test]
    fn test_property_literal_matches_span() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_0-9=!+*/<>(){},;@ \t\n-]{0,100}")| {
            for token in lex_all(&input) {
                prop_assert_eq!(&input[token.span.start..token.span.end], token.literal.as_str());
                prop_assert!(!token.literal.is_empty());
            }
        });
    }

    #[test]
    fn test_property_identifier_runs() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_]{1,50}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens[0].kind == TokenKind::Ident || tokens[0].kind.is_keyword());
            prop_assert_eq!(&tokens[0].literal, &input);
        });
    }

    #[test]
    fn test_property_digit_runs() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Int);
            prop_assert_eq!(&tokens[0].literal, &input);
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        use proptest::prelude::*;

        proptest!(|(spaces in 0..100usize)| {
            let whitespace = " ".repeat(spaces);
            let source = format!("{}let{}", whitespace, whitespace);
            prop_assert_eq!(kinds(&source), vec![TokenKind::Let]);
        });
    }

    // ==================== STRESS ====================

    #[test]
    fn test_stress_very_long_number() {
        let source = "1".repeat(100_000);
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].literal.len(), 100_000);
    }

    #[test]
    fn test_stress_many_tokens() {
        let source = "x;".repeat(10_000);
        assert_eq!(tokenize(&source).len(), 20_001);
    }
}
