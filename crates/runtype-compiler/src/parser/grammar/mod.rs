//! Grammar productions for annotated source.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Type declarations and imports are parsed structurally; any other statement
//! is skipped as opaque text up to its end.

mod statements;
mod types;

use crate::ast::{Item, Program};
use crate::parser::Parser;
use crate::parser::lexer::SyntaxKind;

/// Keywords that start a statement the parser understands structurally.
const STATEMENT_KEYWORDS: [&str; 4] = ["type", "interface", "import", "export"];

impl Parser<'_> {
    pub(in crate::parser) fn parse_program(&mut self) -> Program {
        let mut body = Vec::new();

        loop {
            self.skip_trivia();
            let leading_comments = self.take_pending_comments();
            if self.should_stop() {
                return Program {
                    body,
                    trailing_comments: leading_comments,
                    ..Program::default()
                };
            }

            let start = self.pos;
            match self.parse_statement() {
                Some(stmt) => body.push(Item {
                    leading_comments,
                    stmt,
                }),
                None => self.recover_statement(start),
            }

            // Comments inside a statement are recorded but belong to no item.
            self.pending_comments.clear();
        }
    }

    /// Skip the rest of a statement that failed to parse.
    fn recover_statement(&mut self, start: usize) {
        if self.should_stop() {
            return;
        }
        if self.pos == start {
            self.bump();
        }
        self.skip_to_statement_end();
    }

    /// Consume tokens until the current statement ends: a `;` outside any
    /// brackets, or a line break before a statement keyword.
    pub(super) fn skip_to_statement_end(&mut self) {
        let mut depth = 0usize;
        while !self.should_stop() {
            let kind = self.bump().kind;
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            } else if kind == SyntaxKind::Semicolon && depth == 0 {
                return;
            }

            if depth == 0 && self.newline_ahead() && self.at_statement_keyword() {
                return;
            }
        }
    }

    fn at_statement_keyword(&self) -> bool {
        STATEMENT_KEYWORDS
            .iter()
            .any(|keyword| self.at_keyword(keyword))
    }

    /// Optional `;` closing a declaration.
    pub(super) fn finish_statement(&mut self) {
        self.eat(SyntaxKind::Semicolon);
    }
}
