//! Statement productions: type aliases, interfaces, imports, exports.

use crate::ast::{
    ExportDecl, ExportKind, GenericType, ImportDecl, ImportKind, ImportSpecifier, InterfaceDecl,
    Item, Statement, StringLiteral, TypeAliasDecl, Verbatim,
};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::lexer::{SyntaxKind, unquote};

impl Parser<'_> {
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        if self.at_type_alias() {
            return self.parse_type_alias().map(Statement::TypeAlias);
        }
        if self.at_interface() {
            return self.parse_interface().map(Statement::Interface);
        }
        if self.at_keyword("import")
            && !matches!(self.nth(1), SyntaxKind::ParenOpen | SyntaxKind::Dot)
        {
            return self.parse_import().map(Statement::Import);
        }
        if self.at_keyword("export") && self.at_export_declaration() {
            return self.parse_export().map(Statement::Export);
        }
        Some(Statement::Verbatim(self.parse_verbatim()))
    }

    fn at_type_alias(&self) -> bool {
        self.at_keyword("type") && self.nth(1) == SyntaxKind::Ident
    }

    fn at_interface(&self) -> bool {
        self.at_keyword("interface") && self.nth(1) == SyntaxKind::Ident
    }

    /// `export type Foo = ...` or `export interface Foo ...`
    fn at_export_declaration(&self) -> bool {
        (self.nth_is_keyword(1, "type") || self.nth_is_keyword(1, "interface"))
            && self.nth(2) == SyntaxKind::Ident
    }

    /// `type Foo<T> = <type>;`
    fn parse_type_alias(&mut self) -> Option<TypeAliasDecl> {
        let start = self.bump().span.start();
        let id = self.expect_identifier()?;
        let type_params = self.parse_type_params_opt()?;
        self.expect(SyntaxKind::Equals, "=")?;
        let right = self.parse_type()?;
        self.finish_statement();

        Some(TypeAliasDecl {
            id,
            type_params,
            right,
            recursive: false,
            span: self.range_from(start),
        })
    }

    /// `interface Foo<T> extends A, B.C<T> { ... }`
    fn parse_interface(&mut self) -> Option<InterfaceDecl> {
        let start = self.bump().span.start();
        let id = self.expect_identifier()?;
        let type_params = self.parse_type_params_opt()?;

        let mut extends = Vec::new();
        if self.eat_keyword("extends") {
            loop {
                extends.push(self.parse_extends_clause()?);
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        if !matches!(
            self.current(),
            SyntaxKind::BraceOpen | SyntaxKind::BraceBarOpen
        ) {
            self.error_msg(DiagnosticKind::ExpectedToken, "{");
            return None;
        }
        let (body, body_span) = self.parse_object_type()?;
        self.finish_statement();

        Some(InterfaceDecl {
            id,
            type_params,
            extends,
            body,
            body_span,
            recursive: false,
            span: self.range_from(start),
        })
    }

    fn parse_extends_clause(&mut self) -> Option<GenericType> {
        let id = self.parse_qualified_name()?;
        let type_args = if self.at(SyntaxKind::Lt) {
            Some(self.parse_type_args()?)
        } else {
            None
        };
        Some(GenericType { id, type_args })
    }

    /// `export type ...` / `export interface ...`
    fn parse_export(&mut self) -> Option<ExportDecl> {
        let start = self.bump().span.start();
        let declaration = if self.at_keyword("type") {
            Statement::TypeAlias(self.parse_type_alias()?)
        } else {
            Statement::Interface(self.parse_interface()?)
        };

        Some(ExportDecl {
            kind: ExportKind::Type,
            declaration: Box::new(declaration),
            span: self.range_from(start),
        })
    }

    /// Every import form, with or without a `type` / `typeof` kind.
    fn parse_import(&mut self) -> Option<ImportDecl> {
        let start = self.bump().span.start();

        let kind = if self.at_import_kind("type") {
            self.bump();
            ImportKind::Type
        } else if self.at_import_kind("typeof") {
            self.bump();
            ImportKind::Typeof
        } else {
            ImportKind::Value
        };

        let mut specifiers = Vec::new();
        if !self.at(SyntaxKind::String) {
            self.parse_import_clause(&mut specifiers)?;
            self.expect_keyword("from")?;
        }

        let source = self.parse_module_source()?;
        self.finish_statement();

        Some(ImportDecl {
            kind,
            specifiers,
            source,
            span: self.range_from(start),
        })
    }

    /// `type` / `typeof` after `import` is a kind unless it is the default
    /// binding itself (`import type from 'x'`, `import type, { a } from 'x'`).
    fn at_import_kind(&self, keyword: &str) -> bool {
        if !self.at_keyword(keyword) {
            return false;
        }
        match self.nth(1) {
            SyntaxKind::BraceOpen | SyntaxKind::Star => true,
            SyntaxKind::Ident => {
                !(self.nth_is_keyword(1, "from") && self.nth(2) == SyntaxKind::String)
            }
            _ => false,
        }
    }

    fn parse_import_clause(&mut self, specifiers: &mut Vec<ImportSpecifier>) -> Option<()> {
        if self.at(SyntaxKind::Ident) {
            specifiers.push(ImportSpecifier::Default(self.expect_identifier()?));
            if !self.eat(SyntaxKind::Comma) {
                return Some(());
            }
        }

        match self.current() {
            SyntaxKind::Star => {
                self.bump();
                self.expect_keyword("as")?;
                specifiers.push(ImportSpecifier::Namespace(self.expect_identifier()?));
            }
            SyntaxKind::BraceOpen => self.parse_named_imports(specifiers)?,
            _ => {
                self.error_msg(DiagnosticKind::ExpectedToken, "{");
                return None;
            }
        }
        Some(())
    }

    /// `{ a, b as c, type d }`
    fn parse_named_imports(&mut self, specifiers: &mut Vec<ImportSpecifier>) -> Option<()> {
        self.bump();
        while !self.at(SyntaxKind::BraceClose) {
            if self.should_stop() {
                self.error_msg(DiagnosticKind::ExpectedToken, "}");
                return None;
            }

            // Per-specifier kind: `{ type A }`
            if (self.at_keyword("type") || self.at_keyword("typeof"))
                && self.nth(1) == SyntaxKind::Ident
                && !self.nth_is_keyword(1, "as")
            {
                self.bump();
            }

            let imported = self.expect_identifier()?;
            let local = if self.eat_keyword("as") {
                self.expect_identifier()?
            } else {
                imported.clone()
            };
            specifiers.push(ImportSpecifier::Named { imported, local });

            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::BraceClose, "}")?;
        Some(())
    }

    fn parse_module_source(&mut self) -> Option<StringLiteral> {
        if !self.at(SyntaxKind::String) {
            self.error(DiagnosticKind::ExpectedModuleSource);
            return None;
        }
        let token = self.bump();
        Some(StringLiteral {
            value: unquote(self.text(&token)),
            span: token.span,
        })
    }

    /// Any other statement, carried through as source text.
    ///
    /// Type aliases and interfaces declared inside its blocks (function
    /// bodies, for instance) are parsed as nested items so they can be
    /// rewritten in place.
    fn parse_verbatim(&mut self) -> Verbatim {
        let start = self.current_span().start();
        let mut nested = Vec::new();
        let mut depth = 0usize;
        let mut prev = SyntaxKind::Eof;

        while !self.should_stop() {
            let line_start = self.newline_ahead();
            self.pending_comments.clear();
            self.skip_trivia();

            let at_block_statement = line_start
                || matches!(
                    prev,
                    SyntaxKind::BraceOpen | SyntaxKind::BraceClose | SyntaxKind::Semicolon
                );
            if depth > 0 && at_block_statement && self.at_nested_declaration() {
                let leading_comments = self.take_pending_comments();
                let (resume, recorded) = (self.pos, self.comments.len());
                if let Some(stmt) = self.parse_nested_declaration() {
                    nested.push(Item {
                        leading_comments,
                        stmt,
                    });
                    prev = SyntaxKind::Semicolon;
                    continue;
                }
                if self.has_fatal_error() {
                    break;
                }
                // Not a declaration after all: carry it as text.
                self.pos = resume;
                self.comments.truncate(recorded);
            }

            let kind = self.bump().kind;
            prev = kind;
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            } else if kind == SyntaxKind::Semicolon && depth == 0 {
                break;
            }

            if depth == 0 && self.newline_ahead() && self.at_statement_keyword() {
                break;
            }
        }

        let span = self.range_from(start);
        Verbatim {
            text: self.source[std::ops::Range::<usize>::from(span)].to_string(),
            span,
            nested,
        }
    }

    /// `type Foo =`, `type Foo<`, `interface Foo {`, `interface Foo extends`.
    fn at_nested_declaration(&self) -> bool {
        if self.at_type_alias() {
            return matches!(self.nth(2), SyntaxKind::Equals | SyntaxKind::Lt);
        }
        self.at_interface()
            && (matches!(
                self.nth(2),
                SyntaxKind::BraceOpen | SyntaxKind::BraceBarOpen | SyntaxKind::Lt
            ) || self.nth_is_keyword(2, "extends"))
    }

    fn parse_nested_declaration(&mut self) -> Option<Statement> {
        if self.at_type_alias() {
            self.parse_type_alias().map(Statement::TypeAlias)
        } else {
            self.parse_interface().map(Statement::Interface)
        }
    }
}
