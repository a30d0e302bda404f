//! Unit-level driver: directive gate, declaration rewriting, library import.

use rowan::TextRange;
use tracing::{debug, instrument, trace};

use super::declarations::{check_reserved, is_recursive};
use super::directive;
use super::imports::{into_value_import, is_relative, rewrite_external};
use super::scope::UnitScope;
use crate::ast::{
    ConstDecl, ExportDecl, ExportKind, Identifier, ImportDecl, ImportKind, ImportSpecifier,
    InterfaceDecl, Item, Program, Statement, StringLiteral, TypeAliasDecl, Verbatim,
};
use crate::compile::{CompileResult, Compiler, TypeParams};
use crate::config::Config;
use crate::emit::CombinatorBuilder;

/// Where a unit stands with respect to the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Not entered yet, or entered without a directive.
    Inactive,
    /// Comments are being scanned.
    Scanning,
    /// The directive was found; declarations are rewritten.
    Active,
}

/// Rewrites one compilation unit. Create one per unit.
pub struct Transformer<'c> {
    config: &'c Config,
    activation: Activation,
    scope: UnitScope,
    builder: CombinatorBuilder,
}

impl<'c> Transformer<'c> {
    pub fn new(config: &'c Config) -> Self {
        let scope = UnitScope::begin(std::iter::empty::<String>());
        let builder = CombinatorBuilder::new(scope.library());
        Self {
            config,
            activation: Activation::Inactive,
            scope,
            builder,
        }
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn scope(&self) -> &UnitScope {
        &self.scope
    }

    /// Transform the whole unit. The first compile error aborts it.
    #[instrument(skip_all, name = "transform")]
    pub fn run(mut self, mut program: Program) -> CompileResult<Program> {
        self.enter_unit(&mut program);
        if self.activation != Activation::Active {
            debug!("no directive, unit left untouched");
            return Ok(program);
        }

        let body = std::mem::take(&mut program.body);
        let mut rewritten = Vec::with_capacity(body.len() + 1);
        for item in body {
            let recursive = is_recursive(&program, &item, stmt_flagged(&item.stmt));
            let Item {
                leading_comments,
                stmt,
            } = item;
            let stmt = match stmt {
                Statement::Verbatim(verbatim) if !verbatim.nested.is_empty() => {
                    Statement::Verbatim(self.nested(&program, verbatim)?)
                }
                other => other,
            };

            let mut statements = self.statement(stmt, recursive)?.into_iter();
            if let Some(first) = statements.next() {
                rewritten.push(Item {
                    leading_comments,
                    stmt: first,
                });
            }
            rewritten.extend(statements.map(Item::new));
        }
        program.body = rewritten;

        self.exit_unit(&mut program);
        Ok(program)
    }

    /// Scan for the directive, strip it, and set up per-unit bindings.
    pub fn enter_unit(&mut self, program: &mut Program) {
        self.activation = Activation::Scanning;
        self.scope = UnitScope::begin(program.names.iter().cloned());
        self.builder = CombinatorBuilder::new(self.scope.library());

        let scan = directive::scan(&program.comments, &self.config.directive);
        scan.apply(&mut program.comments);

        self.activation = if scan.active {
            Activation::Active
        } else {
            Activation::Inactive
        };
        debug!(
            active = scan.active,
            stripped = scan.edits.len(),
            library = self.scope.library(),
            "unit entered"
        );
    }

    /// Prepend the library import when any replacement references it.
    pub fn exit_unit(&mut self, program: &mut Program) {
        if !self.scope.has_emitted() {
            debug!("library not referenced, no import added");
            return;
        }

        let at = TextRange::default();
        let import = ImportDecl {
            kind: ImportKind::Value,
            specifiers: vec![ImportSpecifier::Default(Identifier::new(
                self.scope.library(),
                at,
            ))],
            source: StringLiteral {
                value: self.config.library.clone(),
                span: at,
            },
            span: at,
        };
        program.body.insert(0, Item::new(Statement::Import(import)));
        debug!(source = %self.config.library, "library import added");
    }

    fn statement(&mut self, stmt: Statement, recursive: bool) -> CompileResult<Vec<Statement>> {
        let rewritten = match stmt {
            Statement::TypeAlias(alias) => {
                vec![Statement::Const(self.type_alias(&alias, recursive)?)]
            }
            Statement::Interface(decl) => {
                vec![Statement::Const(self.interface(&decl, recursive)?)]
            }
            Statement::Export(export) if export.kind == ExportKind::Type => {
                vec![Statement::Export(self.export(export, recursive)?)]
            }
            Statement::Import(import) => self.import(import),
            other => vec![other],
        };
        Ok(rewritten)
    }

    /// Rewrite declarations found inside a statement's blocks.
    fn nested(&mut self, program: &Program, mut verbatim: Verbatim) -> CompileResult<Verbatim> {
        let items = std::mem::take(&mut verbatim.nested);
        verbatim.nested = Vec::with_capacity(items.len());
        for item in items {
            let recursive = is_recursive(program, &item, stmt_flagged(&item.stmt));
            let stmt = match item.stmt {
                Statement::TypeAlias(alias) => {
                    Statement::Const(self.type_alias(&alias, recursive)?)
                }
                Statement::Interface(decl) => {
                    Statement::Const(self.interface(&decl, recursive)?)
                }
                other => other,
            };
            verbatim.nested.push(Item {
                leading_comments: item.leading_comments,
                stmt,
            });
        }
        trace!(count = verbatim.nested.len(), "nested declarations rewritten");
        Ok(verbatim)
    }

    /// `type A = T` becomes `const A = <combinator>`.
    pub fn type_alias(
        &mut self,
        alias: &TypeAliasDecl,
        recursive: bool,
    ) -> CompileResult<ConstDecl> {
        check_reserved(&alias.id)?;
        if recursive {
            self.scope.declare(&alias.id.name);
        }

        let params = TypeParams::from_declaration(alias.type_params.as_deref());
        let compiler = Compiler::new(&self.builder, &self.config.globals);
        let init = compiler.compile(&alias.right, &params, Some(&alias.id.name))?;
        self.scope.note_emitted(&init);

        trace!(name = %alias.id.name, recursive, "type alias rewritten");
        Ok(ConstDecl {
            id: alias.id.clone(),
            init,
            span: alias.span,
        })
    }

    /// `interface A { ... }` becomes `const A = <combinator>`.
    pub fn interface(
        &mut self,
        decl: &InterfaceDecl,
        recursive: bool,
    ) -> CompileResult<ConstDecl> {
        check_reserved(&decl.id)?;
        if recursive {
            self.scope.declare(&decl.id.name);
        }

        let params = TypeParams::from_declaration(decl.type_params.as_deref());
        let compiler = Compiler::new(&self.builder, &self.config.globals);
        let init = compiler.compile_interface_decl(decl, &params)?;
        self.scope.note_emitted(&init);

        trace!(
            name = %decl.id.name,
            recursive,
            bases = decl.extends.len(),
            "interface rewritten"
        );
        Ok(ConstDecl {
            id: decl.id.clone(),
            init,
            span: decl.span,
        })
    }

    /// `export type A = T` becomes `export const A = <combinator>`.
    pub fn export(&mut self, export: ExportDecl, recursive: bool) -> CompileResult<ExportDecl> {
        let decl = match export.declaration.as_ref() {
            Statement::TypeAlias(alias) => self.type_alias(alias, recursive)?,
            Statement::Interface(decl) => self.interface(decl, recursive)?,
            _ => return Ok(export),
        };
        Ok(ExportDecl {
            kind: ExportKind::Value,
            declaration: Box::new(Statement::Const(decl)),
            span: export.span,
        })
    }

    /// Rewrite `import type`; other imports pass through.
    pub fn import(&mut self, import: ImportDecl) -> Vec<Statement> {
        if import.kind != ImportKind::Type {
            return vec![Statement::Import(import)];
        }

        if is_relative(&import.source.value) {
            debug!(source = %import.source.value, "local type import kept as value import");
            return vec![Statement::Import(into_value_import(import))];
        }

        let statements = rewrite_external(&import, &mut self.scope, &self.builder);
        for stmt in &statements {
            if let Statement::Const(decl) = stmt {
                self.scope.note_emitted(&decl.init);
            }
        }
        debug!(
            source = %import.source.value,
            specifiers = import.specifiers.len(),
            "external type import rewritten"
        );
        statements
    }
}

/// Recursion flag set on the declaration itself by a host.
fn stmt_flagged(stmt: &Statement) -> bool {
    match stmt {
        Statement::TypeAlias(alias) => alias.recursive,
        Statement::Interface(decl) => decl.recursive,
        Statement::Export(export) => stmt_flagged(&export.declaration),
        _ => false,
    }
}
