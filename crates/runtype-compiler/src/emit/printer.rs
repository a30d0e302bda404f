//! Deterministic JavaScript output for a (transformed) program.
//!
//! Rewritten statements are printed structurally; statements the transform
//! left alone are sliced from the input text.

use std::fmt::Write;

use rowan::TextRange;
use runtype_core::utils::is_identifier;

use crate::ast::{
    Comment, CommentKind, ConstDecl, ExportDecl, Expr, ImportDecl, ImportKind, ImportSpecifier,
    Item, Program, Statement, Verbatim,
};

pub struct ProgramPrinter<'p, 's> {
    program: &'p Program,
    source: &'s str,
    comments: bool,
}

impl<'p, 's> ProgramPrinter<'p, 's> {
    pub fn new(program: &'p Program, source: &'s str) -> Self {
        Self {
            program,
            source,
            comments: true,
        }
    }

    pub fn with_comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, item) in self.program.body.iter().enumerate() {
            if i > 0 {
                w.write_str("\n\n")?;
            }
            self.format_item(item, w)?;
        }

        let trailing: Vec<_> = self.visible_comments(&self.program.trailing_comments).collect();
        if !trailing.is_empty() {
            if !self.program.body.is_empty() {
                w.write_str("\n\n")?;
            }
            for (i, comment) in trailing.iter().enumerate() {
                if i > 0 {
                    w.write_char('\n')?;
                }
                format_comment(comment, w)?;
            }
        }

        if !self.program.body.is_empty() || !trailing.is_empty() {
            w.write_char('\n')?;
        }
        Ok(())
    }

    fn visible_comments<'a>(&'a self, ids: &'a [usize]) -> impl Iterator<Item = &'p Comment> + 'a {
        ids.iter()
            .filter_map(|&id| self.program.comments.get(id))
            .filter(move |comment| self.comments && !comment.ignored)
    }

    fn format_item(&self, item: &Item, w: &mut impl Write) -> std::fmt::Result {
        for comment in self.visible_comments(&item.leading_comments) {
            format_comment(comment, w)?;
            w.write_char('\n')?;
        }
        self.format_statement(&item.stmt, w)
    }

    fn format_statement(&self, stmt: &Statement, w: &mut impl Write) -> std::fmt::Result {
        match stmt {
            Statement::Const(decl) => format_const(decl, w),
            Statement::Import(import) => format_import(import, w),
            Statement::Export(export) => self.format_export(export, w),
            Statement::Verbatim(verbatim) => self.format_verbatim(verbatim, w),
            Statement::TypeAlias(_) | Statement::Interface(_) => {
                w.write_str(self.slice(stmt.span()))
            }
        }
    }

    /// Source text with rewritten nested declarations spliced in, each
    /// indented like the line it starts on. Comments the directive scan
    /// edited inside the statement are replaced too.
    fn format_verbatim(&self, verbatim: &Verbatim, w: &mut impl Write) -> std::fmt::Result {
        let base = verbatim.span.start();
        let mut splices: Vec<(TextRange, String)> = Vec::new();

        for item in &verbatim.nested {
            let Statement::Const(decl) = &item.stmt else {
                continue;
            };
            let mut rendered = String::new();
            format_const(decl, &mut rendered)?;
            let indent = line_indent(&verbatim.text, usize::from(decl.span.start() - base));
            splices.push((decl.span, rendered.replace('\n', &format!("\n{indent}"))));
        }

        let rewritten: Vec<TextRange> = splices.iter().map(|(span, _)| *span).collect();
        for comment in &self.program.comments {
            if !verbatim.span.contains_range(comment.span)
                || rewritten.iter().any(|span| span.contains_range(comment.span))
            {
                continue;
            }
            let mut rendered = String::new();
            if !comment.ignored {
                format_comment(comment, &mut rendered)?;
            }
            if rendered != self.slice(comment.span) {
                splices.push((comment.span, rendered));
            }
        }

        splices.sort_by_key(|(span, _)| span.start());
        let mut cursor = 0;
        for (span, text) in splices {
            let range = std::ops::Range::<usize>::from(span - base);
            if range.start < cursor {
                continue;
            }
            w.write_str(verbatim.text.get(cursor..range.start).unwrap_or_default())?;
            w.write_str(&text)?;
            cursor = range.end;
        }
        w.write_str(verbatim.text.get(cursor..).unwrap_or_default())
    }

    fn format_export(&self, export: &ExportDecl, w: &mut impl Write) -> std::fmt::Result {
        match export.declaration.as_ref() {
            Statement::Const(decl) => {
                w.write_str("export ")?;
                format_const(decl, w)
            }
            _ => w.write_str(self.slice(export.span)),
        }
    }

    fn slice(&self, span: TextRange) -> &'s str {
        self.source
            .get(std::ops::Range::<usize>::from(span))
            .unwrap_or_default()
    }
}

/// Leading whitespace of the line containing `offset`, when nothing else
/// precedes `offset` on that line.
fn line_indent(text: &str, offset: usize) -> &str {
    let before = text.get(..offset).unwrap_or_default();
    let line = before.rfind('\n').map_or(before, |at| &before[at + 1..]);
    if line.chars().all(|c| c == ' ' || c == '\t') {
        line
    } else {
        ""
    }
}

fn format_comment(comment: &Comment, w: &mut impl Write) -> std::fmt::Result {
    match comment.kind {
        CommentKind::Line => write!(w, "//{}", comment.text),
        CommentKind::Block => write!(w, "/*{}*/", comment.text),
    }
}

fn format_const(decl: &ConstDecl, w: &mut impl Write) -> std::fmt::Result {
    write!(w, "const {} = ", decl.id.name)?;
    format_expr(&decl.init, 0, w)?;
    w.write_char(';')
}

fn format_import(import: &ImportDecl, w: &mut impl Write) -> std::fmt::Result {
    w.write_str("import ")?;
    match import.kind {
        ImportKind::Value => {}
        ImportKind::Type => w.write_str("type ")?,
        ImportKind::Typeof => w.write_str("typeof ")?,
    }

    if !import.specifiers.is_empty() {
        let mut parts = Vec::new();
        let mut named = Vec::new();
        for specifier in &import.specifiers {
            match specifier {
                ImportSpecifier::Default(id) => parts.push(id.name.clone()),
                ImportSpecifier::Namespace(id) => parts.push(format!("* as {}", id.name)),
                ImportSpecifier::Named { imported, local } if imported.name == local.name => {
                    named.push(local.name.clone())
                }
                ImportSpecifier::Named { imported, local } => {
                    named.push(format!("{} as {}", imported.name, local.name))
                }
            }
        }
        if !named.is_empty() {
            parts.push(format!("{{ {} }}", named.join(", ")));
        }
        write!(w, "{} from ", parts.join(", "))?;
    }

    format_string(&import.source.value, w)?;
    w.write_char(';')
}

/// Print an expression at the given indentation level.
pub fn format_expr(expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
    match expr {
        Expr::Ident(name) => w.write_str(name),
        Expr::Member(object, property) => {
            format_expr(object, indent, w)?;
            write!(w, ".{property}")
        }
        Expr::Call(callee, args) => {
            format_expr(callee, indent, w)?;
            w.write_char('(')?;
            format_list(args, indent, w)?;
            w.write_char(')')
        }
        Expr::Array(items) => {
            w.write_char('[')?;
            format_list(items, indent, w)?;
            w.write_char(']')
        }
        Expr::Object(props) => {
            if props.is_empty() {
                return w.write_str("{}");
            }
            let prefix = "  ".repeat(indent + 1);
            w.write_str("{\n")?;
            for (i, prop) in props.iter().enumerate() {
                if i > 0 {
                    w.write_str(",\n")?;
                }
                w.write_str(&prefix)?;
                if is_identifier(&prop.key) {
                    w.write_str(&prop.key)?;
                } else {
                    format_string(&prop.key, w)?;
                }
                w.write_str(": ")?;
                format_expr(&prop.value, indent + 1, w)?;
            }
            write!(w, "\n{}}}", "  ".repeat(indent))
        }
        Expr::String(value) => format_string(value, w),
        Expr::Number(raw) => w.write_str(raw),
        Expr::Bool(value) => write!(w, "{value}"),
        Expr::Function { param, body } => {
            write!(w, "function ({}) {{\n", param.as_deref().unwrap_or_default())?;
            write!(w, "{}return ", "  ".repeat(indent + 1))?;
            format_expr(body, indent + 1, w)?;
            write!(w, ";\n{}}}", "  ".repeat(indent))
        }
        Expr::StrictEq(left, right) => {
            format_expr(left, indent, w)?;
            w.write_str(" === ")?;
            format_expr(right, indent, w)
        }
        Expr::Or(left, right) => {
            format_expr(left, indent, w)?;
            w.write_str(" || ")?;
            format_expr(right, indent, w)
        }
    }
}

fn format_list(items: &[Expr], indent: usize, w: &mut impl Write) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        format_expr(item, indent, w)?;
    }
    Ok(())
}

/// Single-quoted string literal.
fn format_string(value: &str, w: &mut impl Write) -> std::fmt::Result {
    w.write_char('\'')?;
    for c in value.chars() {
        match c {
            '\'' => w.write_str("\\'")?,
            '\\' => w.write_str("\\\\")?,
            '\n' => w.write_str("\\n")?,
            '\r' => w.write_str("\\r")?,
            '\t' => w.write_str("\\t")?,
            c if c.is_control() => write!(w, "\\u{:04x}", u32::from(c))?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('\'')
}

/// Render a single expression, used by tests and debugging output.
pub fn expr_to_string(expr: &Expr) -> String {
    let mut out = String::new();
    format_expr(expr, 0, &mut out).expect("String write never fails");
    out
}
