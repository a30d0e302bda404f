use rowan::TextRange;
use runtype_core::{Combinator, Primitive};

use crate::ast::{
    ConstDecl, Expr, Identifier, ImportDecl, ImportKind, ImportSpecifier, Item, ObjectProperty,
    Program, Statement, StringLiteral,
};
use crate::emit::{CombinatorBuilder, ProgramPrinter, expr_to_string};

fn builder() -> CombinatorBuilder {
    CombinatorBuilder::new("_t")
}

fn id(name: &str) -> Identifier {
    Identifier::new(name, TextRange::default())
}

#[test]
fn primitive_reference() {
    let b = builder();
    insta::assert_snapshot!(expr_to_string(&b.primitive(Primitive::Nil)), @"_t.Nil");
}

#[test]
fn call_with_and_without_name() {
    let b = builder();
    let list = b.list(b.primitive(Primitive::String), None);
    insta::assert_snapshot!(expr_to_string(&list), @"_t.list(_t.String)");

    let named = b.call(
        Combinator::Tuple,
        vec![Expr::Array(vec![b.primitive(Primitive::Number)])],
        Some("Pair"),
    );
    insta::assert_snapshot!(expr_to_string(&named), @"_t.tuple([_t.Number], 'Pair')");
}

#[test]
fn enums_use_two_level_member() {
    let b = builder();
    let enums = b.enums(["foo", "bar"], Some("U"));
    insta::assert_snapshot!(expr_to_string(&enums), @"_t.enums.of(['foo', 'bar'], 'U')");
}

#[test]
fn interface_descriptors() {
    let b = builder();
    let props = || vec![ObjectProperty::new("a", b.primitive(Primitive::Number))];

    insta::assert_snapshot!(expr_to_string(&b.interface(props(), None, false)), @r"
    _t.interface({
      a: _t.Number
    })
    ");
    insta::assert_snapshot!(expr_to_string(&b.interface(props(), Some("A"), false)), @r"
    _t.interface({
      a: _t.Number
    }, 'A')
    ");
    insta::assert_snapshot!(expr_to_string(&b.interface(props(), Some("A"), true)), @r"
    _t.interface({
      a: _t.Number
    }, {
      name: 'A',
      strict: true
    })
    ");
    insta::assert_snapshot!(expr_to_string(&b.interface(props(), None, true)), @r"
    _t.interface({
      a: _t.Number
    }, {
      strict: true
    })
    ");
}

#[test]
fn interface_extend() {
    let b = builder();
    let mixins = vec![
        Expr::ident("A"),
        Expr::Object(vec![ObjectProperty::new("c", b.primitive(Primitive::Boolean))]),
    ];
    insta::assert_snapshot!(expr_to_string(&b.interface_extend(mixins, Some("C"))), @r"
    _t.interface.extend([A, {
      c: _t.Boolean
    }], 'C')
    ");
}

#[test]
fn irreducible_empty() {
    insta::assert_snapshot!(expr_to_string(&builder().irreducible_empty()), @r"
    _t.irreducible('Empty', function () {
      return false;
    })
    ");
}

#[test]
fn nested_objects_indent() {
    let b = builder();
    let inner = b.interface(
        vec![ObjectProperty::new("x", b.primitive(Primitive::Number))],
        None,
        false,
    );
    let outer = b.interface(
        vec![
            ObjectProperty::new("data-id", b.primitive(Primitive::String)),
            ObjectProperty::new("point", inner),
        ],
        Some("Outer"),
        false,
    );
    insta::assert_snapshot!(expr_to_string(&outer), @r"
    _t.interface({
      'data-id': _t.String,
      point: _t.interface({
        x: _t.Number
      })
    }, 'Outer')
    ");
}

#[test]
fn strings_are_escaped() {
    insta::assert_snapshot!(expr_to_string(&Expr::string("it's a \\ test")), @r"'it\'s a \\ test'");
}

#[test]
fn or_and_strict_eq() {
    let fallback = Expr::ident("_ns")
        .member("A")
        .or(Expr::ident("_t").member("Any"));
    insta::assert_snapshot!(expr_to_string(&fallback), @"_ns.A || _t.Any");

    let predicate = Expr::function(Some("n"), Expr::ident("n").strict_eq(Expr::Number("1".into())));
    insta::assert_snapshot!(expr_to_string(&predicate), @r"
    function (n) {
      return n === 1;
    }
    ");
}

#[test]
fn program_printing() {
    let import = ImportDecl {
        kind: ImportKind::Value,
        specifiers: vec![
            ImportSpecifier::Default(id("React")),
            ImportSpecifier::Named {
                imported: id("A"),
                local: id("A"),
            },
            ImportSpecifier::Named {
                imported: id("B"),
                local: id("C"),
            },
        ],
        source: StringLiteral {
            value: "react".to_string(),
            span: TextRange::default(),
        },
        span: TextRange::default(),
    };
    let konst = ConstDecl {
        id: id("A"),
        init: builder().primitive(Primitive::Number),
        span: TextRange::default(),
    };
    let program = Program {
        body: vec![
            Item::new(Statement::Import(import)),
            Item::new(Statement::Const(konst)),
        ],
        ..Program::default()
    };

    insta::assert_snapshot!(ProgramPrinter::new(&program, "").dump(), @r"
    import React, { A, B as C } from 'react';

    const A = _t.Number;
    ");
}
