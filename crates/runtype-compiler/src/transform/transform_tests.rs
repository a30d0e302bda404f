use indoc::indoc;
use runtype_core::GlobalTypes;

use crate::ast::Program;
use crate::config::Config;
use crate::parser::parse;
use crate::transform::{Activation, Transformer};
use crate::{shot_error, shot_transform};

fn parsed(source: &str) -> Program {
    let result = parse(source).expect("no fatal error");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    result.program
}

#[test]
fn declarations_become_combinators() {
    shot_transform!(r#"
        // @tcomb
        type U = 'foo' | 'bar' | 'baz';

        export type Person = {
          id: number,
          dob: Date,
          firstName: string,
          lastName: string,
          u: U,
        };
    "#, @r"
    import _t from 'tcomb';

    const U = _t.enums.of(['foo', 'bar', 'baz'], 'U');

    export const Person = _t.interface({
      id: _t.Number,
      dob: Date,
      firstName: _t.String,
      lastName: _t.String,
      u: U
    }, 'Person');
    ");
}

#[test]
fn unit_without_directive_is_untouched() {
    shot_transform!(r#"
        type S = symbol;

        export type Person = { name: string };

        function greet(p) { return p.name; }
    "#, @r"
    type S = symbol;

    export type Person = { name: string };

    function greet(p) { return p.name; }
    ");
}

#[test]
fn unit_without_directive_keeps_unparsed_syntax() {
    shot_transform!(r#"
        type A = { ...B, c: number };
        const x = 1;
    "#, @r"
    type A = { ...B, c: number };
    const x = 1;
    ");
}

#[test]
fn declarations_inside_functions_are_rewritten() {
    shot_transform!(r#"
        // @tcomb
        function f() {
          type A = number;
          return 1;
        }
    "#, @r"
    import _t from 'tcomb';

    function f() {
      const A = _t.Number;
      return 1;
    }
    ");
}

#[test]
fn nested_declarations_keep_block_indentation() {
    shot_transform!(r#"
        // @tcomb
        export function g(x) {
          if (x) {
            // recursive
            interface Node { value: string, next: ?Node }
            return x;
          }
        }
    "#, @r"
    import _t from 'tcomb';

    export function g(x) {
      if (x) {
        // recursive
        const Node = _t.interface({
          value: _t.String,
          next: _t.maybe(Node)
        }, 'Node');
        return x;
      }
    }
    ");
}

#[test]
fn other_statements_pass_through() {
    shot_transform!(r#"
        // @tcomb
        import React from 'react';
        import typeof T from 'tcomb';
        const x = 1;

        type A = string;
    "#, @r"
    import _t from 'tcomb';

    import React from 'react';

    import typeof T from 'tcomb';

    const x = 1;

    const A = _t.String;
    ");
}

#[test]
fn directive_text_is_stripped() {
    shot_transform!(r#"
        /* @flow @tcomb */
        type A = string;
    "#, @r"
    import _t from 'tcomb';

    /* @flow  */
    const A = _t.String;
    ");
}

#[test]
fn external_type_imports() {
    shot_transform!(r#"
        // @tcomb
        import type { Props, State as S } from 'tcomb-react';
        import type Def from 'tcomb-react';

        type P = { props: Props };
    "#, @r"
    import _t from 'tcomb';

    import * as _tcombReact from 'tcomb-react';

    const Props = _tcombReact.Props || _t.Any;

    const S = _tcombReact.State || _t.Any;

    import * as _tcombReact2 from 'tcomb-react';

    const Def = _tcombReact2.default || _t.Any;

    const P = _t.interface({
      props: Props
    }, 'P');
    ");
}

#[test]
fn namespace_type_import() {
    shot_transform!(r#"
        // @tcomb
        import type * as Types from 'some-pkg';
    "#, @r"
    import * as _somePkg from 'some-pkg';

    const Types = _somePkg;
    ");
}

#[test]
fn relative_type_imports_become_value_imports() {
    shot_transform!(r#"
        // @tcomb
        import type { Person } from './person';

        type Team = { lead: Person };
    "#, @r"
    import _t from 'tcomb';

    import { Person } from './person';

    const Team = _t.interface({
      lead: Person
    }, 'Team');
    ");
}

#[test]
fn no_library_import_without_reference() {
    shot_transform!(r#"
        // @tcomb
        import type { Person } from '../person';

        type Alias = Person;
    "#, @r"
    import { Person } from '../person';

    const Alias = Person;
    ");
}

#[test]
fn recursive_declaration() {
    shot_transform!(r#"
        // @tcomb
        // recursive
        type Tree = { children: Array<Tree> };
    "#, @r"
    import _t from 'tcomb';

    // recursive
    const Tree = _t.interface({
      children: _t.list(Tree)
    }, 'Tree');
    ");
}

#[test]
fn interfaces() {
    shot_transform!(r#"
        // @tcomb
        interface A { a: string }

        export interface B extends A { b: number }
    "#, @r"
    import _t from 'tcomb';

    const A = _t.interface({
      a: _t.String
    }, 'A');

    export const B = _t.interface.extend([A, {
      b: _t.Number
    }], 'B');
    ");
}

#[test]
fn library_binding_avoids_collisions() {
    shot_transform!(r#"
        // @tcomb
        const _t = 1;

        type A = string;
    "#, @r"
    import _t2 from 'tcomb';

    const _t = 1;

    const A = _t2.String;
    ");
}

#[test]
fn custom_library_and_directive() {
    let config = Config::new().library("tcomb-lite").directive("@runtime");
    shot_transform!(r#"
        // @runtime
        type A = ?string;
    "#, config, @r"
    import _t from 'tcomb-lite';

    const A = _t.maybe(_t.String, 'A');
    ");
}

#[test]
fn globals_compile_to_any() {
    let config = Config::new().globals(GlobalTypes::new().with("ReactElement"));
    shot_transform!(r#"
        // @tcomb
        type El = ReactElement;
    "#, config, @r"
    import _t from 'tcomb';

    const El = _t.Any;
    ");
}

#[test]
fn reserved_name() {
    shot_error!(r#"
        // @tcomb
        type $Refinement = number;
    "#, @"error at 15..26: `$Refinement` is a reserved type name");
}

#[test]
fn reserved_name_in_export() {
    shot_error!(r#"
        // @tcomb
        export interface $Reify {}
    "#, @"error at 27..33: `$Reify` is a reserved type name");
}

#[test]
fn shape_error() {
    shot_error!(r#"
        // @tcomb
        type L = Array<string, number>;
    "#, @"error at 19..40: `Array` expects exactly one type argument, found 2");
}

#[test]
fn parse_error() {
    shot_error!(r#"
        // @tcomb
        type A = ;
    "#, @"error at 19..20: expected a type");
}

#[test]
fn activation_states() {
    let config = Config::new();

    let mut program = parsed("type A = number;");
    let mut transformer = Transformer::new(&config);
    assert_eq!(transformer.activation(), Activation::Inactive);
    transformer.enter_unit(&mut program);
    assert_eq!(transformer.activation(), Activation::Inactive);

    let mut program = parsed("// @tcomb\ntype A = number;");
    let mut transformer = Transformer::new(&config);
    transformer.enter_unit(&mut program);
    assert_eq!(transformer.activation(), Activation::Active);
    assert!(program.comments[0].ignored);
}

#[test]
fn exit_unit_adds_import_once_referenced() {
    let config = Config::new();
    let source = indoc! {r#"
        // @tcomb
        type A = number;
    "#};
    let program = Transformer::new(&config).run(parsed(source)).unwrap();
    assert_eq!(program.body.len(), 2);

    let program = Transformer::new(&config)
        .run(parsed("// @tcomb\nconst x = 1;"))
        .unwrap();
    assert_eq!(program.body.len(), 1);
}

#[test]
fn host_flagged_recursion() {
    let config = Config::new();
    let mut program = parsed("// @tcomb\ntype List = { next: ?List };");
    if let crate::ast::Statement::TypeAlias(alias) = &mut program.body[0].stmt {
        alias.recursive = true;
    }
    let mut transformer = Transformer::new(&config);
    transformer.enter_unit(&mut program);
    let crate::ast::Statement::TypeAlias(alias) = &program.body[0].stmt else {
        panic!("expected a type alias");
    };
    let decl = transformer.type_alias(alias, true).unwrap();
    assert_eq!(decl.id.name, "List");
    assert!(transformer.scope().is_taken("List"));
    assert!(transformer.scope().has_emitted());
}
