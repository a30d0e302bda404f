//! Type annotation productions.
//!
//! Precedence, loosest first: union, intersection, prefix `?`, postfix `[]`,
//! then primary types.

use rowan::{TextRange, TextSize};

use crate::ast::{
    FunctionType, FunctionTypeParam, GenericType, IndexedAccessType, NumberLiteral,
    ObjectType, ObjectTypeIndexer, ObjectTypeProperty, PrimitiveType, PropertyKey, QualifiedName,
    Type, TypeAnnotation, TypeParameter,
};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::lexer::{SyntaxKind, unquote};

impl Parser<'_> {
    pub(super) fn parse_type(&mut self) -> Option<TypeAnnotation> {
        if !self.enter_recursion() {
            return None;
        }
        let result = self.parse_union();
        self.exit_recursion();
        result
    }

    /// `A | B | C`, with an optional leading `|`.
    fn parse_union(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();
        self.eat(SyntaxKind::Pipe);

        let first = self.parse_intersection()?;
        if !self.at(SyntaxKind::Pipe) {
            return Some(first);
        }

        let mut members = vec![first];
        while self.eat(SyntaxKind::Pipe) {
            members.push(self.parse_intersection()?);
        }
        Some(TypeAnnotation::new(
            Type::Union(members),
            self.range_from(start),
        ))
    }

    /// `A & B & C`, with an optional leading `&`.
    fn parse_intersection(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();
        self.eat(SyntaxKind::Amp);

        let first = self.parse_prefix()?;
        if !self.at(SyntaxKind::Amp) {
            return Some(first);
        }

        let mut members = vec![first];
        while self.eat(SyntaxKind::Amp) {
            members.push(self.parse_prefix()?);
        }
        Some(TypeAnnotation::new(
            Type::Intersection(members),
            self.range_from(start),
        ))
    }

    /// `?T`
    fn parse_prefix(&mut self) -> Option<TypeAnnotation> {
        if !self.at(SyntaxKind::Question) {
            return self.parse_postfix();
        }
        let start = self.bump().span.start();
        if !self.enter_recursion() {
            return None;
        }
        let inner = self.parse_prefix();
        self.exit_recursion();
        let inner = inner?;
        Some(TypeAnnotation::new(
            Type::Nullable(Box::new(inner)),
            self.range_from(start),
        ))
    }

    /// `T[]` and `T[K]`, left-associative.
    fn parse_postfix(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();
        let mut ty = self.parse_primary()?;

        // A bracket on the next line starts a new expression, not a postfix.
        while self.at(SyntaxKind::BracketOpen) && !self.newline_ahead() {
            self.bump();
            if self.eat(SyntaxKind::BracketClose) {
                ty = TypeAnnotation::new(Type::Array(Box::new(ty)), self.range_from(start));
                continue;
            }
            let index = self.parse_type()?;
            self.expect(SyntaxKind::BracketClose, "]")?;
            ty = TypeAnnotation::new(
                Type::IndexedAccess(IndexedAccessType {
                    object: Box::new(ty),
                    index: Box::new(index),
                }),
                self.range_from(start),
            );
        }
        Some(ty)
    }

    fn parse_primary(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();
        let ty = match self.current() {
            SyntaxKind::Ident => return self.parse_named_type(),
            SyntaxKind::String => {
                let token = self.bump();
                Type::StringLiteral(unquote(self.text(&token)))
            }
            SyntaxKind::Number => {
                let token = self.bump();
                Type::NumberLiteral(number_literal(self.text(&token).to_string()))
            }
            SyntaxKind::Minus if self.nth(1) == SyntaxKind::Number => {
                self.bump();
                let token = self.bump();
                Type::NumberLiteral(number_literal(format!("-{}", self.text(&token))))
            }
            SyntaxKind::BigInt => {
                let token = self.bump();
                Type::BigIntLiteral(self.text(&token).to_string())
            }
            SyntaxKind::Star => {
                self.bump();
                Type::Primitive(PrimitiveType::Existential)
            }
            SyntaxKind::BraceOpen | SyntaxKind::BraceBarOpen => {
                Type::Object(self.parse_object_type()?.0)
            }
            SyntaxKind::BracketOpen => self.parse_tuple()?,
            SyntaxKind::ParenOpen => return self.parse_parenthesized_or_function(),
            SyntaxKind::Lt => {
                // Generic function type: the type parameters carry no runtime meaning.
                self.parse_type_params()?;
                Type::Function(self.parse_function_type()?)
            }
            SyntaxKind::Unexpected => {
                let text = self.current_text();
                self.error_msg(DiagnosticKind::UnexpectedToken, text);
                return None;
            }
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                return None;
            }
        };
        Some(TypeAnnotation::new(ty, self.range_from(start)))
    }

    /// Keywords, `typeof x`, boolean literals and generic references.
    fn parse_named_type(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();
        let text = self.current_text();

        let ty = if text == "typeof" && self.nth(1) == SyntaxKind::Ident {
            self.bump();
            Type::Typeof(self.parse_qualified_name()?)
        } else if text == "true" || text == "false" {
            self.bump();
            Type::BooleanLiteral(text == "true")
        } else if let Some(primitive) = PrimitiveType::from_keyword(text) {
            self.bump();
            Type::Primitive(primitive)
        } else {
            let id = self.parse_qualified_name()?;
            let type_args = if self.at(SyntaxKind::Lt) {
                Some(self.parse_type_args()?)
            } else {
                None
            };
            Type::Generic(GenericType { id, type_args })
        };

        Some(TypeAnnotation::new(ty, self.range_from(start)))
    }

    /// `A` or `A.B.C`
    pub(super) fn parse_qualified_name(&mut self) -> Option<QualifiedName> {
        let mut segments = vec![self.expect_identifier()?];
        while self.at(SyntaxKind::Dot) && self.nth(1) == SyntaxKind::Ident {
            self.bump();
            segments.push(self.expect_identifier()?);
        }
        Some(QualifiedName { segments })
    }

    /// `<A, B>`
    pub(super) fn parse_type_args(&mut self) -> Option<Vec<TypeAnnotation>> {
        self.expect(SyntaxKind::Lt, "<")?;
        let mut args = Vec::new();
        while !self.at(SyntaxKind::Gt) {
            args.push(self.parse_type()?);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::Gt, ">")?;
        Some(args)
    }

    /// Declaration type parameters when present: outer `None` on error,
    /// inner `None` when the declaration has none.
    pub(super) fn parse_type_params_opt(&mut self) -> Option<Option<Vec<TypeParameter>>> {
        if !self.at(SyntaxKind::Lt) {
            return Some(None);
        }
        self.parse_type_params().map(Some)
    }

    /// `<+T: Bound = Default, U>`
    fn parse_type_params(&mut self) -> Option<Vec<TypeParameter>> {
        self.expect(SyntaxKind::Lt, "<")?;
        let mut params = Vec::new();
        while !self.at(SyntaxKind::Gt) {
            let start = self.current_span().start();
            if matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
                self.bump();
            }
            let name = self.expect_identifier()?;
            let bound = if self.eat(SyntaxKind::Colon) {
                Some(self.parse_type()?)
            } else {
                None
            };
            let default = if self.eat(SyntaxKind::Equals) {
                Some(self.parse_type()?)
            } else {
                None
            };
            params.push(TypeParameter {
                name,
                bound,
                default,
                span: self.range_from(start),
            });
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::Gt, ">")?;
        Some(params)
    }

    /// `[A, B]`
    fn parse_tuple(&mut self) -> Option<Type> {
        self.bump();
        let mut items = Vec::new();
        while !self.at(SyntaxKind::BracketClose) {
            items.push(self.parse_type()?);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::BracketClose, "]")?;
        Some(Type::Tuple(items))
    }

    /// `(T)`, `(T) => R`, `(x: T, ...rest: U) => R`
    fn parse_parenthesized_or_function(&mut self) -> Option<TypeAnnotation> {
        let start = self.current_span().start();

        if self.at_function_params() {
            let function = self.parse_function_type()?;
            return Some(TypeAnnotation::new(
                Type::Function(function),
                self.range_from(start),
            ));
        }

        self.bump();
        let inner = self.parse_type()?;
        self.expect(SyntaxKind::ParenClose, ")")?;

        if !self.eat(SyntaxKind::Arrow) {
            // Parentheses only group; the span widens to include them.
            return Some(TypeAnnotation::new(inner.ty, self.range_from(start)));
        }

        let return_type = self.parse_type()?;
        let function = FunctionType {
            params: vec![FunctionTypeParam {
                name: None,
                ty: inner,
                optional: false,
            }],
            rest: None,
            return_type: Box::new(return_type),
        };
        Some(TypeAnnotation::new(
            Type::Function(function),
            self.range_from(start),
        ))
    }

    /// `(` followed by something only a parameter list can start with.
    fn at_function_params(&self) -> bool {
        match self.nth(1) {
            SyntaxKind::ParenClose | SyntaxKind::Ellipsis => true,
            SyntaxKind::Ident => {
                self.nth(2) == SyntaxKind::Colon
                    || (self.nth(2) == SyntaxKind::Question && self.nth(3) == SyntaxKind::Colon)
            }
            _ => false,
        }
    }

    /// `(params) => R`
    fn parse_function_type(&mut self) -> Option<FunctionType> {
        let (params, rest) = self.parse_function_params()?;
        self.expect(SyntaxKind::Arrow, "=>")?;
        let return_type = self.parse_type()?;
        Some(FunctionType {
            params,
            rest,
            return_type: Box::new(return_type),
        })
    }

    /// `(params): R` in object method position.
    fn parse_method_type(&mut self) -> Option<FunctionType> {
        if self.at(SyntaxKind::Lt) {
            self.parse_type_params()?;
        }
        let (params, rest) = self.parse_function_params()?;
        self.expect(SyntaxKind::Colon, ":")?;
        let return_type = self.parse_type()?;
        Some(FunctionType {
            params,
            rest,
            return_type: Box::new(return_type),
        })
    }

    #[allow(clippy::type_complexity)]
    fn parse_function_params(
        &mut self,
    ) -> Option<(Vec<FunctionTypeParam>, Option<Box<FunctionTypeParam>>)> {
        self.expect(SyntaxKind::ParenOpen, "(")?;
        let mut params = Vec::new();
        let mut rest = None;

        while !self.at(SyntaxKind::ParenClose) {
            if self.eat(SyntaxKind::Ellipsis) {
                rest = Some(Box::new(self.parse_function_param()?));
                self.eat(SyntaxKind::Comma);
                break;
            }
            params.push(self.parse_function_param()?);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        self.expect(SyntaxKind::ParenClose, ")")?;
        Some((params, rest))
    }

    /// `name: T`, `name?: T` or a bare `T`.
    fn parse_function_param(&mut self) -> Option<FunctionTypeParam> {
        let named = self.at(SyntaxKind::Ident)
            && (self.nth(1) == SyntaxKind::Colon
                || (self.nth(1) == SyntaxKind::Question && self.nth(2) == SyntaxKind::Colon));

        if !named {
            let ty = self.parse_type()?;
            return Some(FunctionTypeParam {
                name: None,
                ty,
                optional: false,
            });
        }

        let name = self.expect_identifier()?;
        let optional = self.eat(SyntaxKind::Question);
        self.bump();
        let ty = self.parse_type()?;
        Some(FunctionTypeParam {
            name: Some(name),
            ty,
            optional,
        })
    }

    /// `{ a: A, b?: B, [k: K]: V, m(): R }` or the exact `{| ... |}`.
    pub(super) fn parse_object_type(&mut self) -> Option<(ObjectType, TextRange)> {
        let open = self.bump();
        let exact = open.kind == SyntaxKind::BraceBarOpen;
        let (close, close_text) = if exact {
            (SyntaxKind::BarBraceClose, "|}")
        } else {
            (SyntaxKind::BraceClose, "}")
        };

        let mut object = ObjectType {
            exact,
            ..ObjectType::default()
        };

        while !self.at(close) {
            if self.should_stop() {
                self.error_msg(DiagnosticKind::ExpectedToken, close_text);
                return None;
            }

            self.parse_object_member(&mut object)?;

            if !self.eat(SyntaxKind::Comma) && !self.eat(SyntaxKind::Semicolon) {
                if self.at(close) {
                    break;
                }
                let expected = if self.should_stop() { close_text } else { "," };
                self.error_msg(DiagnosticKind::ExpectedToken, expected);
                return None;
            }
        }

        self.bump();
        Some((object, self.range_from(open.span.start())))
    }

    fn parse_object_member(&mut self, object: &mut ObjectType) -> Option<()> {
        let start = self.current_span().start();

        // Variance sigils carry no runtime meaning.
        if matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            self.bump();
        }

        match self.current() {
            SyntaxKind::Ellipsis => {
                self.error_msg(DiagnosticKind::UnsupportedSyntax, "object type spread");
                None
            }
            SyntaxKind::ParenOpen | SyntaxKind::Lt => {
                self.error_msg(DiagnosticKind::UnsupportedSyntax, "call property");
                None
            }
            SyntaxKind::BracketOpen => {
                let indexer = self.parse_indexer(start)?;
                object.indexers.push(indexer);
                Some(())
            }
            _ => {
                let property = self.parse_property(start)?;
                object.properties.push(property);
                Some(())
            }
        }
    }

    /// `[key: K]: V` or `[K]: V`
    fn parse_indexer(&mut self, start: TextSize) -> Option<ObjectTypeIndexer> {
        self.bump();
        let id = if self.at(SyntaxKind::Ident) && self.nth(1) == SyntaxKind::Colon {
            let id = self.expect_identifier()?;
            self.bump();
            Some(id)
        } else {
            None
        };
        let key = self.parse_type()?;
        self.expect(SyntaxKind::BracketClose, "]")?;
        self.expect(SyntaxKind::Colon, ":")?;
        let value = self.parse_type()?;
        Some(ObjectTypeIndexer {
            id,
            key,
            value,
            span: self.range_from(start),
        })
    }

    /// `key: T`, `key?: T`, `'key': T` or a method `key(x: A): R`.
    fn parse_property(&mut self, start: TextSize) -> Option<ObjectTypeProperty> {
        let key = match self.current() {
            SyntaxKind::Ident => PropertyKey::Identifier(self.expect_identifier()?),
            SyntaxKind::String => {
                let token = self.bump();
                PropertyKey::String(unquote(self.text(&token)))
            }
            _ => {
                self.error_msg(DiagnosticKind::ExpectedIdentifier, "property name");
                return None;
            }
        };

        if matches!(self.current(), SyntaxKind::ParenOpen | SyntaxKind::Lt) {
            let method_start = self.current_span().start();
            let function = self.parse_method_type()?;
            let value =
                TypeAnnotation::new(Type::Function(function), self.range_from(method_start));
            return Some(ObjectTypeProperty {
                key,
                value,
                optional: false,
                span: self.range_from(start),
            });
        }

        let optional = self.eat(SyntaxKind::Question);
        self.expect(SyntaxKind::Colon, ":")?;
        let value = self.parse_type()?;
        Some(ObjectTypeProperty {
            key,
            value,
            optional,
            span: self.range_from(start),
        })
    }
}

fn number_literal(raw: String) -> NumberLiteral {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.as_str()),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).map_or(f64::NAN, |v| v as f64),
        None => digits.parse::<f64>().unwrap_or(f64::NAN),
    };
    let value = if negative { -magnitude } else { magnitude };
    NumberLiteral { value, raw }
}
