//! Core compiler state and entry points.

use rowan::TextRange;
use runtype_core::{GlobalTypes, Primitive, REFINEMENT_MARKER, is_magic_type};

use super::error::{CompileError, CompileResult, ShapeProblem};
use super::intersection::{self, Member};
use super::literals;
use super::scope::TypeParams;
use crate::ast::{
    Expr, GenericType, InterfaceDecl, ObjectProperty, ObjectType, ObjectTypeProperty,
    PrimitiveType, Type, TypeAnnotation,
};
use crate::emit::CombinatorBuilder;

/// Maps type annotations to combinator expressions.
///
/// Stateless apart from the borrowed builder and global registry, so one
/// compiler serves every declaration of a unit.
pub struct Compiler<'a> {
    builder: &'a CombinatorBuilder,
    globals: &'a GlobalTypes,
}

impl<'a> Compiler<'a> {
    pub fn new(builder: &'a CombinatorBuilder, globals: &'a GlobalTypes) -> Self {
        Self { builder, globals }
    }

    /// Compile `annotation`. `name` is attached to the outermost combinator only.
    pub fn compile(
        &self,
        annotation: &TypeAnnotation,
        params: &TypeParams,
        name: Option<&str>,
    ) -> CompileResult<Expr> {
        let b = self.builder;
        let span = annotation.span;

        match &annotation.ty {
            Type::Primitive(primitive) => self.compile_primitive(*primitive, span),
            Type::Function(_) => Ok(b.primitive(Primitive::Function)),
            Type::Typeof(_) => Ok(b.primitive(Primitive::Any)),
            Type::Array(element) => Ok(b.list(self.compile(element, params, None)?, name)),
            Type::Nullable(inner) => Ok(b.maybe(self.compile(inner, params, None)?, name)),
            Type::Tuple(items) => Ok(b.tuple(self.compile_all(items, params)?, name)),
            Type::Union(members) => self.compile_union(members, params, name),
            Type::Intersection(members) => self.compile_intersection(members, params, name, span),
            Type::Object(object) => self.compile_object(object, params, name),
            Type::Generic(generic) => self.compile_generic(generic, span, params, name),
            Type::StringLiteral(value) => Ok(b.enums([value.as_str()], name)),
            Type::NumberLiteral(literal) => Ok(literals::number(b, literal)),
            Type::BooleanLiteral(value) => Ok(literals::boolean(b, *value)),
            Type::BigIntLiteral(_) | Type::IndexedAccess(_) => Err(unsupported(annotation)),
        }
    }

    fn compile_all(
        &self,
        annotations: &[TypeAnnotation],
        params: &TypeParams,
    ) -> CompileResult<Vec<Expr>> {
        annotations
            .iter()
            .map(|annotation| self.compile(annotation, params, None))
            .collect()
    }

    fn compile_primitive(&self, primitive: PrimitiveType, span: TextRange) -> CompileResult<Expr> {
        let b = self.builder;
        let expr = match primitive {
            PrimitiveType::Number => b.primitive(Primitive::Number),
            PrimitiveType::String => b.primitive(Primitive::String),
            PrimitiveType::Boolean => b.primitive(Primitive::Boolean),
            PrimitiveType::Void | PrimitiveType::Null => b.primitive(Primitive::Nil),
            PrimitiveType::Any | PrimitiveType::Mixed | PrimitiveType::Existential => {
                b.primitive(Primitive::Any)
            }
            PrimitiveType::Empty => b.irreducible_empty(),
            PrimitiveType::Symbol => {
                return Err(CompileError::shape(
                    ShapeProblem::UnsupportedAnnotation {
                        kind: primitive.kind_name(),
                    },
                    span,
                ));
            }
        };
        Ok(expr)
    }

    /// Unions made only of string literals become enums.
    fn compile_union(
        &self,
        members: &[TypeAnnotation],
        params: &TypeParams,
        name: Option<&str>,
    ) -> CompileResult<Expr> {
        let literals: Option<Vec<&str>> = members
            .iter()
            .map(|member| match &member.ty {
                Type::StringLiteral(value) => Some(value.as_str()),
                _ => None,
            })
            .collect();

        if let Some(values) = literals {
            return Ok(self.builder.enums(values, name));
        }
        Ok(self.builder.union(self.compile_all(members, params)?, name))
    }

    fn compile_intersection(
        &self,
        members: &[TypeAnnotation],
        params: &TypeParams,
        name: Option<&str>,
        span: TextRange,
    ) -> CompileResult<Expr> {
        let members = members
            .iter()
            .map(|member| self.compile_member(member, params))
            .collect::<CompileResult<Vec<_>>>()?;
        intersection::merge(self.builder, members, name, span)
    }

    fn compile_member(
        &self,
        annotation: &TypeAnnotation,
        params: &TypeParams,
    ) -> CompileResult<Member> {
        if let Type::Generic(generic) = &annotation.ty
            && is_refinement(generic)
            && !self.resolves_to_any(generic, params)
        {
            let predicate = refinement_predicate(generic, annotation.span)?;
            return Ok(Member::Refinement { predicate });
        }
        Ok(Member::Plain(self.compile(annotation, params, None)?))
    }

    /// An object with exactly one indexer is a dictionary, anything else an interface.
    fn compile_object(
        &self,
        object: &ObjectType,
        params: &TypeParams,
        name: Option<&str>,
    ) -> CompileResult<Expr> {
        if let [indexer] = object.indexers.as_slice() {
            let domain = self.compile(&indexer.key, params, None)?;
            let codomain = self.compile(&indexer.value, params, None)?;
            return Ok(self.builder.dict(domain, codomain, name));
        }
        self.compile_interface(&object.properties, params, name, object.exact)
    }

    fn compile_interface(
        &self,
        properties: &[ObjectTypeProperty],
        params: &TypeParams,
        name: Option<&str>,
        exact: bool,
    ) -> CompileResult<Expr> {
        let props = self.compile_properties(properties, params)?;
        Ok(self.builder.interface(props, name, exact))
    }

    /// Optional properties become `maybe(T)`.
    fn compile_properties(
        &self,
        properties: &[ObjectTypeProperty],
        params: &TypeParams,
    ) -> CompileResult<Vec<ObjectProperty>> {
        properties
            .iter()
            .map(|prop| {
                let mut value = self.compile(&prop.value, params, None)?;
                if prop.optional {
                    value = self.builder.maybe(value, None);
                }
                Ok(ObjectProperty::new(prop.key.name(), value))
            })
            .collect()
    }

    fn resolves_to_any(&self, generic: &GenericType, params: &TypeParams) -> bool {
        generic.id.as_simple().is_some_and(|name| {
            params.contains(name) || self.globals.contains(name) || is_magic_type(name)
        })
    }

    fn compile_generic(
        &self,
        generic: &GenericType,
        span: TextRange,
        params: &TypeParams,
        name: Option<&str>,
    ) -> CompileResult<Expr> {
        let b = self.builder;
        if self.resolves_to_any(generic, params) {
            return Ok(b.primitive(Primitive::Any));
        }

        match generic.id.as_simple() {
            Some("Array") => {
                let [element] = generic.type_args() else {
                    return Err(CompileError::shape(
                        ShapeProblem::ArrayArity {
                            found: generic.type_args().len(),
                        },
                        span,
                    ));
                };
                Ok(b.list(self.compile(element, params, None)?, name))
            }
            Some("Object") => Ok(b.primitive(Primitive::Object)),
            Some("Function") => Ok(b.primitive(Primitive::Function)),
            Some("$Exact") => {
                let [argument] = generic.type_args() else {
                    return Err(CompileError::shape(ShapeProblem::InvalidExact, span));
                };
                let Type::Object(object) = &argument.ty else {
                    return Err(CompileError::shape(ShapeProblem::InvalidExact, span));
                };
                self.compile_interface(&object.properties, params, name, true)
            }
            _ => {
                if is_refinement(generic) {
                    refinement_predicate(generic, span)?;
                }
                Ok(generic.id.to_expr())
            }
        }
    }

    /// `interface C extends A, B { ... }`: a plain interface without bases,
    /// otherwise `interface.extend([A, B, { ... }], 'C')`.
    pub fn compile_interface_decl(
        &self,
        decl: &InterfaceDecl,
        params: &TypeParams,
    ) -> CompileResult<Expr> {
        let name = Some(decl.id.name.as_str());
        if decl.extends.is_empty() {
            return self.compile_object(&decl.body, params, name);
        }

        let mut mixins = decl
            .extends
            .iter()
            .map(|base| self.compile_generic(base, base.id.span(), params, None))
            .collect::<CompileResult<Vec<_>>>()?;
        mixins.push(Expr::Object(
            self.compile_properties(&decl.body.properties, params)?,
        ));
        Ok(self.builder.interface_extend(mixins, name))
    }
}

fn is_refinement(generic: &GenericType) -> bool {
    generic.id.as_simple() == Some(REFINEMENT_MARKER)
}

/// Predicate reference of `$Refinement<typeof predicate>`.
fn refinement_predicate(generic: &GenericType, span: TextRange) -> CompileResult<Expr> {
    match generic.type_args() {
        [TypeAnnotation {
            ty: Type::Typeof(predicate),
            ..
        }] => Ok(predicate.to_expr()),
        _ => Err(CompileError::shape(ShapeProblem::InvalidRefinement, span)),
    }
}

fn unsupported(annotation: &TypeAnnotation) -> CompileError {
    CompileError::shape(
        ShapeProblem::UnsupportedAnnotation {
            kind: annotation.ty.kind_name(),
        },
        annotation.span,
    )
}
