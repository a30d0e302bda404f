//! Declaration policies: reserved names and recursion.

use runtype_core::is_reserved_name;

use crate::ast::{Identifier, Item, Program};
use crate::compile::{CompileError, CompileResult};

/// Comment marker flagging a declaration as self-referencing.
const RECURSIVE_MARKER: &str = "recursive";

/// Reject declarations binding a reserved name.
pub fn check_reserved(id: &Identifier) -> CompileResult<()> {
    if is_reserved_name(&id.name) {
        return Err(CompileError::ReservedName {
            name: id.name.clone(),
            span: id.span,
        });
    }
    Ok(())
}

/// Recursive when flagged by the host or when a leading comment mentions it.
pub fn is_recursive(program: &Program, item: &Item, flagged: bool) -> bool {
    flagged
        || program
            .leading_comments(item)
            .any(|comment| comment.text.contains(RECURSIVE_MARKER))
}
