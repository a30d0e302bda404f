//! Opt-in directive detection.

use crate::ast::{Comment, CommentId};

/// Outcome of scanning a unit's comments for the directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveScan {
    pub active: bool,
    pub edits: Vec<CommentEdit>,
}

/// Replacement for one comment that held the directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEdit {
    pub comment: CommentId,
    pub text: String,
    /// Nothing but whitespace and `*` is left.
    pub ignored: bool,
}

/// Find every comment containing `directive` and compute its stripped text.
///
/// Only the first occurrence within each comment is removed. An empty
/// directive never matches.
pub fn scan(comments: &[Comment], directive: &str) -> DirectiveScan {
    if directive.is_empty() {
        return DirectiveScan::default();
    }

    let edits: Vec<_> = comments
        .iter()
        .enumerate()
        .filter(|(_, comment)| comment.text.contains(directive))
        .map(|(id, comment)| {
            let text = comment.text.replacen(directive, "", 1);
            let ignored = text.replace('*', "").trim().is_empty();
            CommentEdit {
                comment: id,
                text,
                ignored,
            }
        })
        .collect();

    DirectiveScan {
        active: !edits.is_empty(),
        edits,
    }
}

impl DirectiveScan {
    pub fn apply(&self, comments: &mut [Comment]) {
        for edit in &self.edits {
            if let Some(comment) = comments.get_mut(edit.comment) {
                comment.text.clone_from(&edit.text);
                comment.ignored = edit.ignored;
            }
        }
    }
}
