use rowan::TextRange;

use crate::ast::{Comment, CommentKind};
use crate::transform::scan_directive;

fn line(text: &str) -> Comment {
    Comment {
        kind: CommentKind::Line,
        text: text.to_string(),
        span: TextRange::default(),
        ignored: false,
    }
}

fn block(text: &str) -> Comment {
    Comment {
        kind: CommentKind::Block,
        ..line(text)
    }
}

#[test]
fn no_directive() {
    let scan = scan_directive(&[line(" hello")], "@tcomb");
    assert!(!scan.active);
    assert!(scan.edits.is_empty());
}

#[test]
fn directive_only_comment_is_ignored() {
    let mut comments = vec![line(" @tcomb")];
    let scan = scan_directive(&comments, "@tcomb");
    assert!(scan.active);
    assert_eq!(scan.edits.len(), 1);
    assert!(scan.edits[0].ignored);

    scan.apply(&mut comments);
    assert!(comments[0].ignored);
    assert_eq!(comments[0].text, " ");
}

#[test]
fn doc_block_with_only_directive_is_ignored() {
    let scan = scan_directive(&[block("* @tcomb ")], "@tcomb");
    assert!(scan.edits[0].ignored);
}

#[test]
fn remaining_text_is_kept() {
    let mut comments = vec![line(" @flow @tcomb")];
    let scan = scan_directive(&comments, "@tcomb");
    assert!(!scan.edits[0].ignored);

    scan.apply(&mut comments);
    assert!(!comments[0].ignored);
    assert_eq!(comments[0].text, " @flow ");
}

#[test]
fn every_matching_comment_is_edited() {
    let comments = vec![line(" @tcomb"), line(" plain"), block(" @tcomb again @tcomb ")];
    let scan = scan_directive(&comments, "@tcomb");
    assert_eq!(scan.edits.len(), 2);
    assert_eq!(scan.edits[0].comment, 0);
    assert_eq!(scan.edits[1].comment, 2);
    assert_eq!(scan.edits[1].text, "  again @tcomb ");
}

#[test]
fn custom_directive() {
    let scan = scan_directive(&[line(" @tcomb")], "@runtime");
    assert!(!scan.active);

    let scan = scan_directive(&[line(" @runtime")], "@runtime");
    assert!(scan.active);
}

#[test]
fn empty_directive_never_matches() {
    let scan = scan_directive(&[line(" anything")], "");
    assert!(!scan.active);
}
