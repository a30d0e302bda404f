use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 0..5: expected a type");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedName, range(5, 16))
        .message("$Refinement")
        .emit();

    let message = diagnostics.iter().next().unwrap();
    assert_eq!(message.kind(), DiagnosticKind::ReservedName);
    assert_eq!(message.range(), range(5, 16));
    insta::assert_snapshot!(message.message(), @"`$Refinement` is a reserved type name");
}

#[test]
fn custom_message_uses_standard_pattern() {
    insta::assert_snapshot!(
        DiagnosticKind::UnsupportedAnnotation.message(Some("symbol type")),
        @"unsupported type annotation: symbol type"
    );
    insta::assert_snapshot!(DiagnosticKind::ExpectedToken.message(Some("=")), @"expected `=`");
}

#[test]
fn empty_diagnostics_render_nothing() {
    let diagnostics = Diagnostics::new();

    assert!(diagnostics.is_empty());
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.render("type A = number;"), "");
}

#[test]
fn plain_rendering_separates_messages() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedIdentifier, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(2, 3))
        .emit();

    insta::assert_snapshot!(diagnostics.to_string(), @r"
    error at 0..1: expected an identifier
    error at 2..3: unexpected token
    ");
}

#[test]
fn source_rendering_points_at_span() {
    let source = "type $Reify = any;";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ReservedName, range(5, 11))
        .message("$Reify")
        .emit();

    let rendered = diagnostics.render(source);

    assert!(rendered.contains("`$Reify` is a reserved type name"));
    assert!(rendered.contains("type $Reify = any;"));
    assert!(rendered.contains("^^^^^^"));
}

#[test]
fn empty_span_at_end_still_renders() {
    let source = "type A = {";
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedToken, range(10, 10))
        .message("}")
        .emit();

    let rendered = diagnostics.render(source);
    assert!(rendered.contains("expected `}`"));
}
