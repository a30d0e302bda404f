//! Test utilities and snapshot macros.

/// Snapshot test for transformed output under the default configuration.
#[macro_export]
macro_rules! shot_transform {
    ($source:literal, @$snapshot:literal) => {{
        let source = indoc::indoc!($source);
        let output = $crate::Unit::expect_transformed(source);
        insta::assert_snapshot!(output, @$snapshot);
    }};
    ($source:literal, $config:expr, @$snapshot:literal) => {{
        let source = indoc::indoc!($source);
        let output = $crate::Unit::expect_transformed_with(source, &$config);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

/// Snapshot test for the plain diagnostics of a rejected unit.
#[macro_export]
macro_rules! shot_error {
    ($source:literal, @$snapshot:literal) => {{
        let source = indoc::indoc!($source);
        let output = $crate::Unit::expect_invalid(source);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
