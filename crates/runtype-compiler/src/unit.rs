//! High-level facade over one compilation unit.

use tracing::debug;

use crate::ast::Program;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::emit::ProgramPrinter;
use crate::parser::{self, DEFAULT_RECURSION_FUEL};
use crate::transform::{Transformer, scan_directive};
use crate::{Error, Result};

#[cfg(test)]
mod unit_tests;

/// Source text plus its (possibly transformed) program.
///
/// Parse errors are kept rather than returned, so that a unit without the
/// directive can pass through untouched even when the parser does not
/// understand all of it. They fail the unit only once the directive is found.
///
/// ```ignore
/// let out = Unit::parse(src)?.transform(&Config::new())?.print();
/// ```
#[derive(Debug, Clone)]
pub struct Unit<'src> {
    source: &'src str,
    program: Program,
    diagnostics: Diagnostics,
    rewritten: bool,
}

impl<'src> Unit<'src> {
    pub fn parse(source: &'src str) -> Result<Self> {
        Self::parse_with_recursion_fuel(source, Some(DEFAULT_RECURSION_FUEL))
    }

    /// Only exhausted recursion fuel is an error here.
    pub fn parse_with_recursion_fuel(source: &'src str, limit: Option<u32>) -> Result<Self> {
        let result = parser::parse_with_recursion_fuel(source, limit)?;
        Ok(Self {
            source,
            program: result.program,
            diagnostics: result.diagnostics,
            rewritten: false,
        })
    }

    /// Run the transform. A compile error is reported as a single diagnostic.
    pub fn transform(self, config: &Config) -> Result<Self> {
        let Self {
            source,
            program,
            diagnostics,
            ..
        } = self;

        if !scan_directive(&program.comments, &config.directive).active {
            debug!(
                parse_errors = diagnostics.error_count(),
                "no directive, unit passed through"
            );
            return Ok(Self {
                source,
                program,
                diagnostics,
                rewritten: false,
            });
        }
        if diagnostics.has_errors() {
            return Err(Error::ParseError(diagnostics));
        }

        match Transformer::new(config).run(program) {
            Ok(program) => Ok(Self {
                source,
                program,
                diagnostics,
                rewritten: true,
            }),
            Err(err) => {
                let mut diagnostics = Diagnostics::new();
                err.report(&mut diagnostics);
                Err(Error::TransformError(diagnostics))
            }
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// The rewritten program, or the source as written when the unit was
    /// not rewritten.
    pub fn print(&self) -> String {
        if !self.rewritten {
            return self.source.to_string();
        }
        ProgramPrinter::new(&self.program, self.source).dump()
    }
}
