use crate::span::Span;

/// A diagnostic handed to the verification driver (error or warning).
///
/// The encoding core never renders anything itself; it produces these from
/// [`crate::error::EncodingError`] and configuration failures and leaves
/// presentation to the caller.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Diagnostic {
    pub fn error(message: String, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn warning(message: String, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            span,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) -> std::io::Result<()> {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        let kind = match self.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };

        let color = match self.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };

        let mut report = Report::build(kind, filename, self.span.start as usize)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, self.span.range()))
                    .with_message(&self.message)
                    .with_color(color),
            );

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report.finish().eprint((filename, Source::from(source)))
    }
}

/// Render a list of diagnostics, stopping at the first write error.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    filename: &str,
    source: &str,
) -> std::io::Result<()> {
    for diag in diagnostics {
        diag.render(filename, source)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let span = Span::new(0, 10, 15);
        let d = Diagnostic::error("no SMT sort for type".to_string(), span);
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "no SMT sort for type");
        assert_eq!(d.span.start, 10);
        assert_eq!(d.span.end, 15);
        assert!(d.notes.is_empty());
        assert!(d.help.is_none());
    }

    #[test]
    fn test_chained_builders() {
        let d = Diagnostic::warning("unknown key".to_string(), Span::new(0, 0, 5))
            .with_note("note 1".to_string())
            .with_help("help text".to_string())
            .with_note("note 2".to_string());
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.notes, vec!["note 1".to_string(), "note 2".to_string()]);
        assert_eq!(d.help.as_deref(), Some("help text"));
    }

    #[test]
    fn test_render_writes_report() {
        let source = "struct S { uint x; }\nS s;\n";
        let span = Span::new(0, 21, 25);
        let d = Diagnostic::error("type `struct S` has no SMT sort".to_string(), span)
            .with_note("while encoding `s`".to_string());
        assert!(d.render("test.sol", source).is_ok());
    }

    #[test]
    fn test_render_diagnostics_multiple() {
        let source = "uint a;\nuint a;\n";
        let diagnostics = vec![
            Diagnostic::error("symbol `a` is already owned".to_string(), Span::new(0, 5, 6)),
            Diagnostic::warning("unused a".to_string(), Span::new(0, 13, 14)),
        ];
        assert!(render_diagnostics(&diagnostics, "test.sol", source).is_ok());
    }
}
