//! Diagnostic rendering for build errors.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::{BuildError, BuildErrorKind};

impl BuildError {
    /// Render this error with ariadne.
    ///
    /// `source` must be the text whose entries were built, so that the span
    /// lines up.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let path = self.path_display();

        match &self.kind {
            BuildErrorKind::ConflictingTypes { existing, incoming } => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message(format!("conflicting values for `{path}`"))
                    .with_label(
                        Label::new((filename, range))
                            .with_message(format!(
                                "`{path}` is already a {existing}, this adds a {incoming}"
                            ))
                            .with_color(Color::Red),
                    )
                    .with_help(
                        "repeated keys combine only as strings into a list, or as objects into one merged object",
                    )
            }

            BuildErrorKind::NestedListItem => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message(format!("nested entries inside list `{path}`"))
                    .with_label(
                        Label::new((filename, range))
                            .with_message("this `= item` holds `key = value` lines")
                            .with_color(Color::Red),
                    )
                    .with_help("list items are plain strings; give the item a key to nest it")
            }

            BuildErrorKind::DepthLimitExceeded { limit } => {
                Report::build(ReportKind::Error, (filename, range.clone()))
                    .with_message(format!("nesting too deep at `{path}`"))
                    .with_label(
                        Label::new((filename, range))
                            .with_message(format!("nests more than {limit} levels"))
                            .with_color(Color::Red),
                    )
                    .with_help("raise BuildOptions::max_depth if this nesting is intended")
            }
        }
    }
}
