use crate::core::ScoreReport;
use crate::interpretation::{Interpretation, Recommendations};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Optional sections rendered after the scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct Advice<'a> {
    pub interpretation: Option<&'a Interpretation>,
    pub recommendations: Option<&'a Recommendations>,
    pub narrative: Option<&'a str>,
}

impl<'a> Advice<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(interpretation: &'a Interpretation, recommendations: &'a Recommendations) -> Self {
        Self {
            interpretation: Some(interpretation),
            recommendations: Some(recommendations),
            narrative: None,
        }
    }

    pub fn with_narrative(self, narrative: &'a str) -> Self {
        Self {
            narrative: Some(narrative),
            ..self
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport, advice: &Advice<'_>) -> anyhow::Result<()>;

    /// Render several submissions; by default one full report after another.
    fn write_batch(&mut self, reports: &[ScoreReport]) -> anyhow::Result<()> {
        reports
            .iter()
            .try_for_each(|report| self.write_report(report, &Advice::none()))
    }
}

pub fn create_writer<'w>(format: OutputFormat, out: Box<dyn Write + 'w>) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}

/// Percentage for display, one decimal place.
pub(crate) fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub(crate) fn score(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounding() {
        assert_eq!(percent(66.666_666), "66.7%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(score(2.666_666), "2.67");
    }

    #[test]
    fn test_create_writer_each_format() {
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Terminal] {
            let mut buf = Vec::new();
            {
                let mut writer = create_writer(format, Box::new(&mut buf));
                writer
                    .write_report(&ScoreReport::fallback(), &Advice::none())
                    .unwrap();
            }
            assert!(!buf.is_empty(), "{format:?}");
        }
    }

    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_flush_errors_are_reported() {
        for format in [OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Terminal] {
            let mut writer = create_writer(format, Box::new(FailingFlush));
            assert!(
                writer
                    .write_report(&ScoreReport::fallback(), &Advice::none())
                    .is_err(),
                "{format:?}"
            );
            assert!(writer.write_batch(&[ScoreReport::fallback()]).is_err(), "{format:?}");
        }
    }
}
