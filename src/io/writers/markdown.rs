use crate::core::{Category, ScoreReport};
use crate::interpretation::{Interpretation, Recommendations};
use crate::io::output::{percent, score, Advice, OutputWriter};
use chrono::Utc;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ScoreReport, advice: &Advice<'_>) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        for category in Category::ALL {
            self.write_category(report, category)?;
        }
        if let Some(interpretation) = advice.interpretation {
            self.write_interpretation(interpretation)?;
        }
        if let Some(recommendations) = advice.recommendations {
            self.write_recommendations(recommendations)?;
        }
        if let Some(narrative) = advice.narrative {
            writeln!(self.writer, "## Personalized Advice")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", narrative.trim())?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, reports: &[ScoreReport]) -> anyhow::Result<()> {
        self.write_header()?;
        writeln!(self.writer, "| # | Technical | Social | Overall | Level |")?;
        writeln!(self.writer, "|---|-----------|--------|---------|-------|")?;
        for (i, report) in reports.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                i + 1,
                percent(report.technical.percentage),
                percent(report.social.percentage),
                percent(report.overall.percentage),
                report.overall.level
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Cybersecurity Awareness Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Area | Score | Percentage |")?;
        writeln!(self.writer, "|------|-------|------------|")?;
        for category in Category::ALL {
            let c = report.category(category);
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                category.label(),
                score(c.average_score),
                percent(c.percentage)
            )?;
        }
        writeln!(
            self.writer,
            "| **Overall** | {} | {} |",
            score(report.overall.score),
            percent(report.overall.percentage)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**Awareness level:** {}", report.overall.level)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category(&mut self, report: &ScoreReport, category: Category) -> anyhow::Result<()> {
        let indicators = &report.category(category).indicators;
        if indicators.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## {} Indicators", category.label())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Indicator | Score | Percentage | Answered |")?;
        writeln!(self.writer, "|-----------|-------|------------|----------|")?;
        for indicator in indicators {
            let answered = if indicator.has_answers() {
                indicator.answered.to_string()
            } else {
                "none".to_string()
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                indicator.name,
                score(indicator.score),
                percent(indicator.percentage),
                answered
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_interpretation(&mut self, interpretation: &Interpretation) -> anyhow::Result<()> {
        writeln!(self.writer, "## Interpretation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", interpretation.summary)?;
        writeln!(self.writer)?;
        self.write_list("### Strengths", &interpretation.strengths)?;
        self.write_list("### Areas to Improve", &interpretation.weaknesses)
    }

    fn write_recommendations(&mut self, recs: &Recommendations) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        self.write_list("### General", &recs.general)?;
        self.write_list("### Technical", &recs.technical)?;
        self.write_list("### Social", &recs.social)?;

        if !recs.implementation_steps.is_empty() {
            writeln!(self.writer, "### Implementation Steps")?;
            writeln!(self.writer)?;
            for (i, step) in recs.implementation_steps.iter().enumerate() {
                writeln!(self.writer, "{}. {step}", i + 1)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_list(&mut self, heading: &str, items: &[String]) -> anyhow::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{heading}")?;
        writeln!(self.writer)?;
        for item in items {
            writeln!(self.writer, "- {item}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
