use crate::core::{AwarenessLevel, Category, ScoreReport};
use crate::interpretation::{Interpretation, Recommendations};
use crate::io::output::{percent, score, Advice, OutputWriter};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
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
            writeln!(self.writer, "{}", "PERSONALIZED ADVICE".bold())?;
            writeln!(self.writer, "{}", narrative.trim())?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, reports: &[ScoreReport]) -> anyhow::Result<()> {
        self.write_header()?;
        let mut table = new_table(&["#", "Technical", "Social", "Overall", "Level"]);
        for (i, report) in reports.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                percent(report.technical.percentage),
                percent(report.social.percentage),
                percent(report.overall.percentage),
                report.overall.level.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer, "{}", "   CYBERSECURITY AWARENESS REPORT".bold().blue())?;
        writeln!(self.writer, "{}", RULE.blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Awareness level: {} ({})",
            colored_level(report.overall.level),
            percent(report.overall.percentage)
        )?;
        for category in Category::ALL {
            let c = report.category(category);
            writeln!(
                self.writer,
                "  {:<10} {} ({})",
                category.label(),
                score(c.average_score),
                percent(c.percentage)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_category(&mut self, report: &ScoreReport, category: Category) -> anyhow::Result<()> {
        let indicators = &report.category(category).indicators;
        if indicators.is_empty() {
            return Ok(());
        }

        let title = format!("{} INDICATORS", category.label().to_uppercase());
        writeln!(self.writer, "{}", title.bold())?;
        let mut table = new_table(&["Indicator", "Score", "Percentage", "Answered"]);
        for indicator in indicators {
            table.add_row(vec![
                indicator.name.clone(),
                score(indicator.score),
                percent(indicator.percentage),
                indicator.answered.to_string(),
            ]);
        }
        for column in 1..4 {
            if let Some(col) = table.column_mut(column) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_interpretation(&mut self, interpretation: &Interpretation) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "INTERPRETATION".bold())?;
        writeln!(self.writer, "{}", interpretation.summary)?;
        for strength in &interpretation.strengths {
            writeln!(self.writer, "  {} {strength}", "+".green())?;
        }
        for weakness in &interpretation.weaknesses {
            writeln!(self.writer, "  {} {weakness}", "-".red())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, recs: &Recommendations) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "RECOMMENDATIONS".bold())?;
        let sections = [
            ("General", &recs.general),
            ("Technical", &recs.technical),
            ("Social", &recs.social),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            writeln!(self.writer, "{}", title.cyan())?;
            for item in items {
                writeln!(self.writer, "  • {item}")?;
            }
        }
        if !recs.implementation_steps.is_empty() {
            writeln!(self.writer, "{}", "Next steps".cyan())?;
            for (i, step) in recs.implementation_steps.iter().enumerate() {
                writeln!(self.writer, "  {}. {step}", i + 1)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

fn colored_level(level: AwarenessLevel) -> ColoredString {
    let label = level.label();
    match level {
        AwarenessLevel::VeryGood => label.green().bold(),
        AwarenessLevel::Good => label.green(),
        AwarenessLevel::NeedsImprovement => label.yellow(),
        AwarenessLevel::Poor => label.red(),
        AwarenessLevel::Error => label.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpretationThresholds;
    use crate::evaluate;
    use crate::interpretation::{interpret, recommend};

    fn render(report: &ScoreReport, advice: &Advice<'_>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf).write_report(report, advice).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_terminal_report_lists_indicators() {
        let report = evaluate([("q9", "2"), ("q10", "3")]);
        let out = render(&report, &Advice::none());
        assert!(out.contains("CYBERSECURITY AWARENESS REPORT"));
        assert!(out.contains("Awareness level: Poor"));
        assert!(out.contains("TECHNICAL INDICATORS"));
        assert!(out.contains("Internet and Wi-Fi"));
        assert!(out.contains("62.5%"));
    }

    #[test]
    fn test_terminal_advice() {
        let report = evaluate([("q1", "4"), ("q2", "4")]);
        let thresholds = InterpretationThresholds::default();
        let interpretation = interpret(&report, &thresholds);
        let recommendations = recommend(&report, &thresholds);
        let out = render(&report, &Advice::new(&interpretation, &recommendations));
        assert!(out.contains("+ Good understanding of Installation Terms and Conditions"));
        assert!(out.contains("Next steps"));
    }

    #[test]
    fn test_terminal_batch() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf)
            .write_batch(&[ScoreReport::fallback()])
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Error"));
    }
}
