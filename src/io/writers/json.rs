use crate::core::ScoreReport;
use crate::interpretation::{Interpretation, Recommendations};
use crate::io::output::{Advice, OutputWriter};
use serde::Serialize;
use std::io::Write;

/// Report with its optional advice sections flattened into one object.
#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    report: &'a ScoreReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    interpretation: Option<&'a Interpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<&'a Recommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    narrative: Option<&'a str>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport, advice: &Advice<'_>) -> anyhow::Result<()> {
        let document = Document {
            report,
            interpretation: advice.interpretation,
            recommendations: advice.recommendations,
            narrative: advice.narrative,
        };
        let json = serde_json::to_string_pretty(&document)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_batch(&mut self, reports: &[ScoreReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterpretationThresholds;
    use crate::evaluate;
    use crate::interpretation::{interpret, recommend};
    use serde_json::Value;

    fn render(report: &ScoreReport, advice: &Advice<'_>) -> Value {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(report, advice).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_report_keys_stay_top_level() {
        let report = evaluate([("q1", "4"), ("q2", "4")]);
        let value = render(&report, &Advice::none());

        assert_eq!(value["overall"]["level"], "Poor");
        assert_eq!(
            value["technical"]["indicators"]["Installation Terms and Conditions"]["percentage"],
            100.0
        );
        assert!(value.get("interpretation").is_none());
        assert!(value.get("narrative").is_none());
    }

    #[test]
    fn test_advice_sections_included() {
        let report = evaluate([("q1", "4")]);
        let thresholds = InterpretationThresholds::default();
        let interpretation = interpret(&report, &thresholds);
        let recommendations = recommend(&report, &thresholds);
        let advice = Advice::new(&interpretation, &recommendations).with_narrative("Use a manager");

        let value = render(&report, &advice);
        assert!(value["interpretation"]["summary"].is_string());
        assert_eq!(value["recommendations"]["implementation_steps"].as_array().unwrap().len(), 5);
        assert_eq!(value["narrative"], "Use a manager");
    }

    #[test]
    fn test_batch_is_one_array() {
        let reports = vec![ScoreReport::fallback(), evaluate([("q1", "4")])];
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_batch(&reports).unwrap();
        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["overall"]["level"], "Error");
    }
}
