use super::resolve_config;
use crate::cli::OutputFormat;
use crate::config::Rubric;
use crate::core::QuestionId;
use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::path::Path;

pub fn show_rubric(format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let settings = resolve_config(config)?;
    print!("{}", render_rubric(&settings.rubric, format)?);
    Ok(())
}

pub fn render_rubric(rubric: &Rubric, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(rubric)?),
        OutputFormat::Markdown => {
            let mut out = String::from("| Category | Key | Indicator | Questions |\n");
            out.push_str("|----------|-----|-----------|-----------|\n");
            for (category, def) in rubric.all() {
                out.push_str(&format!(
                    "| {} | `{}` | {} | {} |\n",
                    category.label(),
                    def.key,
                    def.name,
                    question_ranges(&def.questions)
                ));
            }
            out
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Category", "Key", "Indicator", "Questions"]);
            for (category, def) in rubric.all() {
                table.add_row(vec![
                    category.label().to_string(),
                    def.key.clone(),
                    def.name.clone(),
                    question_ranges(&def.questions),
                ]);
            }
            format!(
                "{table}\nAnswer scale {}..={}, {} questions\n",
                rubric.scale.min,
                rubric.scale.max,
                rubric.question_count()
            )
        }
    };
    Ok(rendered)
}

/// Pure function: compress question ids into ranges, e.g. `q3-q8, q10`.
fn question_ranges(questions: &[QuestionId]) -> String {
    let mut sorted = questions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges: Vec<(QuestionId, QuestionId)> = Vec::new();
    for q in sorted {
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == q => *end = q,
            _ => ranges.push((q, q)),
        }
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                format!("q{start}")
            } else {
                format!("q{start}-q{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ranges() {
        assert_eq!(question_ranges(&[3, 4, 5, 6, 7, 8]), "q3-q8");
        assert_eq!(question_ranges(&[10, 1, 2, 12]), "q1-q2, q10, q12");
        assert_eq!(question_ranges(&[]), "");
    }

    #[test]
    fn test_markdown_catalog() {
        let out = render_rubric(&Rubric::standard(), OutputFormat::Markdown).unwrap();
        assert!(out.contains("| Technical | `passwords` | Passwords | q3-q8 |"));
        assert!(out.contains("| Social | `social_law_and_regulation` | Social Cybersecurity Law and Regulation | q42-q43 |"));
        assert_eq!(out.lines().count(), 13);
    }

    #[test]
    fn test_json_catalog_round_trips() {
        let out = render_rubric(&Rubric::standard(), OutputFormat::Json).unwrap();
        let parsed: Rubric = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, Rubric::standard());
    }

    #[test]
    fn test_terminal_catalog_footer() {
        let out = render_rubric(&Rubric::standard(), OutputFormat::Terminal).unwrap();
        assert!(out.contains("Answer scale 1..=4, 43 questions"));
        assert!(out.contains("internet_and_wifi"));
    }
}
