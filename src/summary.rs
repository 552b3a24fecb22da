use crate::types::{Paper, QuestionRecord, Year};
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, PartialEq)]
pub struct YearRow {
    pub year: Year,
    pub papers: usize,
    pub questions: usize,
}

/// Per-year paper and question counts, in year order.
#[must_use]
pub fn year_rows(records: &[QuestionRecord]) -> Vec<YearRow> {
    let mut by_year: BTreeMap<Year, (BTreeSet<Paper>, usize)> = BTreeMap::new();
    for r in records {
        let (papers, questions) = by_year.entry(r.year).or_default();
        papers.insert(r.paper);
        *questions += 1;
    }

    by_year
        .into_iter()
        .map(|(year, (papers, questions))| YearRow {
            year,
            papers: papers.len(),
            questions,
        })
        .collect()
}

pub fn print_index_summary(records: &[QuestionRecord], output: &str, bytes_written: u64) {
    println!(
        "{} {} questions to {} ({})",
        "✅ Wrote".green(),
        records.len().to_string().green(),
        output,
        human_bytes::human_bytes(bytes_written as f64)
    );

    let rows = year_rows(records);
    if rows.is_empty() {
        println!("{}", "No question images found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Year", "Papers", "Questions"]);

    for row in &rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(row.papers),
            Cell::new(row.questions).fg(Color::Green),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(rows.iter().map(|r| r.papers).sum::<usize>()).add_attribute(Attribute::Bold),
        Cell::new(records.len()).add_attribute(Attribute::Bold),
    ]);

    println!("\n{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionNumber;

    fn make_record(year: u32, paper: u32, question: u32) -> QuestionRecord {
        QuestionRecord {
            year: Year(year),
            paper: Paper(paper),
            question: QuestionNumber(question),
            file: format!("images/questions/{year}/S{paper}/Q{question}.png"),
        }
    }

    #[test]
    fn test_year_rows_counts_distinct_papers() {
        let records = vec![
            make_record(2019, 1, 1),
            make_record(2019, 1, 2),
            make_record(2019, 2, 1),
            make_record(2020, 1, 1),
        ];

        assert_eq!(
            year_rows(&records),
            vec![
                YearRow {
                    year: Year(2019),
                    papers: 2,
                    questions: 3,
                },
                YearRow {
                    year: Year(2020),
                    papers: 1,
                    questions: 1,
                },
            ]
        );
    }

    #[test]
    fn test_year_rows_empty() {
        assert!(year_rows(&[]).is_empty());
    }
}
