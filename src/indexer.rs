use crate::error::IndexError;
use crate::patterns::{paper_digits, question_digits};
use crate::types::{EntryKind, Paper, QuestionNumber, QuestionRecord, Year};
use log::{debug, info, trace};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug)]
pub struct IndexOutcome {
    pub records: Vec<QuestionRecord>,
    pub bytes_written: u64,
}

/// Prints where we are and whether `base` is there, then builds and writes
/// the index. Nothing is written unless the whole tree was read cleanly.
pub fn generate(base: &Path, output: &Path) -> Result<IndexOutcome, IndexError> {
    match std::env::current_dir() {
        Ok(dir) => println!("Current dir: {}", dir.display()),
        Err(e) => println!("Current dir: <unavailable: {e}>"),
    }
    println!("Base dir {} exists? {}", base.display(), base.exists());

    let records = build_index(base)?;
    let bytes_written = write_index(&records, output)?;
    Ok(IndexOutcome {
        records,
        bytes_written,
    })
}

/// Collects every `<base>/<year>/<S folder>/<Q image>` under `base`, sorted
/// by year, paper and question. Equal keys keep their discovery order.
pub fn build_index(base: &Path) -> Result<Vec<QuestionRecord>, IndexError> {
    if base.exists() && !base.is_dir() {
        return Err(IndexError::NotADirectory(base.to_path_buf()));
    }

    let mut records = Vec::new();

    for year_entry in list_dir(base)? {
        if EntryKind::of_walk_entry(&year_entry) != EntryKind::Folder {
            debug!("Skipping non-folder {}", year_entry.path().display());
            continue;
        }
        // Parsed on the first question found, so a non-year folder with
        // nothing to index is ignored.
        let mut parsed_year: Option<Year> = None;

        for step_entry in list_dir(year_entry.path())? {
            if EntryKind::of_walk_entry(&step_entry) != EntryKind::Folder {
                debug!("Skipping non-folder {}", step_entry.path().display());
                continue;
            }
            let step_name = step_entry.file_name().to_string_lossy();
            let Some(digits) = paper_digits(&step_name) else {
                debug!("Skipping folder without a paper number: {}", step_entry.path().display());
                continue;
            };
            let paper = Paper(parse_number(digits, step_entry.path())?);

            for file_entry in list_dir(step_entry.path())? {
                let file_name = file_entry.file_name().to_string_lossy();
                let Some(digits) = question_digits(&file_name) else {
                    trace!("Skipping {}", file_entry.path().display());
                    continue;
                };
                let question = QuestionNumber(parse_number(digits, file_entry.path())?);
                let year = match parsed_year {
                    Some(year) => year,
                    None => *parsed_year.insert(parse_year(&year_entry)?),
                };

                records.push(QuestionRecord {
                    year,
                    paper,
                    question,
                    file: file_entry.path().to_string_lossy().to_string(),
                });
            }
        }
    }

    records.sort_by_key(QuestionRecord::sort_key);
    info!("Indexed {} questions under {}", records.len(), base.display());
    Ok(records)
}

/// Writes the index as a pretty-printed JSON array, replacing `output`.
/// Returns the number of bytes written.
pub fn write_index(records: &[QuestionRecord], output: &Path) -> Result<u64, IndexError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(output, &json).map_err(|source| IndexError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(json.len() as u64)
}

fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, IndexError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| IndexError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })
}

fn parse_year(entry: &DirEntry) -> Result<Year, IndexError> {
    let name = entry
        .file_name()
        .to_str()
        .ok_or_else(|| IndexError::NonUtf8Year(entry.path().to_path_buf()))?;
    name.parse()
        .map(Year)
        .map_err(|source| IndexError::InvalidYear {
            path: entry.path().to_path_buf(),
            source,
        })
}

fn parse_number(digits: &str, path: &Path) -> Result<u32, IndexError> {
    digits.parse().map_err(|source| IndexError::NumberOutOfRange {
        path: path.to_path_buf(),
        source,
    })
}
