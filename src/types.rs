use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Exam year, taken from a top-level folder name such as `2020`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(pub u32);

/// Paper number, taken from the digits of an `S<digits>` folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Paper(pub u32);

/// Question number, taken from the digits of a `Q<digits>.png` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionNumber(pub u32);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of `questions.json`. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub year: Year,
    pub paper: Paper,
    pub question: QuestionNumber,
    pub file: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn sort_key(&self) -> (Year, Paper, QuestionNumber) {
        (self.year, self.paper, self.question)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    /// Symlinks are classified by what they point at; a dangling link counts as a file.
    #[must_use]
    pub fn of(path: &Path, is_dir: bool, is_symlink: bool) -> Self {
        if is_dir || (is_symlink && path.is_dir()) {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }

    #[must_use]
    pub fn of_walk_entry(entry: &walkdir::DirEntry) -> Self {
        let ft = entry.file_type();
        Self::of(entry.path(), ft.is_dir(), ft.is_symlink())
    }
}
