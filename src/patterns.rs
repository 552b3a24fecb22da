//! Name patterns shared by the renamer and the indexer.

use regex::Regex;
use std::sync::LazyLock;

static QUESTION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^q([0-9]+)(.*)$").expect("valid question file pattern"));

static STEP_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^step([0-9]+)$").expect("valid step folder pattern"));

static PAPER_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ss]([0-9]+)").expect("valid paper folder pattern"));

// Only the leading letter is case-insensitive; `.PNG` does not match.
static QUESTION_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Qq]([0-9]+)\.png$").expect("valid question image pattern"));

/// New name for a question file, or `None` when the file should be left alone.
///
/// `q12.png` becomes `Q12.png`. Anything after the digits is kept as is.
/// Names that already start with an uppercase `Q` are never returned, which
/// keeps repeated runs from touching normalized files.
#[must_use]
pub fn normalized_file_name(name: &str) -> Option<String> {
    let caps = QUESTION_FILE.captures(name)?;
    if !name.starts_with('q') {
        return None;
    }
    Some(format!("Q{}{}", &caps[1], &caps[2]))
}

/// New name for a step folder: `step3`, `STEP3` or `Step3` all become `S3`.
#[must_use]
pub fn normalized_folder_name(name: &str) -> Option<String> {
    let caps = STEP_FOLDER.captures(name)?;
    Some(format!("S{}", &caps[1]))
}

/// Digits of the first `S<digits>` found anywhere in a folder name.
#[must_use]
pub fn paper_digits(name: &str) -> Option<&str> {
    PAPER_FOLDER
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Digits of a trailing `Q<digits>.png` in a file name.
#[must_use]
pub fn question_digits(name: &str) -> Option<&str> {
    QUESTION_IMAGE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_file_name_keeps_suffix() {
        assert_eq!(normalized_file_name("q5.png"), Some("Q5.png".to_string()));
        assert_eq!(
            normalized_file_name("q12-1.jpg"),
            Some("Q12-1.jpg".to_string())
        );
        assert_eq!(normalized_file_name("q007"), Some("Q007".to_string()));
        assert_eq!(
            normalized_file_name("q3 copy (2).PNG"),
            Some("Q3 copy (2).PNG".to_string())
        );
    }

    #[test]
    fn test_normalized_file_name_skips_uppercase_and_non_matches() {
        // Already normalized
        assert_eq!(normalized_file_name("Q5.png"), None);
        assert_eq!(normalized_file_name("Q5x.PNG"), None);
        // No digits after the letter
        assert_eq!(normalized_file_name("qA5.png"), None);
        assert_eq!(normalized_file_name("question1.png"), None);
        // Must start with the letter
        assert_eq!(normalized_file_name("aq5.png"), None);
        assert_eq!(normalized_file_name(""), None);
    }

    #[test]
    fn test_normalized_folder_name() {
        assert_eq!(normalized_folder_name("step2"), Some("S2".to_string()));
        assert_eq!(normalized_folder_name("STEP10"), Some("S10".to_string()));
        assert_eq!(normalized_folder_name("Step03"), Some("S03".to_string()));

        assert_eq!(normalized_folder_name("step"), None);
        assert_eq!(normalized_folder_name("step2a"), None);
        assert_eq!(normalized_folder_name("my step2"), None);
        assert_eq!(normalized_folder_name("S2"), None);
    }

    #[test]
    fn test_paper_digits_found_anywhere() {
        assert_eq!(paper_digits("S1"), Some("1"));
        assert_eq!(paper_digits("s12"), Some("12"));
        assert_eq!(paper_digits("Paper S3 (mock)"), Some("3"));
        // First match wins
        assert_eq!(paper_digits("S2 S9"), Some("2"));

        assert_eq!(paper_digits("step3"), None);
        assert_eq!(paper_digits("extras"), None);
    }

    #[test]
    fn test_question_digits_requires_lowercase_png_suffix() {
        assert_eq!(question_digits("Q5.png"), Some("5"));
        assert_eq!(question_digits("q14.png"), Some("14"));
        assert_eq!(question_digits("scan_Q3.png"), Some("3"));

        assert_eq!(question_digits("Q5.PNG"), None);
        assert_eq!(question_digits("Q5.jpg"), None);
        assert_eq!(question_digits("Q5.png.bak"), None);
        assert_eq!(question_digits("notes.txt"), None);
        assert_eq!(question_digits("Q.png"), None);
    }
}
