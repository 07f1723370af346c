//! Record listings: label lists, a field-per-line long form, a fixed-width
//! table and a `;`-separated CSV table.

use csv::WriterBuilder;
use provtrack_core::model::{DataKey, Record};
use provtrack_core::ProvenanceError;

use crate::duration::human_readable_duration;

/// Default width of the long form, also its separator line
pub const TEXT_WIDTH: usize = 80;
const LEFT_COLUMN_WIDTH: usize = 17;
const MAX_COLUMN_WIDTH: usize = 20;
const CSV_DELIMITER: u8 = b';';

/// A record field shown in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Label,
    Timestamp,
    Reason,
    Outcome,
    Duration,
    Repository,
    MainFile,
    Version,
    ScriptArguments,
    Executable,
    Parameters,
    InputData,
    LaunchMode,
    OutputData,
    User,
    Tags,
    Repeats,
}

impl RecordField {
    /// Listing order
    pub const ALL: [RecordField; 17] = [
        RecordField::Label,
        RecordField::Timestamp,
        RecordField::Reason,
        RecordField::Outcome,
        RecordField::Duration,
        RecordField::Repository,
        RecordField::MainFile,
        RecordField::Version,
        RecordField::ScriptArguments,
        RecordField::Executable,
        RecordField::Parameters,
        RecordField::InputData,
        RecordField::LaunchMode,
        RecordField::OutputData,
        RecordField::User,
        RecordField::Tags,
        RecordField::Repeats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordField::Label => "label",
            RecordField::Timestamp => "timestamp",
            RecordField::Reason => "reason",
            RecordField::Outcome => "outcome",
            RecordField::Duration => "duration",
            RecordField::Repository => "repository",
            RecordField::MainFile => "main_file",
            RecordField::Version => "version",
            RecordField::ScriptArguments => "script_arguments",
            RecordField::Executable => "executable",
            RecordField::Parameters => "parameters",
            RecordField::InputData => "input_data",
            RecordField::LaunchMode => "launch_mode",
            RecordField::OutputData => "output_data",
            RecordField::User => "user",
            RecordField::Tags => "tags",
            RecordField::Repeats => "repeats",
        }
    }

    /// Column heading: `main_file` becomes `Main_File`
    pub fn title(self) -> String {
        let mut out = String::new();
        let mut word_start = true;
        for c in self.name().chars() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            word_start = !c.is_alphabetic();
        }
        out
    }

    /// Field value, possibly spanning several lines
    pub fn value(self, record: &Record) -> String {
        match self {
            RecordField::Label => record.label.clone(),
            RecordField::Timestamp => record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            RecordField::Reason => record.reason.clone(),
            RecordField::Outcome => record.outcome.clone(),
            RecordField::Duration => record
                .duration
                .map(human_readable_duration)
                .unwrap_or_default(),
            RecordField::Repository => record
                .repository
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            RecordField::MainFile => record.main_file.clone(),
            // a starred version has uncommitted changes
            RecordField::Version if record.has_uncommitted_changes() => format!("{}*", record.version),
            RecordField::Version => record.version.clone(),
            RecordField::ScriptArguments => record.script_arguments.clone(),
            RecordField::Executable => record
                .executable
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            RecordField::Parameters => record.parameters.to_string(),
            RecordField::InputData => paths(&record.input_data),
            RecordField::LaunchMode => record.launch_mode.to_string(),
            RecordField::OutputData => paths(&record.output_data),
            RecordField::User => record.user.clone(),
            RecordField::Tags => record
                .tags
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            RecordField::Repeats => record.repeats.clone().unwrap_or_default(),
        }
    }

    /// Field value on one line, for table cells
    pub fn inline_value(self, record: &Record) -> String {
        self.value(record).lines().collect::<Vec<_>>().join(", ")
    }
}

fn paths(keys: &[DataKey]) -> String {
    keys.iter()
        .map(|key| key.path.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Greedy word wrap to `width` characters.
///
/// Words longer than `width` are broken. A blank line wraps to nothing.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current: Vec<char> = Vec::new();

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let room = if current.is_empty() {
                width
            } else {
                width.saturating_sub(current.len() + 1)
            };
            if word.len() <= room {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.append(&mut word);
                break;
            }
            if word.len() <= width || room == 0 {
                lines.push(current.drain(..).collect());
                continue;
            }
            // longer than a whole line: fill what is left of this one
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(word.drain(..room));
            lines.push(current.drain(..).collect());
        }
    }
    if !current.is_empty() {
        lines.push(current.into_iter().collect());
    }
    lines
}

/// Record labels, one per line
pub fn render_labels(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| record.label.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output file paths of every record, one per line
pub fn render_output_files(records: &[Record]) -> String {
    records
        .iter()
        .flat_map(|record| record.output_data.iter())
        .map(|key| key.path.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every field of every record, one `Title : value` line per field.
///
/// Each record starts with a line of `text_width` dashes. Values longer than
/// `text_width` wrap onto continuation lines with a blank title.
pub fn render_records_long(records: &[Record], text_width: usize) -> String {
    let mut out = String::new();
    let blank = " ".repeat(LEFT_COLUMN_WIDTH);
    for record in records {
        out.push_str(&"-".repeat(text_width));
        out.push('\n');
        for field in RecordField::ALL {
            let mut lines: Vec<String> = field
                .value(record)
                .lines()
                .flat_map(|line| wrap(line, text_width))
                .collect();
            if lines.is_empty() {
                lines.push(String::new());
            }
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    out.push_str(&format!(
                        "{:<width$}: {}\n",
                        field.title(),
                        line,
                        width = LEFT_COLUMN_WIDTH
                    ));
                } else {
                    out.push_str(&format!("{}: {}\n", blank, line));
                }
            }
        }
    }
    out
}

fn truncated(text: &str) -> String {
    text.chars().take(MAX_COLUMN_WIDTH).collect()
}

/// One `|`-framed row per record under a header row.
///
/// Columns are as wide as their widest cell, capped at 20 characters;
/// longer cells are cut.
pub fn render_table(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            RecordField::ALL
                .iter()
                .map(|field| field.inline_value(record))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = RecordField::ALL
        .iter()
        .enumerate()
        .map(|(column, field)| {
            let widest = rows
                .iter()
                .map(|row| row[column].chars().count())
                .fold(field.name().len(), usize::max);
            widest.min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let format_row = |cells: Vec<String>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", truncated(cell), width = *width))
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    let mut out = format_row(RecordField::ALL.iter().map(|f| f.title()).collect());
    for row in rows {
        out.push_str(&format_row(row));
    }
    out
}

/// Record labels separated by `;`
pub fn render_csv_labels(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| record.label.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

fn wrap_csv(err: csv::Error) -> ProvenanceError {
    ProvenanceError::Serialization {
        message: format!("csv: {}", err),
    }
}

/// A header row and one row per record, `;`-separated.
///
/// Cells are quoted when they contain the delimiter, a quote or a newline.
///
/// # Errors
///
/// Returns `Serialization` if the CSV writer fails.
pub fn render_csv(records: &[Record]) -> provtrack_core::Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .from_writer(Vec::new());

    writer
        .write_record(RecordField::ALL.iter().map(|f| f.title()))
        .map_err(wrap_csv)?;
    for record in records {
        writer
            .write_record(RecordField::ALL.iter().map(|f| f.inline_value(record)))
            .map_err(wrap_csv)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ProvenanceError::Serialization {
            message: format!("csv: {}", err.error()),
        })?;
    String::from_utf8(bytes).map_err(|err| ProvenanceError::Serialization {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_capitalizes_each_word() {
        assert_eq!(RecordField::MainFile.title(), "Main_File");
        assert_eq!(RecordField::Label.title(), "Label");
        assert_eq!(RecordField::ScriptArguments.title(), "Script_Arguments");
    }

    #[test]
    fn test_wrap_fills_lines_greedily() {
        assert_eq!(wrap("aa bb cc dd", 5), vec!["aa bb", "cc dd"]);
        assert_eq!(wrap("short", 80), vec!["short"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("ab cdefgh", 4), vec!["ab c", "defg", "h"]);
    }

    #[test]
    fn test_version_is_starred_when_diff_present() {
        let mut record = Record::new("A");
        record.version = "6f2c1a9".to_string();
        assert_eq!(RecordField::Version.value(&record), "6f2c1a9");
        record.diff = "+x = 1".to_string();
        assert_eq!(RecordField::Version.value(&record), "6f2c1a9*");
    }
}
