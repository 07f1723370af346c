//! Text renderers for record differences.

use provtrack_core::diff::DependencyDelta;
use provtrack_core::model::{DataKey, Record};
use provtrack_core::{RecordComparison, RecordDifference};

use crate::pairing::render_pairing;

fn yn(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// One line per flag, grouped the way the fields relate
pub fn render_short(diff: &RecordDifference<'_>) -> String {
    let f = diff.flags();
    format!(
        "Record 1                : {}\n\
         Record 2                : {}\n\
         Executable differs      : {}\n\
         Code differs            : {}\n\
         \x20 Repository differs    : {}\n\
         \x20 Main file differs     : {}\n\
         \x20 Version differs       : {}\n\
         \x20 Non checked-in code   : {}\n\
         \x20 Dependencies differ   : {}\n\
         Launch mode differs     : {}\n\
         Input data differ       : {}\n\
         Script arguments differ : {}\n\
         Parameters differ       : {}\n\
         Data differ             : {}",
        diff.record_a.label,
        diff.record_b.label,
        yn(f.executable_differs),
        yn(f.code_differs),
        yn(f.repository_differs),
        yn(f.main_file_differs),
        yn(f.version_differs),
        yn(f.diff_differs),
        yn(f.dependencies_differ),
        yn(f.launch_mode_differs),
        yn(f.input_data_differ),
        yn(f.script_arguments_differ),
        yn(f.parameters_differ),
        yn(f.output_data_differ),
    )
}

fn executable_text(record: &Record) -> String {
    record
        .executable
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

fn repository_text(record: &Record) -> String {
    record
        .repository
        .as_ref()
        .map_or_else(|| "no repository".to_string(), ToString::to_string)
}

fn data_keys_text(keys: &[DataKey]) -> String {
    let items: Vec<String> = keys.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Indent continuation lines of a multi-line block
fn indented(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{}", indent))
}

/// Detailed description, one section per differing field
///
/// Returns an empty string when the records do not differ.
pub fn render_long(diff: &RecordDifference<'_>) -> String {
    let f = diff.flags();
    let report = &diff.report;
    let records = [diff.record_a, diff.record_b];
    let (label_a, label_b) = (&diff.record_a.label, &diff.record_b.label);
    let mut out = String::new();

    if f.executable_differs {
        out.push_str("Executable differences:\n");
        for record in records {
            out.push_str(&format!("  {}: {}\n", record.label, executable_text(record)));
        }
    }

    if f.code_differs {
        out.push_str("Code differences:\n");
        for record in records {
            out.push_str(&format!(
                "  {}: main file '{}' at version {} in {}\n",
                record.label,
                record.main_file,
                record.version,
                repository_text(record)
            ));
        }
        if f.diff_differs {
            for record in records {
                out.push_str(&format!("  {}:\n {}\n", record.label, record.diff));
            }
        }
    }

    if f.dependencies_differ {
        out.push_str("Dependency differences:\n");
        for (name, delta) in &report.dependency_differences {
            match delta {
                DependencyDelta::Changed { a, b } => {
                    out.push_str(&format!("  {}\n", name));
                    out.push_str(&format!("    A: version={}\n", a.version));
                    if !a.diff.is_empty() {
                        out.push_str(&format!("       {}\n", indented(&a.diff, "       ")));
                    }
                    out.push_str(&format!("    B: version={}\n", b.version));
                    if !b.diff.is_empty() {
                        out.push_str(&format!("       {}\n", indented(&b.diff, "       ")));
                    }
                }
                DependencyDelta::OnlyInA { .. } => out.push_str(&format!(
                    "  {} is a dependency of {} but not of {}\n",
                    name, label_a, label_b
                )),
                DependencyDelta::OnlyInB { .. } => out.push_str(&format!(
                    "  {} is a dependency of {} but not of {}\n",
                    name, label_b, label_a
                )),
            }
        }
    }

    if let Some(change) = &report.launch_mode_differences {
        out.push_str("Launch mode differences:\n");
        out.push_str(&format!("  {}: {}\n", label_a, change.a));
        out.push_str(&format!("  {}: {}\n", label_b, change.b));
    }

    if f.parameters_differ {
        out.push_str("Parameter differences:\n");
        for record in records {
            out.push_str(&format!("  {}:\n{}\n", record.label, record.parameters));
        }
    }

    if f.input_data_differ {
        out.push_str("Input data differences:\n");
        for record in records {
            out.push_str(&format!(
                "  {}: {}\n",
                record.label,
                data_keys_text(&record.input_data)
            ));
        }
    }

    if f.script_arguments_differ {
        out.push_str("Script argument differences:\n");
        for record in records {
            out.push_str(&format!("  {}: {}\n", record.label, record.script_arguments));
        }
    }

    let outputs = &report.output_data_differences;
    if !outputs.is_empty() {
        out.push_str("Output data differences:\n");
        for (label, keys) in [(label_a, &outputs.a_only), (label_b, &outputs.b_only)] {
            if keys.is_empty() {
                continue;
            }
            out.push_str(&format!("  Generated by {}:\n", label));
            for key in keys {
                out.push_str(&format!("    {}\n", key));
            }
        }
    }

    out
}

/// Short summary, detail sections and any file pairings of a comparison
pub fn render_comparison(comparison: &RecordComparison) -> String {
    let diff = comparison.difference();
    let mut out = render_short(&diff);
    out.push_str("\n\n");
    out.push_str(&render_long(&diff));

    for (title, pairing) in [
        ("Input file pairing", &comparison.input_data_pairs),
        ("Output file pairing", &comparison.output_data_pairs),
    ] {
        if let Some(pairing) = pairing {
            out.push_str(&format!("{}:\n", title));
            out.push_str(&render_pairing(pairing));
        }
    }
    out
}
