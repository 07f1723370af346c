use provtrack_core::model::{DataKey, Executable, ParameterSet, Record, Repository};
use provtrack_report::{
    render_csv, render_csv_labels, render_labels, render_output_files, render_records_long,
    render_table, RecordField,
};

fn record(label: &str) -> Record {
    let mut record = Record::new(label);
    record.timestamp = "2026-01-02T03:04:05Z".parse().unwrap();
    record.reason = "test the baseline".to_string();
    record.duration = Some(3725.5);
    record.repository = Some(Repository::new("https://example.org/model.git", "git"));
    record.main_file = "run_model.py".to_string();
    record.version = "6f2c1a9".to_string();
    record.script_arguments = "default.param".to_string();
    record.executable = Some(Executable::new("python", Some("3.11.4")));
    record.parameters = ParameterSet::from_json(serde_json::json!({
        "tau_m": 20.0,
        "network": {"n_exc": 800}
    }))
    .unwrap();
    record.input_data = vec![DataKey::new("inputs/stimulus.npy", "stim")];
    record.output_data = vec![
        DataKey::new("results/spikes.csv", "s1"),
        DataKey::new("results/vm.csv", "v1"),
    ];
    record.user = "alice".to_string();
    record.tags = ["v1", "baseline"].iter().map(|t| t.to_string()).collect();
    record
}

#[test]
fn test_labels_one_per_line() {
    let records = vec![record("run-1"), record("run-2")];

    assert_eq!(render_labels(&records), "run-1\nrun-2");
    assert_eq!(render_csv_labels(&records), "run-1;run-2");
    assert_eq!(render_labels(&[]), "");
}

#[test]
fn test_output_files_of_all_records() {
    let mut second = record("run-2");
    second.output_data = vec![DataKey::new("results/rates.csv", "r1")];

    let text = render_output_files(&[record("run-1"), second]);

    assert_eq!(
        text,
        "results/spikes.csv\nresults/vm.csv\nresults/rates.csv"
    );
}

#[test]
fn test_long_form_lists_every_field() {
    let text = render_records_long(&[record("run-1")], 80);

    let expected = [
        "-".repeat(80).as_str(),
        "Label            : run-1",
        "Timestamp        : 2026-01-02 03:04:05",
        "Reason           : test the baseline",
        "Outcome          : ",
        "Duration         : 1h 2m 5.50s",
        "Repository       : https://example.org/model.git",
        "Main_File        : run_model.py",
        "Version          : 6f2c1a9",
        "Script_Arguments : default.param",
        "Executable       : python (version: 3.11.4)",
        "Parameters       : network.n_exc = 800",
        "                 : tau_m = 20.0",
        "Input_Data       : inputs/stimulus.npy",
        "Launch_Mode      : serial",
        "Output_Data      : results/spikes.csv, results/vm.csv",
        "User             : alice",
        "Tags             : baseline, v1",
        "Repeats          : ",
    ]
    .join("\n")
        + "\n";
    assert_eq!(text, expected);
}

#[test]
fn test_long_form_wraps_long_values() {
    // GIVEN a reason wider than the text width
    let mut r = record("run-1");
    r.reason = "compare the refractory period against last week".to_string();

    // WHEN rendered 20 characters wide
    let text = render_records_long(&[r], 20);

    // THEN continuation lines carry a blank title
    assert!(text.starts_with(&format!("{}\n", "-".repeat(20))));
    assert!(text.contains(
        "Reason           : compare the\n\
         \x20                : refractory period\n\
         \x20                : against last week\n"
    ));
}

#[test]
fn test_long_form_stars_version_with_uncommitted_changes() {
    let mut r = record("run-1");
    r.diff = "-tau_m = 10\n+tau_m = 20".to_string();

    let text = render_records_long(&[r], 80);

    assert!(text.contains("Version          : 6f2c1a9*\n"));
}

#[test]
fn test_table_has_header_and_one_row_per_record() {
    let text = render_table(&[record("run-1"), record("run-2")]);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("| Label | Timestamp           | Reason            |"));
    assert!(lines[1].starts_with("| run-1 | 2026-01-02 03:04:05 | test the baseline |"));
    for line in &lines {
        assert!(line.starts_with("| ") && line.ends_with(" |"));
        assert_eq!(line.chars().count(), lines[0].chars().count());
    }
}

#[test]
fn test_table_cuts_cells_at_twenty_characters() {
    let text = render_table(&[record("run-1")]);

    // "python (version: 3.11.4)" is 24 characters
    assert!(text.contains("| python (version: 3.1 |"));
    assert!(!text.contains("3.11.4"));
    // the two parameter lines share one cell, cut after the comma
    assert!(text.contains("| network.n_exc = 800, |"));
}

#[test]
fn test_csv_has_header_and_one_row_per_record() {
    let text = render_csv(&[record("run-1"), record("run-2")]).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let titles: Vec<String> = RecordField::ALL.iter().map(|f| f.title()).collect();
    assert_eq!(headers, titles);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "run-2");
    assert_eq!(&rows[0][10], "network.n_exc = 800, tau_m = 20.0");
    assert_eq!(&rows[0][13], "results/spikes.csv, results/vm.csv");
}

#[test]
fn test_csv_quotes_cells_containing_the_delimiter() {
    let mut r = record("run-1");
    r.reason = "retry; cluster was busy".to_string();

    let text = render_csv(&[r]).unwrap();

    assert!(text.contains("\"retry; cluster was busy\""));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(text.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[2], "retry; cluster was busy");
}
