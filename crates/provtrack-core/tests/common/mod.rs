use provtrack_core::model::{
    DataKey, Dependency, Executable, LaunchMode, ParameterSet, Record, Repository,
};

/// Create a DataKey whose digest is derived from `tag`
#[allow(dead_code)]
pub fn key(path: &str, tag: &str) -> DataKey {
    DataKey::new(path, format!("sha1-{}", tag))
}

/// Create a fully populated record in project `demo`
///
/// Two records built from this helper with different labels differ in
/// nothing but their label and timestamp.
#[allow(dead_code)]
pub fn sample_record(label: &str) -> Record {
    let mut record = Record::new(label).in_project("demo");
    record.executable = Some(Executable::new("python", Some("3.11.4")));
    record.repository = Some(Repository::new("https://example.org/model.git", "git"));
    record.main_file = "run_model.py".to_string();
    record.version = "6f2c1a9".to_string();
    record.dependencies = vec![
        Dependency::new("numpy", "1.26.0"),
        Dependency::new("scipy", "1.11.3"),
    ];
    record.parameters = ParameterSet::from_json(serde_json::json!({
        "tau_m": 20.0,
        "network": {"n_exc": 800, "n_inh": 200}
    }))
    .expect("object root");
    record.input_data = vec![key("inputs/stimulus.npy", "stim")];
    record.output_data = vec![
        key("results/spikes.csv", "spikes"),
        key("results/vm.csv", "vm"),
    ];
    record.launch_mode = LaunchMode::serial();
    record.script_arguments = "default.param".to_string();
    record
}
