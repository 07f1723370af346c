use serde::{Deserialize, Serialize};

/// How a run was launched
///
/// The comparison core only compares launch modes for equality and renders
/// them with `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchMode {
    /// Single process on the local machine
    Serial {
        #[serde(default)]
        working_directory: Option<String>,
        #[serde(default)]
        options: Option<String>,
    },
    /// `n` processes started through an MPI launcher
    Distributed {
        n: u32,
        #[serde(default = "default_mpirun")]
        mpirun: String,
        #[serde(default)]
        hosts: Vec<String>,
        #[serde(default)]
        working_directory: Option<String>,
        #[serde(default)]
        options: Option<String>,
    },
}

fn default_mpirun() -> String {
    "mpiexec".to_string()
}

impl LaunchMode {
    pub fn serial() -> Self {
        LaunchMode::Serial {
            working_directory: None,
            options: None,
        }
    }

    pub fn distributed(n: u32) -> Self {
        LaunchMode::Distributed {
            n,
            mpirun: default_mpirun(),
            hosts: Vec::new(),
            working_directory: None,
            options: None,
        }
    }
}

impl Default for LaunchMode {
    fn default() -> Self {
        Self::serial()
    }
}

impl std::fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchMode::Serial { .. } => write!(f, "serial"),
            LaunchMode::Distributed {
                n, mpirun, hosts, ..
            } => {
                write!(f, "distributed (n={}, mpiexec={}", n, mpirun)?;
                if !hosts.is_empty() {
                    write!(f, ", hosts={}", hosts.join(","))?;
                }
                write!(f, ")")
            }
        }
    }
}
