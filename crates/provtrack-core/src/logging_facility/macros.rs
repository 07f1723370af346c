//! Operation boundary logging macros
//!
//! Each operation logs exactly one `start` and one `end` (or `end_error`)
//! event, tagged with the emitting module as `component`.

/// Log the start of an operation
///
/// ```
/// # use provtrack_core::log_op_start;
/// log_op_start!("compare_records");
/// log_op_start!("compare_records", record_a = "run-1", record_b = "run-2");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use provtrack_core::log_op_end;
/// log_op_end!("pair_datafiles", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation
///
/// The error is converted into [`ExError`](crate::errors::ExError) so the
/// event always carries `err.kind`, `err.code` and the rendered error with
/// whatever context the caller attached.
///
/// ```
/// # use provtrack_core::log_op_error;
/// # use provtrack_core::errors::ProvenanceError;
/// let err = ProvenanceError::RecordNotFound {
///     project: "demo".to_string(),
///     label: "missing".to_string(),
/// };
/// log_op_error!("compare_records", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            error = %ex_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::provtrack_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            error = %ex_err,
            $($field)*
        );
    }};
}
