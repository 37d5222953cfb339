mod format;
mod summary;

pub(crate) use summary::{output_preview_json, output_run_json, print_preview, print_run_summary};
