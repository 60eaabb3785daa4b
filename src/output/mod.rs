mod formatter;

pub use formatter::{format_batch_table, format_score, should_use_colors};
