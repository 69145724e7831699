mod output;
mod table;

pub use output::{Output, OutputBlock};
pub use table::{name_column_width, render_world};
