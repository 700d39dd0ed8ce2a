pub mod chart;
pub mod formatting;
pub mod table;

pub use chart::BarChart;
pub use formatting::{format_amount, format_share};
pub use table::{Alignment, Table, TableColumn};
