mod chart;
mod config;
mod data_point;
mod planning;
mod report;

pub use chart::ColumnChart;
pub use config::{ChartConfig, HistorySource};
pub use data_point::DataPoint;
pub use report::RenderReport;
