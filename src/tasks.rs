// List the different tasks here
pub mod aggregate;
pub mod baseline;
pub mod color;
pub mod load;
pub mod metric;
pub mod plot;
pub mod report;
pub mod scenario;
