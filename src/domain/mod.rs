// Domain layer - Pure chart and trend data models
pub mod chart;
pub mod color;
pub mod trend;
