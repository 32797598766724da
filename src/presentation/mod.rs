// Presentation layer - View state machine and renderers
pub mod chart_view;
pub mod renderer;
