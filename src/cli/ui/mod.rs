pub mod banner;
pub mod chart_renderer;
pub mod table_renderer;
