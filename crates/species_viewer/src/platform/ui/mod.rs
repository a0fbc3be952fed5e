pub mod chart;
pub mod constants;
pub mod render;
pub mod scatter;
pub mod selector;
