mod chart;
mod prediction;
mod stats;
mod view;

pub use view::Dashboard;
