//! Species viewer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Generation, Member, Species};
pub use update::update;
pub use view_model::{
    chart_points, parse_measure, species_options, AppViewModel, ChartPoint, LoadProgress,
    SpeciesOption,
};
