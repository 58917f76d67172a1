mod display;
mod randomizer;
mod state;

pub use display::DisplayState;
pub use randomizer::GameRandomizer;
pub use state::WidgetState;
