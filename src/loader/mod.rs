mod csv_loader;
mod extract;
mod normalize;

pub use csv_loader::*;
pub use extract::Extraction;
pub use normalize::*;
