pub mod flow;
pub mod params;
pub mod sector;

pub use flow::*;
pub use params::*;
pub use sector::*;
