pub mod catalog;
pub mod definition;
pub mod model;

pub use catalog::*;
pub use definition::*;
pub use model::*;
