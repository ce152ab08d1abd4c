pub mod check;
pub mod data;
pub mod devices;
pub mod tools;
pub mod util;

pub use check::*;
pub use data::*;
pub use devices::*;
pub use tools::*;
pub use util::*;
