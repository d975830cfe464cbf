pub mod movie;
pub mod search;
pub mod weather;
pub mod webhook;

pub use movie::*;
pub use search::*;
pub use weather::*;
pub use webhook::*;
