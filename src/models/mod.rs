pub mod file;
pub mod response;
pub mod state;

pub use file::*;
pub use response::*;
pub use state::*;
