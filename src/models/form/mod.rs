pub mod options;
pub mod types;
pub mod update;

pub use options::*;
pub use types::*;
pub use update::*;
