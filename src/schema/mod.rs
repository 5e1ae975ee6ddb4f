pub mod artifact;
pub mod definition;
pub mod raw;

pub use artifact::*;
pub use definition::*;
pub use raw::*;
