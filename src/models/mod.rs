pub mod point;
pub mod postcode;
pub mod sale;
pub mod summary;

pub use point::*;
pub use postcode::*;
pub use sale::*;
pub use summary::*;
