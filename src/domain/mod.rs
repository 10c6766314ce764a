pub mod category;
pub mod scenario;
pub mod purchase;

pub use category::*;
pub use scenario::*;
pub use purchase::*;
