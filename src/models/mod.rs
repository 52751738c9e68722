pub mod breakdown;
pub mod dataset;
pub mod record;
pub mod summary;

pub use breakdown::*;
pub use dataset::*;
pub use record::*;
pub use summary::*;
