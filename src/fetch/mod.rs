pub mod concurrent;
pub mod page;
pub mod sequential;

pub use concurrent::run_concurrent;
pub use sequential::run_sequential;
