mod fields;
mod metric;
mod timestamp;

pub use fields::*;
pub use metric::*;
pub use timestamp::*;
