pub mod script;
pub mod sequence_ops;

pub use crate::domain::model::StringSeq;
pub use crate::domain::ports::{Comparator, NaturalOrder, Transform, Uppercase};
pub use crate::utils::error::Result;
