pub mod dataset;
pub mod request;
pub mod value;

pub use dataset::{cell, Dataset, Row};
pub use request::{GenerateRequest, MAX_ROW_COUNT, MIN_ROW_COUNT};
pub use value::CellValue;
