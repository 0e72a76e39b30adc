mod scanner;
mod source;

pub use scanner::{Line, RevLineScanner, CHUNK_SIZE};
pub use source::RangeRead;
