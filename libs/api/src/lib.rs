pub mod buffer;
pub mod error;
pub mod schema;
pub mod value;

pub use buffer::{AsyncBuffer, MemoryBuffer, SliceFuture, check_slice};
pub use error::{BufferError, RequestKind};
pub use schema::{ConvertedType, PhysicalType, SchemaElement};
pub use value::{DecodedArray, PackedArray, Timestamp, Value};
