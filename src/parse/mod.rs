pub mod legacy;
pub mod record;

pub use legacy::LegacyDecoder;
pub use record::{
    RecordDecoder, RecordFormat, StructuredDecoder, decode, decode_record, encode,
};
