mod error;
mod serialization;
mod traits;

pub use error::{Result, StoreError};
pub use serialization::{decode_envelope, encode_envelope, Envelope, SerializationError};
pub use traits::Store;
