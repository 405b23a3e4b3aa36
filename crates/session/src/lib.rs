pub(crate) mod codec;
pub(crate) mod document;
pub(crate) mod errors;
pub(crate) mod store;

pub use codec::{decode, encode};
pub use document::{FieldRecord, SessionDocument};
pub use errors::SessionError;
pub use store::{default_arrangement, SessionStore};
