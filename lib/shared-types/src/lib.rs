//! Newtypes for opaque identifiers issued by the e-signature provider.

mod document_id;
mod macros;
mod signrequest_id;

pub use document_id::DocumentId;
pub use signrequest_id::SignRequestId;
