//! Editing prompt documents in place.
//!
//! Edits target the first context block of a document. The block keeps the
//! spelling it was written with and is re-rendered one path per line; the
//! rest of the document is left byte-for-byte untouched.

mod edit;
mod versioned;


pub use edit::{add_paths, context_paths, remove_paths};
pub use versioned::VersionedDocument;
