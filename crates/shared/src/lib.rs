//! Wire contract between the PDF assistant clients and the document backend.

pub mod domain;
pub mod error;
pub mod protocol;
