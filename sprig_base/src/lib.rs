//! Contains the code shared by every phase of the Sprig front end: the source file model, the
//! diagnostic formatting used to report errors, and the configurable front-end limits.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod config;
pub mod log;
pub mod source_file;
