//! Contains utilities shared by the property based tests of the Sprig crates.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

pub mod input;
