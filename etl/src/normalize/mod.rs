//! Field-level normalizers shared by all record cleaners.
//!
//! Each submodule owns one normalization concern and exposes plain functions
//! over string slices. Cleaners compose these; none of them touch the wire
//! format or the envelope.

pub mod blank;
pub mod currency;
pub mod datetime;
pub mod name;
pub mod phone;
pub mod vocab;
