//! Generic structures, used in the library but not specific to it.

pub mod bits;
