//! File I/O boundaries
//!
//! Audio decoding (Symphonia) on the way in, PNG encoding (`image`) on the
//! way out. The rendering core in between never touches a file.

pub mod decoder;
pub mod encoder;
