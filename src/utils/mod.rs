//! Small pure helpers shared across layers.

pub mod password;
