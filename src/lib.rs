//! Core simulation of a top-down terminal driving game: dodge traffic,
//! collect fuel, survive as long as the tank lasts.
//!
//! Everything gameplay-relevant lives here and is deterministic under an
//! injected RNG; terminal I/O stays in the binary.

pub mod behavior;
pub mod compute;
pub mod entities;
pub mod feedback;
pub mod scores;
pub mod spawn;
pub mod state;
