//! Virtual pet model: stats, mood, ticks and the toolkit-free game session.

pub mod anim;
pub mod pet;
pub mod session;
pub mod settings;
