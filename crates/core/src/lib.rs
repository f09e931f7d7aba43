//! Rules engine for the dice court game. Keep this crate free of IO and platform concerns.

pub mod ability;
pub mod action;
pub mod cards;
pub mod compare;
pub mod config;
pub mod cost;
pub mod engine;
pub mod events;
pub mod legal;
pub mod player;
pub mod rng;
pub mod selection;
pub mod state;

pub use ability::*;
pub use action::*;
pub use cards::*;
pub use compare::*;
pub use config::*;
pub use cost::*;
pub use engine::*;
pub use events::*;
pub use legal::*;
pub use player::*;
pub use rng::*;
pub use selection::*;
pub use state::*;
