//! Pure data structures (DTOs). [`Order`] implements the [`ActorEntity`](actor_store::ActorEntity) trait.

pub mod driver;
pub mod order;

pub use driver::*;
pub use order::*;
