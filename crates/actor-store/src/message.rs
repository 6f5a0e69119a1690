//! # Generic Messages
//!
//! This module defines the message types exchanged between the `ResourceClient` and
//! the `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Keyed Registry Operations
/// The variants map onto the operations of a keyed registry, plus an `Action`
/// variant for resource-specific read-modify-write logic:
///
/// - **Save**: Insert or overwrite by key. Always succeeds while the actor is alive.
/// - **Get**: Fetch a copy of the entity, or `NotFound`.
/// - **Update**: Overwrite an *existing* entity. Unknown keys fail with `NotFound`
///   instead of silently inserting.
/// - **List**: Scan for every entity matching an [`ActorEntity::Filter`].
/// - **Action**: Run [`ActorEntity::handle_action`] against one entity as a single
///   atomic step.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Save {
        item: T,
        respond_to: Response<()>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Update {
        item: T,
        respond_to: Response<()>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
