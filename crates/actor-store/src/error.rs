//! # Framework Errors
//!
//! Errors raised by the store itself. The store knows nothing about business rules: it
//! reports missing keys, broken channels, and passes entity errors through untouched.

/// Errors that can occur within the actor store itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity's own error so it can travel back through the response channel.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the concrete entity error, if this is one of type `E`.
    ///
    /// Any other variant (or an entity error of a different type) is handed back unchanged.
    pub fn into_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }

    /// True when the store could not be reached or did not answer.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            FrameworkError::ActorClosed | FrameworkError::ActorDropped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("boom {0}")]
    struct Boom(u8);

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn test_into_entity_recovers_concrete_error() {
        let err = FrameworkError::entity(Boom(7));
        assert_eq!(err.to_string(), "Entity error: boom 7");
        assert_eq!(err.into_entity::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn test_into_entity_keeps_foreign_errors() {
        let err = FrameworkError::entity(Other);
        let back = err.into_entity::<Boom>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed
            .into_entity::<Boom>()
            .unwrap_err();
        assert!(closed.is_unreachable());
        assert!(!FrameworkError::NotFound("x".into()).is_unreachable());
    }
}
