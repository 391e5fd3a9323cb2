//! # Core Actor Plumbing
//!
//! The building blocks shared by every actor in the crate.
//!
//! ## Key Types
//!
//! - [`Response`]: The one-shot channel an actor answers on.
//! - [`FrameworkError`]: Failures of the message transport itself (ActorClosed, ActorDropped).
//! - [`request`]: Send a request and await its response in one call.

use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. ERRORS
// =============================================================================

/// Errors that can occur within the actor transport itself.
///
/// Domain errors (`CartError`, `CatalogError`) wrap this via `#[from]`, so callers
/// only ever match on one error type per actor.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

// =============================================================================
// 2. MESSAGES
// =============================================================================

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

// =============================================================================
// 3. THE GENERIC CLIENT CALL
// =============================================================================

/// Sends a request built by `make` and waits for the actor's answer.
///
/// # Architecture Note
/// Every client method follows the same three steps: open a one-shot channel,
/// push the request (carrying the sender half) into the actor's mailbox, await
/// the receiver half. Writing it once keeps the clients to one line per operation.
///
/// If the mailbox is closed the call fails with [`FrameworkError::ActorClosed`];
/// if the actor drops the responder without answering (e.g. it panicked) the call
/// fails with [`FrameworkError::ActorDropped`].
pub async fn request<M, T, E>(
    sender: &mpsc::Sender<M>,
    make: impl FnOnce(Response<T, E>) -> M,
) -> Result<T, E>
where
    E: From<FrameworkError>,
{
    let (respond_to, response) = oneshot::channel();
    sender
        .send(make(respond_to))
        .await
        .map_err(|_| FrameworkError::ActorClosed)?;
    response
        .await
        .map_err(|_| E::from(FrameworkError::ActorDropped))?
}

/// Answers a request, ignoring the case where the caller stopped waiting.
pub fn respond<T, E>(respond_to: Response<T, E>, result: Result<T, E>) {
    let _ = respond_to.send(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    enum EchoError {
        #[error(transparent)]
        Framework(#[from] FrameworkError),
    }

    enum EchoRequest {
        Echo {
            value: u32,
            respond_to: Response<u32, EchoError>,
        },
    }

    #[tokio::test]
    async fn test_request_round_trip() {
        let (sender, mut receiver) = mpsc::channel::<EchoRequest>(4);
        tokio::spawn(async move {
            while let Some(EchoRequest::Echo { value, respond_to }) = receiver.recv().await {
                respond(respond_to, Ok(value * 2));
            }
        });

        let doubled = request(&sender, |respond_to| EchoRequest::Echo {
            value: 21,
            respond_to,
        })
        .await;
        assert_eq!(doubled, Ok(42));
    }

    #[tokio::test]
    async fn test_request_to_closed_actor() {
        let (sender, receiver) = mpsc::channel::<EchoRequest>(4);
        drop(receiver);

        let result = request(&sender, |respond_to| EchoRequest::Echo {
            value: 1,
            respond_to,
        })
        .await;
        assert_eq!(result, Err(EchoError::Framework(FrameworkError::ActorClosed)));
    }

    #[tokio::test]
    async fn test_request_dropped_responder() {
        let (sender, mut receiver) = mpsc::channel::<EchoRequest>(4);
        tokio::spawn(async move {
            // Swallow the request without answering
            let _ = receiver.recv().await;
        });

        let result = request(&sender, |respond_to| EchoRequest::Echo {
            value: 1,
            respond_to,
        })
        .await;
        assert_eq!(result, Err(EchoError::Framework(FrameworkError::ActorDropped)));
    }
}
