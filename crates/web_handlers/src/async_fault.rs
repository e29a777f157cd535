use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use crate::fault::Fault;

/// Runs a handler future so that every failure ends up as a [`Fault`].
///
/// Errors already travel as `Err(Fault)`; a panic raised while the future is
/// polled is caught here as well and reported as an unclassified fault, so the
/// request still gets a rendered error page. Success values pass through
/// untouched.
pub async fn catch_async<F, T>(handler: F) -> Result<T, Fault>
where
    F: Future<Output = Result<T, Fault>>,
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => {
            log::error!("💥 Handler panicked: {}", panic_message(panic.as_ref()));
            Err(Fault::unclassified())
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
