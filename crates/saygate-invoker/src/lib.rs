//! Remote function invocation for saygate
//!
//! [`Invoker`] is the seam between the HTTP layer and the serverless platform.
//! [`LambdaInvoker`] talks to AWS Lambda, and [`TimeoutInvoker`] bounds any
//! invoker by a per-call deadline.

mod error;
mod lambda;
mod payload;
mod timeout;

pub use error::{InvokeError, InvokeResult};
pub use lambda::{DEFAULT_REGION, LambdaConfig, LambdaInvoker};
pub use payload::InvocationPayload;
pub use timeout::TimeoutInvoker;

use async_trait::async_trait;

/// Request/response invocation of a named remote function.
///
/// The payload goes out as-is and the result comes back as opaque bytes;
/// implementations must not interpret either.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> InvokeResult<Vec<u8>>;
}
