//! AWS Lambda backed [`Invoker`].

use async_trait::async_trait;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::config::Region;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use tracing::{debug, info};

use crate::{InvokeError, InvokeResult, Invoker};

pub const DEFAULT_REGION: &str = "us-east-1";

/// Where to reach Lambda. Credentials come from the standard AWS provider
/// chain (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, profiles, IMDS).
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub region: String,
    pub endpoint_url: Option<String>,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
        }
    }
}

pub struct LambdaInvoker {
    client: Client,
}

impl LambdaInvoker {
    /// Resolve credentials and build a client for the configured region.
    pub async fn connect(config: &LambdaConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(ref url) = config.endpoint_url {
            info!("Using Lambda endpoint override: {}", url);
            loader = loader.endpoint_url(url);
        }

        let sdk_config = loader.load().await;
        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Invoker for LambdaInvoker {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> InvokeResult<Vec<u8>> {
        debug!(function = %function_name, bytes = payload.len(), "Invoking Lambda function");

        let output = self
            .client
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| InvokeError::Service(DisplayErrorContext(e).to_string()))?;

        into_result(function_name, output)
    }
}

/// A function that raised still comes back as a successful API call, with
/// `FunctionError` set and the error document as payload.
fn into_result(function_name: &str, output: InvokeOutput) -> InvokeResult<Vec<u8>> {
    let payload = output.payload.map(Blob::into_inner).unwrap_or_default();

    match output.function_error {
        Some(kind) => Err(InvokeError::Function {
            function: function_name.to_string(),
            kind,
            payload,
        }),
        None => Ok(payload),
    }
}
