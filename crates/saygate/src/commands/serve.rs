//! Start the HTTP gateway

use anyhow::Result;
use clap::Args;
use saygate_invoker::{DEFAULT_REGION, Invoker, LambdaConfig, LambdaInvoker, TimeoutInvoker};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::http::{DEFAULT_PORT, Gateway};

/// Name of the remote function invoked for each request
pub const DEFAULT_FUNCTION: &str = "say";

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "SAYGATE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Lambda function to invoke
    #[arg(short, long, env = "SAYGATE_FUNCTION", default_value = DEFAULT_FUNCTION)]
    pub function: String,

    /// AWS region of the function
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Override the Lambda endpoint (e.g. a local emulator)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Allowed CORS origin (default: any)
    #[arg(long, env = "SAYGATE_CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Give up on an invocation after this many seconds (default: wait indefinitely)
    #[arg(long, env = "SAYGATE_INVOKE_TIMEOUT_SECS")]
    pub invoke_timeout: Option<u64>,
}

pub async fn serve(args: ServeArgs) -> Result<()> {
    let lambda_config = LambdaConfig {
        region: args.region,
        endpoint_url: args.endpoint_url,
    };

    info!("Starting saygate HTTP gateway");
    info!("Region: {}", lambda_config.region);

    let lambda = LambdaInvoker::connect(&lambda_config).await;

    let invoker: Arc<dyn Invoker> = match args.invoke_timeout {
        Some(secs) => {
            let bounded = TimeoutInvoker::new(lambda, Duration::from_secs(secs));
            info!("Invocation timeout: {:?}", bounded.timeout());
            Arc::new(bounded)
        }
        None => Arc::new(lambda),
    };

    let gateway = Gateway::new(invoker, args.function);
    info!("Function: {}", gateway.function_name());

    crate::http::serve_http(gateway, args.port, args.cors_origin).await
}
