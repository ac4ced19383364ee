use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod http;

use commands::ServeArgs;

#[derive(Parser)]
#[command(name = "saygate")]
#[command(author, version, about = "HTTP gateway for the say function")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve(ServeArgs),

    /// Print the OpenAPI document as JSON
    Openapi {
        /// Port advertised in the server URL
        #[arg(short, long, default_value_t = http::DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve(args) => commands::serve(args).await,
        Commands::Openapi { port } => commands::openapi(port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["saygate", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 3004);
        assert_eq!(args.function, "say");
        assert!(args.invoke_timeout.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "saygate",
            "-v",
            "serve",
            "--port",
            "8080",
            "--function",
            "shout",
            "--region",
            "eu-west-1",
            "--invoke-timeout",
            "30",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.function, "shout");
        assert_eq!(args.region, "eu-west-1");
        assert_eq!(args.invoke_timeout, Some(30));
    }

    #[test]
    fn test_openapi_port() {
        let cli = Cli::try_parse_from(["saygate", "openapi", "--port", "9000"]).unwrap();
        assert!(matches!(cli.command, Commands::Openapi { port: 9000 }));
    }
}
