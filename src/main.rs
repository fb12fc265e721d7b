use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use inkcard::app::AppContext;
use inkcard::cli::{commands, Cli, Commands};
use inkcard::config::AppConfig;
use inkcard::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    let ctx = AppContext::new(config);

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(ctx.config.port);
            server::serve(ctx, port).await?;
        }
        Commands::Generate {
            rss,
            username,
            limit,
            theme,
            show_date,
            show_tags,
            out,
        } => {
            commands::generate(
                &ctx,
                commands::GenerateArgs {
                    rss,
                    username,
                    limit,
                    theme,
                    show_date,
                    show_tags,
                    out,
                },
            )
            .await?;
        }
    }

    Ok(())
}
