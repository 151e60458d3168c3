use dotenv::dotenv;
use std::process;
use timesheet::commands::Cli;
use timesheet::libs::messages::macros::is_debug_mode;
use timesheet::msg_error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timesheet=debug")))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if let Err(err) = Cli::menu().await {
        msg_error!(format!("{:#}", err));
        process::exit(1);
    }
}
