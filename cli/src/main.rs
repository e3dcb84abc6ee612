//! Prompt Refinery binary: `refinery serve` (default) or `refinery prompt`.

mod logging;

use clap::Parser;
use cli::{run_prompt, Cli, Command, ServeArgs};
use refinery::Settings;
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_and_apply(config::APP_NAME, None::<&std::path::Path>);
    let _log_guard = logging::init()?;
    match loaded {
        Ok(applied) => debug!(
            from_dotenv = ?applied.from_dotenv,
            from_xdg = ?applied.from_xdg,
            "config applied"
        ),
        Err(e) => warn!("config not loaded: {}", e),
    }

    let args = Cli::parse();
    let settings = Settings::from_env();
    debug!(?settings, "settings");

    match args.cmd.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(sa) => {
            if let Err(e) = serve::run_serve(&settings, sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Prompt(pa) => {
            println!("{}", run_prompt(&pa, &settings.requester()).await);
        }
    }
    Ok(())
}
