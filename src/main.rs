use anyhow::Result;
use clap::Parser;
use ppx_shortcuts::cli::{self, Cli};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level flag takes precedence over DEBUG_LEVEL
    ppx_shortcuts::debug::init_log_bridge(cli.log_level);

    log::info!("Starting ppx-shortcuts {}", ppx_shortcuts::VERSION);

    // Create Tokio runtime for async storage I/O
    let runtime = Runtime::new()?;
    let result = runtime.block_on(cli::run(cli));

    if let Err(ref e) = result {
        eprintln!("ppx-shortcuts: error: {e:#}");
        // Flush pending log lines before exiting with a failure code
        log::logger().flush();
        std::process::exit(1);
    }
    Ok(())
}
