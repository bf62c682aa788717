//! # flagline Main Entry Point

use anyhow::Result;
use flagline::cmd_args::CommandLineArgs;
use flagline::config::Settings;
use flagline::logging::init_tracing;
use flagline::{print_gallery, AppController, HttpCountrySource};
use flagline::{TerminalEventStream, TerminalRenderStream};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    let settings = Settings::resolve(&args);
    init_tracing(&settings)?;

    let source = Arc::new(HttpCountrySource::new(
        settings.endpoint(),
        settings.timeout(),
    )?);

    if settings.print() {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return print_gallery(&settings, source, &mut out).await;
    }

    let mut app = AppController::with_io_streams(
        &settings,
        source,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await
}
