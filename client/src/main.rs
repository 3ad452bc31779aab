//! `selectify` entry-point: loads settings, wires adapters, and runs one
//! page or action.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

use selectify::SelectifySettings;
use selectify::domain::ClientContext;
use selectify::inbound::cli::{self, Cli, PromptConfirmation, TerminalNotifier};
use selectify::outbound::http::HttpSelectifyApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Cli::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: Cli) -> Result<()> {
    let settings = SelectifySettings::load_from_iter([OsString::from("selectify")])
        .wrap_err("load selectify settings")?;
    let base_url = settings.base_url().wrap_err("parse SELECTIFY_BASE_URL")?;
    debug!(%base_url, "using selectify backend");

    let api = HttpSelectifyApi::new(base_url).wrap_err("build selectify HTTP client")?;
    let context = ClientContext::new(
        Arc::new(api),
        Arc::new(TerminalNotifier),
        Arc::new(PromptConfirmation::new(args.command.assume_yes())),
        Arc::new(DefaultClock),
        settings.session(),
    );

    let mut stdout = io::stdout().lock();
    cli::run(args.command, &context, &mut stdout).await?;
    Ok(())
}
