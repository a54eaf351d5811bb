//! Terminal front-end for a todo list kept in sync with a REST API.
//!
//! Reads line commands from stdin, runs the resulting remote calls in the
//! background and reprints the list as each one lands.

mod config;
mod input;
mod render;
mod service;
mod session;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::input::{Action, HELP};
use crate::service::HttpTodoService;
use crate::session::{Session, Step};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(base_url = %config.base_url, "starting");
    let (mut session, mut outcomes) = Session::new(HttpTodoService::new(&config.base_url));
    session.set_filter(config.filter);
    session.start();
    println!("{HELP}\nloading...");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let step = match line.parse::<Action>() {
                    Ok(action) => session.handle(action),
                    Err(err) => Step::Show(err.to_string()),
                };
                match step {
                    Step::Pending => {}
                    Step::Show(text) => println!("{text}"),
                    Step::Quit => break,
                }
            }
            Some(outcome) = outcomes.recv() => {
                println!("{}", session.apply(outcome));
            }
        }
    }

    info!(
        items = session.store().items().len(),
        in_flight = session.in_flight(),
        "exiting"
    );
    Ok(())
}
