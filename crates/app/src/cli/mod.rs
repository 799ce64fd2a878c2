use std::error::Error;

use clap::{Parser, Subcommand};
use dbesto_app::{
    auth::{Capability, SessionUser},
    config::LoggingConfig,
    context::AppContext,
};

mod menu;
mod order;
mod orders;
mod whoami;

#[derive(Debug, Parser)]
#[command(name = "dbesto-app", about = "Dbesto storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Whoami(whoami::WhoamiArgs),
    Menu(menu::MenuCommand),
    Order(order::OrderCommand),
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Whoami(args) => whoami::run(args).await,
            Commands::Menu(command) => menu::run(command).await,
            Commands::Order(command) => order::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
        }
    }
}

/// Resolve the signed-in user and check they may perform `capability`.
async fn authorize(ctx: &AppContext, capability: Capability) -> Result<SessionUser, String> {
    let user = ctx
        .auth
        .current_user()
        .await
        .map_err(|error| format!("failed to resolve session: {}", describe(&error)))?;

    user.require(capability)
        .map_err(|error| error.to_string())?;

    Ok(user)
}

/// Render an error and its sources on one line.
fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
