use clap::Args;
use dbesto_app::{auth::Capability, config::StoreArgs, context::AppContext};

use super::authorize;

#[derive(Debug, Args)]
pub(crate) struct WhoamiArgs {
    #[command(flatten)]
    store: StoreArgs,
}

pub(crate) async fn run(args: WhoamiArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());
    let user = authorize(&ctx, Capability::BrowseMenu).await?;

    println!("uid: {}", user.uid);
    println!("email: {}", user.email);
    println!("role: {}", user.role);

    Ok(())
}
