use clap::{Args, Subcommand};
use dbesto::CatalogItemUuid;
use dbesto_app::{auth::Capability, config::StoreArgs, context::AppContext};

use super::{authorize, describe};

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    Place(PlaceOrderArgs),
}

#[derive(Debug, Args)]
struct PlaceOrderArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Menu item UUID; repeat to order more than one
    #[arg(long = "item", required = true)]
    items: Vec<CatalogItemUuid>,
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::Place(args) => place(args).await,
    }
}

async fn place(args: PlaceOrderArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());
    let user = authorize(&ctx, Capability::PlaceOrder).await?;
    let session = ctx.cart_session();

    for item in args.items {
        session
            .add_item(item)
            .await
            .map_err(|error| format!("failed to add {item} to cart: {}", describe(&error)))?;
    }

    let order = session
        .submit(ctx.orders.as_ref(), user.customer_ref())
        .await
        .map_err(|error| format!("failed to place order: {}", describe(&error)))?;

    println!("order_uuid: {}", order.uuid);
    println!("status: {}", order.status);

    for line in &order.snapshot.lines {
        println!(
            "  {} x{} @ {} = {}",
            line.title, line.quantity, line.price, line.line_total
        );
    }

    println!("total: {}", order.snapshot.total_amount);

    Ok(())
}
