use clap::{Args, Subcommand};
use dbesto::{OrderRecord, OrderStatus, OrderUuid};
use dbesto_app::{
    auth::Capability,
    config::StoreArgs,
    context::AppContext,
    domain::orders::{order_queue, settle_order},
};

use super::{authorize, describe};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    List(ListOrdersArgs),
    Complete(SettleOrderArgs),
    Cancel(SettleOrderArgs),
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Only show orders that are still pending
    #[arg(long)]
    pending: bool,
}

#[derive(Debug, Args)]
struct SettleOrderArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Order UUID
    uuid: OrderUuid,
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List(args) => list(args).await,
        OrdersSubcommand::Complete(args) => settle(args, OrderStatus::Completed).await,
        OrdersSubcommand::Cancel(args) => settle(args, OrderStatus::Cancelled).await,
    }
}

async fn list(args: ListOrdersArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::ViewOrders).await?;

    let orders = order_queue(ctx.orders.as_ref(), args.pending)
        .await
        .map_err(|error| format!("failed to list orders: {}", describe(&error)))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    for order in &orders {
        print_order(order);
        println!();
    }

    Ok(())
}

async fn settle(args: SettleOrderArgs, status: OrderStatus) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::UpdateOrderStatus).await?;

    let order = settle_order(ctx.orders.as_ref(), args.uuid, status)
        .await
        .map_err(|error| format!("failed to update order: {}", describe(&error)))?;

    print_order(&order);

    Ok(())
}

fn print_order(order: &OrderRecord) {
    println!("order_uuid: {}", order.uuid);
    println!("status: {}", order.status);
    println!("customer: {}", order.customer.email);
    println!("submitted_at: {}", order.snapshot.submitted_at);

    for line in &order.snapshot.lines {
        println!("  {} x{}", line.title, line.quantity);
    }

    println!("total: {}", order.snapshot.total_amount);
}
