use clap::{Args, Subcommand};
use dbesto::{CatalogItem, CatalogItemUuid, catalog::search};
use dbesto_app::{
    auth::Capability,
    config::StoreArgs,
    context::AppContext,
    domain::catalog::data::{CatalogItemUpdate, NewCatalogItem},
};

use super::{authorize, describe};

#[derive(Debug, Args)]
pub(crate) struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    List(ListMenuArgs),
    Add(AddMenuItemArgs),
    Update(UpdateMenuItemArgs),
    Delete(DeleteMenuItemArgs),
}

#[derive(Debug, Args)]
struct ListMenuArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Only show items whose title contains this text
    #[arg(long)]
    query: Option<String>,
}

#[derive(Debug, Args)]
struct AddMenuItemArgs {
    #[command(flatten)]
    store: StoreArgs,

    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "")]
    image_url: String,

    /// Whole-number price
    #[arg(long)]
    price: String,
}

#[derive(Debug, Args)]
struct UpdateMenuItemArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Menu item UUID
    uuid: CatalogItemUuid,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    image_url: Option<String>,

    #[arg(long)]
    price: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteMenuItemArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Menu item UUID
    uuid: CatalogItemUuid,
}

pub(crate) async fn run(command: MenuCommand) -> Result<(), String> {
    match command.command {
        MenuSubcommand::List(args) => list(args).await,
        MenuSubcommand::Add(args) => add(args).await,
        MenuSubcommand::Update(args) => update(args).await,
        MenuSubcommand::Delete(args) => delete(args).await,
    }
}

async fn list(args: ListMenuArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::BrowseMenu).await?;

    let items = ctx
        .catalog
        .list_items()
        .await
        .map_err(|error| format!("failed to list menu: {}", describe(&error)))?;

    let matches = search(&items, args.query.as_deref().unwrap_or_default());

    if matches.is_empty() {
        println!("no menu items found");
        return Ok(());
    }

    for item in matches {
        print_item(item);
        println!();
    }

    Ok(())
}

async fn add(args: AddMenuItemArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::ManageMenu).await?;

    let item = NewCatalogItem {
        title: args.title,
        description: args.description,
        image_url: args.image_url,
        price: args.price,
    }
    .into_item()
    .map_err(|error| error.to_string())?;

    let item = ctx
        .catalog
        .save_item(item)
        .await
        .map_err(|error| format!("failed to add menu item: {}", describe(&error)))?;

    print_item(&item);

    Ok(())
}

async fn update(args: UpdateMenuItemArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::ManageMenu).await?;

    let current = ctx
        .catalog
        .get_item(args.uuid)
        .await
        .map_err(|error| format!("failed to load menu item: {}", describe(&error)))?;

    let item = CatalogItemUpdate {
        title: args.title,
        description: args.description,
        image_url: args.image_url,
        price: args.price,
    }
    .apply(current)
    .map_err(|error| error.to_string())?;

    let item = ctx
        .catalog
        .save_item(item)
        .await
        .map_err(|error| format!("failed to update menu item: {}", describe(&error)))?;

    print_item(&item);

    Ok(())
}

async fn delete(args: DeleteMenuItemArgs) -> Result<(), String> {
    let ctx = AppContext::from_store_config(args.store.into_config());

    authorize(&ctx, Capability::ManageMenu).await?;

    ctx.catalog
        .delete_item(args.uuid)
        .await
        .map_err(|error| format!("failed to delete menu item: {}", describe(&error)))?;

    println!("deleted menu item {}", args.uuid);

    Ok(())
}

fn print_item(item: &CatalogItem) {
    println!("uuid: {}", item.uuid);
    println!("title: {}", item.title);
    println!("price: {}", item.price);

    if !item.description.is_empty() {
        println!("description: {}", item.description);
    }

    if !item.image_url.is_empty() {
        println!("image_url: {}", item.image_url);
    }
}
