//! Cart commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use serde_json::json;
use symbicroft_commerce::cart::{CartItem, CartStore};
use symbicroft_commerce::format::format_price;
use symbicroft_commerce::ProductId;
use symbicroft_store::FileStorage;

use super::{CartArgs, CartCommand};
use crate::context::Context;

const WIDTHS: [usize; 5] = [6, 28, 5, 12, 12];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::List) | None => list(ctx),
        Some(CartCommand::Show { product_id }) => show(ProductId::new(product_id), ctx),
        Some(CartCommand::Add {
            product_id,
            name,
            price,
            quantity,
            image,
            stock,
        }) => {
            let mut item = CartItem::new(ProductId::new(product_id), name, price, quantity);
            item.image_path = image;
            item.stock_quantity = stock;
            add(item, ctx)
        }
        Some(CartCommand::Update {
            product_id,
            quantity,
        }) => update(ProductId::new(product_id), quantity, ctx),
        Some(CartCommand::Remove { product_id }) => remove(ProductId::new(product_id), ctx),
        Some(CartCommand::Clear { yes }) => clear(yes, ctx),
        Some(CartCommand::Total) => total(ctx),
        Some(CartCommand::Count) => count(ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let cart = ctx.cart().snapshot();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "items": cart.items(), "total": cart.total() }));
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Cart is empty.");
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.table_row(&["ID", "PRODUCT", "QTY", "PRICE", "LINE TOTAL"], &WIDTHS);
    for item in cart.items() {
        ctx.output.table_row(
            &[
                &item.product_id.to_string(),
                &item.product_name,
                &item.quantity.to_string(),
                &format_price(item.product_price),
                &format_price(item.line_total()),
            ],
            &WIDTHS,
        );
    }
    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &format_price(cart.total()));
    Ok(())
}

fn show(product_id: ProductId, ctx: &Context) -> Result<()> {
    let Some(item) = ctx.cart().get_item(product_id) else {
        bail!("Product {} is not in the cart", product_id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&item);
        return Ok(());
    }

    ctx.output.header(&item.product_name);
    ctx.output.kv("ID", &item.product_id.to_string());
    ctx.output.kv("Quantity", &item.quantity.to_string());
    ctx.output.kv("Price", &format_price(item.product_price));
    ctx.output.kv("Line total", &format_price(item.line_total()));
    if let Some(image) = &item.image_path {
        ctx.output.kv("Image", image);
    }
    if let Some(stock) = item.stock_quantity {
        ctx.output.kv("Stock", &stock.to_string());
    }
    Ok(())
}

fn add(item: CartItem, ctx: &Context) -> Result<()> {
    item.validate().with_context(|| format!("Could not add product {}", item.product_id))?;

    let cart = ctx.cart();
    let product_id = item.product_id;
    let name = item.product_name.clone();

    if !cart.add_item(item) {
        bail!("Could not save the cart to {}", ctx.storage_path().display());
    }

    report(ctx, &format!("Added {name} to the cart"), product_id);
    Ok(())
}

fn update(product_id: ProductId, quantity: i64, ctx: &Context) -> Result<()> {
    let cart = ctx.cart();
    if !contains(&cart, product_id, ctx)? {
        ctx.output.warn(&format!("Product {product_id} is not in the cart"));
        return Ok(());
    }
    if !cart.update_quantity(product_id, quantity) {
        bail!("Could not save the cart to {}", ctx.storage_path().display());
    }

    let msg = if quantity <= 0 {
        format!("Removed product {product_id}")
    } else {
        format!("Set product {product_id} quantity to {quantity}")
    };
    report(ctx, &msg, product_id);
    Ok(())
}

fn remove(product_id: ProductId, ctx: &Context) -> Result<()> {
    let cart = ctx.cart();
    if !contains(&cart, product_id, ctx)? {
        ctx.output.warn(&format!("Product {product_id} is not in the cart"));
        return Ok(());
    }
    if !cart.remove_item(product_id) {
        bail!("Could not save the cart to {}", ctx.storage_path().display());
    }
    report(ctx, &format!("Removed product {product_id}"), product_id);
    Ok(())
}

/// Whether the stored cart holds `product_id`, failing if storage cannot be read.
fn contains(
    cart: &CartStore<FileStorage>,
    product_id: ProductId,
    ctx: &Context,
) -> Result<bool> {
    let path = ctx.storage_path();
    let current = cart
        .load()
        .with_context(|| format!("Could not read the cart at {}", path.display()))?;
    Ok(current.contains(product_id))
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Remove every item from the cart?")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled.");
            return Ok(());
        }
    }

    if !ctx.cart().clear_cart() {
        bail!("Could not clear the cart at {}", ctx.storage_path().display());
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "items": [], "total": 0.0 }));
    } else {
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

fn total(ctx: &Context) -> Result<()> {
    let total = ctx.cart().get_total();
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "total": total, "formatted": format_price(total) }));
    } else {
        ctx.output.kv("Total", &format_price(total));
    }
    Ok(())
}

fn count(ctx: &Context) -> Result<()> {
    let count = ctx.cart().get_item_count();
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "count": count }));
    } else {
        ctx.output.kv("Items", &count.to_string());
    }
    Ok(())
}

/// Print the outcome of a mutation along with the affected line.
fn report(ctx: &Context, msg: &str, product_id: ProductId) {
    let cart = ctx.cart().snapshot();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "item": cart.get(product_id),
            "items": cart.items(),
            "total": cart.total(),
        }));
        return;
    }

    ctx.output.success(msg);
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &format_price(cart.total()));
}
