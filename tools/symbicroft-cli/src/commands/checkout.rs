//! Checkout payload commands.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use symbicroft_commerce::checkout::{
    endpoints, CreateOrderData, CreatePaymentOrderRequest, CustomerDetails,
};

use super::{CheckoutArgs, CheckoutCommand};
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CheckoutCommand::Order {
            name,
            email,
            phone,
            address,
        } => {
            let customer = CustomerDetails {
                customer_name: name,
                customer_email: email,
                customer_phone: phone,
                shipping_address: address,
            };
            order(customer, ctx)
        }
        CheckoutCommand::Payment { receipt } => payment(receipt, ctx),
    }
}

fn order(customer: CustomerDetails, ctx: &Context) -> Result<()> {
    let cart = ctx.cart().snapshot();
    let data = CreateOrderData::from_cart(customer, &cart).context("Cannot build order")?;

    ctx.output.header(&format!("POST {}", endpoints::ORDERS));
    ctx.output.json(&data);
    Ok(())
}

fn payment(receipt: Option<String>, ctx: &Context) -> Result<()> {
    let cart = ctx.cart().snapshot();
    let currency = ctx.config.currency()?;
    let receipt = receipt
        .unwrap_or_else(|| receipt_reference(&ctx.config.checkout.receipt_prefix, Utc::now()));

    let request = CreatePaymentOrderRequest::for_cart(&cart)
        .context("Cannot build payment order")?
        .with_currency(currency)
        .with_receipt(receipt);

    ctx.output.header(&format!("POST {}", endpoints::PAYMENT_CREATE_ORDER));
    ctx.output.json(&request);
    ctx.output.kv("Amount", &request.money().display());
    Ok(())
}

/// Receipt reference like `rcpt_20261019120000`.
fn receipt_reference(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}", prefix, at.format("%Y%m%d%H%M%S"))
}
