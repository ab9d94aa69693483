use tracing::{error, info, Instrument};

use storefront_cart::app_system::{setup_tracing, StorefrontSystem, SystemConfig};
use storefront_cart::checkout::CheckoutForm;
use storefront_cart::domain::{format_vnd, CartState, PaymentMethod, Product};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_filter);

    info!("Starting storefront");

    let system = StorefrontSystem::new(&config);
    let cart = system.cart_client.clone();

    // Cart badge
    cart.subscribe(|state: &CartState| info!(badge = state.item_count(), "Cart changed"))
        .await
        .map_err(|e| e.to_string())?;

    let shirt = Product::new(1, "Áo thun", 10_000)
        .with_detail("Cotton, size M")
        .with_rating(4.5);
    let mug = Product::new(2, "Cốc sứ", 5_000).with_image("https://cdn.example.com/mug.png");

    let span = tracing::info_span!("shopping");
    async {
        cart.add_to_cart(shirt, 2).await?;
        cart.add_one(mug).await?;
        cart.increase_quantity(2).await?;
        // Unknown ids are ignored.
        cart.remove_from_cart(99).await?;
        Ok::<_, storefront_cart::error::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for entry in cart.items().await.map_err(|e| e.to_string())? {
        info!(
            product = %entry.product.name,
            quantity = entry.quantity,
            line_total = %format_vnd(entry.line_total()),
            "Cart entry"
        );
    }

    let span = tracing::info_span!("checkout");
    let receipt = async {
        let request = cart.checkout_request(&[1, 2]).await?;
        info!(subtotal = %request.display_subtotal(), "Checking out");
        let form = CheckoutForm::new(PaymentMethod::Cash, "12 Lê Lợi, Quận 1");
        system.checkout.place_order(1, request, form).await
    }
    .instrument(span)
    .await;

    match receipt {
        Ok(receipt) => info!(
            order_id = receipt.order.id,
            rows = receipt.details.len(),
            total = %format_vnd(receipt.order.total_price),
            "Order placed"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    drop(cart);
    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}
