use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use cart_service::cart::handlers::{
    handle_add_item, handle_clear_carts, handle_delete_cart, handle_delete_item, handle_get_cart,
    handle_get_item, handle_list_carts, handle_remove_quantity,
};
use cart_service::cart::service::CartService;
use cart_service::store::memory::MemoryBackend;
use cart_service::store::repository::CartRepository;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("CART_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    // 1. Store adapter and domain logic, built once for the process lifetime:
    let backend = Arc::new(MemoryBackend::new());
    let repo = Arc::new(CartRepository::new(backend));
    let service = Arc::new(CartService::new(repo));

    // 2. HTTP Router:
    //    /cart/clear matches ahead of /cart/:cart_id (static over param); the
    //    three-segment route serves both add-item (POST, middle segment is a
    //    name) and remove-quantity (DELETE, middle segment is an item id).
    let app = Router::new()
        .route("/cart", get(handle_list_carts))
        .route("/cart/clear", delete(handle_clear_carts))
        .route(
            "/cart/:cart_id",
            get(handle_get_cart).delete(handle_delete_cart),
        )
        .route(
            "/cart/:cart_id/:item_id",
            get(handle_get_item).delete(handle_delete_item),
        )
        .route(
            "/cart/:cart_id/:item_id/:quantity",
            post(handle_add_item).delete(handle_remove_quantity),
        )
        .layer(Extension(service));

    // 3. Start HTTP server:
    tracing::info!("Cart service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
