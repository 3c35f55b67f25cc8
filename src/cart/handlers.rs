use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use super::protocol::{CartsResponse, ErrorResponse, ItemResponse, ResultResponse};
use super::service::CartService;
use super::types::{CartId, ItemId};

fn not_found(detail: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: "Internal server error.".to_string(),
        }),
    )
        .into_response()
}

pub async fn handle_list_carts(Extension(service): Extension<Arc<CartService>>) -> Response {
    match service.list_carts().await {
        Ok(carts) => (StatusCode::OK, Json(CartsResponse { carts })).into_response(),
        Err(e) => {
            tracing::error!("Failed to list carts: {}", e);
            internal_error()
        }
    }
}

pub async fn handle_get_cart(
    Extension(service): Extension<Arc<CartService>>,
    Path(cart_id): Path<CartId>,
) -> Response {
    match service.get_cart(cart_id).await {
        Ok(Some(cart)) => (StatusCode::OK, Json(cart)).into_response(),
        Ok(None) => not_found("Cart not found."),
        Err(e) => {
            tracing::error!("Failed to fetch cart {}: {}", cart_id, e);
            internal_error()
        }
    }
}

pub async fn handle_add_item(
    Extension(service): Extension<Arc<CartService>>,
    Path((cart_id, item_name, quantity)): Path<(CartId, String, i64)>,
) -> Response {
    if quantity <= 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "Quantity must be greater than 0.".to_string(),
            }),
        )
            .into_response();
    }

    match service.add_item(cart_id, &item_name, quantity).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Err(e) => {
            tracing::error!("Failed to add item to cart {}: {}", cart_id, e);
            internal_error()
        }
    }
}

pub async fn handle_get_item(
    Extension(service): Extension<Arc<CartService>>,
    Path((cart_id, item_id)): Path<(CartId, ItemId)>,
) -> Response {
    match service.get_item(cart_id, item_id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(ItemResponse { item })).into_response(),
        Ok(None) => not_found("Item not found."),
        Err(e) => {
            tracing::error!("Failed to fetch item {} from cart {}: {}", item_id, cart_id, e);
            internal_error()
        }
    }
}

pub async fn handle_delete_cart(
    Extension(service): Extension<Arc<CartService>>,
    Path(cart_id): Path<CartId>,
) -> Response {
    match service.delete_cart(cart_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ResultResponse {
                result: "Cart deleted.".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => not_found("Cart not found."),
        Err(e) => {
            tracing::error!("Failed to delete cart {}: {}", cart_id, e);
            internal_error()
        }
    }
}

pub async fn handle_delete_item(
    Extension(service): Extension<Arc<CartService>>,
    Path((cart_id, item_id)): Path<(CartId, ItemId)>,
) -> Response {
    match service.delete_item(cart_id, item_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ResultResponse {
                result: "Item deleted.".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => not_found("Item not found."),
        Err(e) => {
            tracing::error!("Failed to delete item {} from cart {}: {}", item_id, cart_id, e);
            internal_error()
        }
    }
}

pub async fn handle_remove_quantity(
    Extension(service): Extension<Arc<CartService>>,
    Path((cart_id, item_id, quantity)): Path<(CartId, ItemId, i64)>,
) -> Response {
    match service.remove_quantity(cart_id, item_id, quantity).await {
        Ok(removed) if removed > 0 => (
            StatusCode::OK,
            Json(ResultResponse {
                result: format!("{} items removed.", removed),
            }),
        )
            .into_response(),
        Ok(_) => not_found("Item not found."),
        Err(e) => {
            tracing::error!(
                "Failed to remove quantity of item {} from cart {}: {}",
                item_id,
                cart_id,
                e
            );
            internal_error()
        }
    }
}

pub async fn handle_clear_carts(Extension(service): Extension<Arc<CartService>>) -> Response {
    match service.clear_carts().await {
        Ok(()) => {
            tracing::info!("Cleared all carts");
            (
                StatusCode::OK,
                Json(ResultResponse {
                    result: "carts cleared".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to clear carts: {}", e);
            internal_error()
        }
    }
}
