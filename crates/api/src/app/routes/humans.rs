//! `/humans` CRUD resource plus the nested `/favorites` sub-resource.
//!
//! PATCH and the favorites mutations are read-modify-write cycles over
//! plain `replace`: if the human is deleted between the read and the
//! replace, the lost race surfaces as 404, never as a server error.
//! Concurrent PATCHes are last-writer-wins by the same token.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use foodlab_humans::{Favorite, Human, HumanPatch};
use foodlab_repository::Entity;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_humans).post(create_human))
        .route(
            "/:id",
            get(get_human)
                .put(replace_human)
                .patch(update_human)
                .delete(delete_human),
        )
        .route("/:id/favorites", get(list_favorites))
        .route(
            "/:id/favorites/:meal_id",
            get(get_favorite).put(add_favorite).delete(delete_favorite),
        )
}

pub async fn list_humans(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.humans().get_all())).into_response()
}

pub async fn create_human(
    Extension(services): Extension<Arc<AppServices>>,
    Json(value): Json<Human>,
) -> axum::response::Response {
    match services.humans().add(value) {
        Ok(human) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/humans/{}", human.id()))],
            Json(human),
        )
            .into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn get_human(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.humans().find(&id) {
        Some(human) => (StatusCode::OK, Json(human)).into_response(),
        None => errors::human_not_found(),
    }
}

pub async fn replace_human(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
    Json(value): Json<Human>,
) -> axum::response::Response {
    let human = Entity::new(id, value);
    if services.humans().replace(&human) {
        (StatusCode::OK, Json(human)).into_response()
    } else {
        errors::human_not_found()
    }
}

pub async fn update_human(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
    Json(patch): Json<HumanPatch>,
) -> axum::response::Response {
    let Some(current) = services.humans().find(&id) else {
        return errors::human_not_found();
    };

    let updated = Entity::new(id, current.value().merge(&patch));
    if services.humans().replace(&updated) {
        (StatusCode::OK, Json(updated)).into_response()
    } else {
        // The human was deleted between the read and the replace.
        errors::human_not_found()
    }
}

pub async fn delete_human(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    services.humans().delete(&id);
    StatusCode::NO_CONTENT.into_response()
}

pub async fn list_favorites(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<u64>,
) -> axum::response::Response {
    match services.humans().find(&id) {
        Some(human) => (StatusCode::OK, Json(&human.value().favorites)).into_response(),
        None => errors::human_not_found(),
    }
}

pub async fn get_favorite(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, meal_id)): Path<(u64, u64)>,
) -> axum::response::Response {
    let favorite = Favorite::of(meal_id);
    match services.humans().find(&id) {
        Some(human) if human.value().favorites.contains(&favorite) => {
            (StatusCode::OK, Json(favorite)).into_response()
        }
        _ => errors::favorite_not_found(),
    }
}

/// Adding a favorite that already exists is treated as success.
pub async fn add_favorite(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, meal_id)): Path<(u64, u64)>,
) -> axum::response::Response {
    let Some(current) = services.humans().find(&id) else {
        return errors::human_not_found();
    };

    let favorite = Favorite::of(meal_id);
    let updated = Entity::new(id, current.value().with_favorite(favorite));
    if services.humans().replace(&updated) {
        (StatusCode::OK, Json(favorite)).into_response()
    } else {
        // The human was deleted between the read and the replace.
        errors::human_not_found()
    }
}

/// Deleting a favorite that no longer exists is treated as success.
pub async fn delete_favorite(
    Extension(services): Extension<Arc<AppServices>>,
    Path((id, meal_id)): Path<(u64, u64)>,
) -> axum::response::Response {
    let Some(current) = services.humans().find(&id) else {
        return errors::human_not_found();
    };

    let updated = Entity::new(id, current.value().without_favorite(Favorite::of(meal_id)));
    if services.humans().replace(&updated) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        // The human was deleted between the read and the replace.
        errors::human_not_found()
    }
}
