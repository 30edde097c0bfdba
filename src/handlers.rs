//! Post handlers, one per [`Route`](crate::Route).
//!
//! Every handler has the shape
//! `fn(&mut PostStore, &Request) -> Result<Json<_>, ApiError>`: validation
//! failures short-circuit with `?`, and the dispatcher turns whichever arm
//! comes back into exactly one response.

use crate::error::ApiError;
use crate::request::Request;
use crate::response::Json;
use crate::store::{Post, PostStore, RestoreOutcome};

/// `/posts.get`: every active post, newest first.
pub fn list(store: &mut PostStore, _req: &Request) -> Json<Vec<Post>> {
    Json(store.list_active())
}

/// `/posts.getById?id=`
pub fn get_by_id(store: &mut PostStore, req: &Request) -> Result<Json<Post>, ApiError> {
    let id = post_id(req)?.ok_or(ApiError::NotFound)?;
    store.find_by_id(id, false)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `/posts.post?content=`. An empty `content` is still content.
pub fn create(store: &mut PostStore, req: &Request) -> Result<Json<Post>, ApiError> {
    let content = req.param("content").ok_or(ApiError::Validation("content"))?;
    Ok(Json(store.create(content)))
}

/// `/posts.edit?id=&content=`
///
/// The post is looked up before `content` is checked, so an unknown id is a
/// 404 even when `content` is missing too.
pub fn edit(store: &mut PostStore, req: &Request) -> Result<Json<Post>, ApiError> {
    let id = post_id(req)?
        .filter(|&id| store.find_by_id(id, false).is_some())
        .ok_or(ApiError::NotFound)?;
    let content = req.param("content").ok_or(ApiError::Validation("content"))?;
    store.edit(id, content).map(Json).ok_or(ApiError::NotFound)
}

/// `/posts.delete?id=`
pub fn delete(store: &mut PostStore, req: &Request) -> Result<Json<Post>, ApiError> {
    let id = post_id(req)?.ok_or(ApiError::NotFound)?;
    store.soft_delete(id).map(Json).ok_or(ApiError::NotFound)
}

/// `/posts.restore?id=`
pub fn restore(store: &mut PostStore, req: &Request) -> Result<Json<Post>, ApiError> {
    let id = post_id(req)?.ok_or(ApiError::NotFound)?;
    match store.restore(id) {
        RestoreOutcome::Restored(post) => Ok(Json(post)),
        RestoreOutcome::AlreadyActive => Err(ApiError::Conflict),
        RestoreOutcome::NotFound => Err(ApiError::NotFound),
    }
}

/// Validates the `id` parameter.
///
/// `Err` for a missing or non-numeric id. `Ok(None)` for a number that no
/// post can carry (zero, negative, fractional, infinite or out of range).
fn post_id(req: &Request) -> Result<Option<u64>, ApiError> {
    let n = req.numeric_param("id")?;
    let id = (n.fract() == 0.0 && n >= 1.0 && n < u64::MAX as f64).then_some(n as u64);
    Ok(id)
}
