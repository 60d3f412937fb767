use actix_web::HttpResponse;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Maximum page size for list endpoints
pub const MAX_PAGE_SIZE: i64 = 100;

pub fn default_limit() -> i64 {
    50
}

/// For PATCH fields where `null` means "clear": a present field, null or not,
/// becomes `Some(_)`; pair with `#[serde(default)]` so absence stays `None`.
pub fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Outcome of an owner-scoped delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Whether a record owned by the caller was removed
    #[schema(example = true)]
    pub success: bool,
}

impl DeleteResponse {
    /// 200 with `success: true`, or 404 with `success: false` when nothing
    /// matched the (id, owner) pair.
    pub fn into_response(deleted: bool) -> HttpResponse {
        let body = DeleteResponse { success: deleted };
        if deleted {
            HttpResponse::Ok().json(body)
        } else {
            HttpResponse::NotFound().json(body)
        }
    }
}
