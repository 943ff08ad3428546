use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::debug;

/// JSON body extractor whose rejection is an empty `400 Bad Request`,
/// regardless of whether the body was malformed, mistyped or sent with the
/// wrong content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogJson<T>(pub T);

impl<S, T> FromRequest<S> for CatalogJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "rejected request body"
                );
                Err(StatusCode::BAD_REQUEST)
            }
        }
    }
}
