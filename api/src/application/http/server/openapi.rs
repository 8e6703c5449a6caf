use utoipa::OpenApi;

use crate::application::http::{
    health::router::HealthApiDoc, profile::router::ProfileApiDoc,
    recommendation::router::RecommendationApiDoc, restaurant::router::RestaurantApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartEats API"
    )
)]
struct ApiDocBase;

pub struct ApiDoc;

// The derive macro rejects `nest(path = "", ...)` even though the runtime
// `OpenApi::nest` treats an empty base path as a plain merge. This impl is the
// exact expansion of nesting each sub-doc at the root path.
impl utoipa::OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiDocBase::openapi()
            .nest("", UserApiDoc::openapi())
            .nest("", ProfileApiDoc::openapi())
            .nest("", RecommendationApiDoc::openapi())
            .nest("", RestaurantApiDoc::openapi())
            .nest("", HealthApiDoc::openapi())
    }
}
