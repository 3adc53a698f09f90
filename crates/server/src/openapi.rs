use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::stores::create,
        crate::routes::stores::get,
        crate::routes::stores::delete,
    ),
    components(
        schemas(
            HealthResponse,
            models::store::Model,
            crate::routes::stores::CreateStoreRequest,
            crate::errors::ErrorMessage,
        )
    ),
    tags(
        (name = "health"),
        (name = "stores")
    )
)]
pub struct ApiDoc;
