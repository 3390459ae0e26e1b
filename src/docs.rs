use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use account_master_models::{
    CreateUserDto, ErrorResponse, MessageResponse, ProfileId, UpdateUserDto, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            ProfileId,
            CreateUserDto,
            UpdateUserDto,
            UserResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User account management")
    ),
    info(
        title = "Account Master API",
        version = "0.1.0",
        description = "In-memory user accounts behind HTTP Basic authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            )
        }
    }
}
