//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{
    Gender, OrganisationalUnitDraft, OrganisationalUnitView, UnitMember, UserDraft, UserView,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
        crate::api::handlers::user_handler::assign_organisational_unit,
        crate::api::handlers::organisational_unit_handler::list_units,
        crate::api::handlers::organisational_unit_handler::create_unit,
        crate::api::handlers::organisational_unit_handler::get_unit,
        crate::api::handlers::organisational_unit_handler::delete_unit,
    ),
    components(
        schemas(
            Gender,
            UserDraft,
            UserView,
            OrganisationalUnitDraft,
            OrganisationalUnitView,
            UnitMember,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Organisational units", description = "Organisational unit endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_routes_and_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"]["/api/v1.0/user/{user_id}"]["put"].is_object());
        assert!(doc["paths"]["/api/v1.0/organisational-unit"]["post"].is_object());
        assert_eq!(
            doc["components"]["schemas"]["UserDraft"]["properties"]["email"]["example"],
            "hujber@test.com"
        );
        assert_eq!(
            doc["components"]["schemas"]["OrganisationalUnitDraft"]["properties"]["name"]
                ["example"],
            "Engineering"
        );
    }
}
