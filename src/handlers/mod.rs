pub mod manufacturers;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        manufacturers::list_manufacturers,
        manufacturers::get_manufacturer,
        manufacturers::create_manufacturer,
        manufacturers::update_manufacturer,
        manufacturers::delete_manufacturer,
    ),
    components(schemas(
        manufacturers::ManufacturerRequest,
        manufacturers::ManufacturerResponse,
        manufacturers::ListManufacturersResponse,
    )),
    tags((name = "manufacturers", description = "Manufacturer catalog"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_manufacturer_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/manufacturers"));
        assert!(doc.paths.paths.contains_key("/manufacturers/{id}"));
    }
}
