use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::manufacturer_service::ManufacturerService;
use crate::domain::errors::DomainError;
use crate::domain::manufacturer::{ManufacturerDto, ManufacturerId, Page};
use crate::domain::ports::ManufacturerRepository;
use crate::errors::AppError;

/// Service as shared across actix workers.
pub type SharedService = ManufacturerService<Box<dyn ManufacturerRepository>>;

const MAX_PAGE_SIZE: i64 = 100;
/// Column width of `manufacturers.name`.
const MAX_NAME_LENGTH: usize = 255;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ManufacturerRequest {
    pub name: String,
    pub description: String,
    /// Optional leading `+` followed by 6 to 15 digits, e.g. "+123456789"
    pub phone_number: String,
}

impl ManufacturerRequest {
    /// Trims every field and rejects blanks, over-long names and malformed
    /// phone numbers.
    pub fn into_dto(self) -> Result<ManufacturerDto, DomainError> {
        let name = required("name", self.name)?;
        let description = required("description", self.description)?;
        let phone_number = required("phone_number", self.phone_number)?;

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::InvalidInput(format!(
                "name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        if !is_valid_phone_number(&phone_number) {
            return Err(DomainError::InvalidInput(format!(
                "phone_number '{}' is not a valid phone number",
                phone_number
            )));
        }

        Ok(ManufacturerDto::new(name, description, phone_number))
    }
}

fn required(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn is_valid_phone_number(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (6..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ManufacturerResponse {
    pub id: Option<ManufacturerId>,
    pub name: String,
    pub description: String,
    pub phone_number: String,
}

impl From<ManufacturerDto> for ManufacturerResponse {
    fn from(dto: ManufacturerDto) -> Self {
        ManufacturerResponse {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            phone_number: dto.phone_number,
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListManufacturersParams {
    /// Page number (0-based). Defaults to 0.
    #[serde(default)]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    20
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListManufacturersResponse {
    pub items: Vec<ManufacturerResponse>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
}

impl From<Page<ManufacturerDto>> for ListManufacturersResponse {
    fn from(page: Page<ManufacturerDto>) -> Self {
        let total_pages = page.total_pages();
        ListManufacturersResponse {
            total: page.total_elements,
            page: page.page,
            size: page.size,
            total_pages,
            items: page.content.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/manufacturers")
            .route("", web::get().to(list_manufacturers))
            .route("", web::post().to(create_manufacturer))
            .route("/{id}", web::get().to(get_manufacturer))
            .route("/{id}", web::put().to(update_manufacturer))
            .route("/{id}", web::delete().to(delete_manufacturer)),
    );
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /manufacturers
///
/// Returns a page of manufacturers that are not soft-deleted, ordered by id.
#[utoipa::path(
    get,
    path = "/manufacturers",
    params(ListManufacturersParams),
    responses(
        (status = 200, description = "Page of active manufacturers", body = ListManufacturersResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "manufacturers"
)]
pub async fn list_manufacturers(
    service: web::Data<SharedService>,
    query: web::Query<ListManufacturersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(0);
    let size = params.size.clamp(1, MAX_PAGE_SIZE);

    let result = web::block(move || service.find_all_active(page, size))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListManufacturersResponse::from(result)))
}

/// GET /manufacturers/{id}
///
/// Soft-deleted manufacturers are still returned.
#[utoipa::path(
    get,
    path = "/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer id"),
    ),
    responses(
        (status = 200, description = "Manufacturer found", body = ManufacturerResponse),
        (status = 404, description = "Manufacturer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "manufacturers"
)]
pub async fn get_manufacturer(
    service: web::Data<SharedService>,
    path: web::Path<ManufacturerId>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let dto = web::block(move || service.find_by_id(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ManufacturerResponse::from(dto)))
}

/// POST /manufacturers
#[utoipa::path(
    post,
    path = "/manufacturers",
    request_body = ManufacturerRequest,
    responses(
        (status = 201, description = "Manufacturer created", body = ManufacturerResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Name or phone number already taken"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "manufacturers"
)]
pub async fn create_manufacturer(
    service: web::Data<SharedService>,
    body: web::Json<ManufacturerRequest>,
) -> Result<HttpResponse, AppError> {
    let dto = body.into_inner().into_dto()?;

    let created = web::block(move || service.create(dto))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ManufacturerResponse::from(created)))
}

/// PUT /manufacturers/{id}
///
/// Replaces name, description and phone number. Keeping the current name or
/// phone number is allowed.
#[utoipa::path(
    put,
    path = "/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer id"),
    ),
    request_body = ManufacturerRequest,
    responses(
        (status = 200, description = "Manufacturer updated", body = ManufacturerResponse),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Manufacturer not found"),
        (status = 409, description = "Name or phone number held by another manufacturer"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "manufacturers"
)]
pub async fn update_manufacturer(
    service: web::Data<SharedService>,
    path: web::Path<ManufacturerId>,
    body: web::Json<ManufacturerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let dto = body.into_inner().into_dto()?;

    let updated = web::block(move || service.update(id, dto))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ManufacturerResponse::from(updated)))
}

/// DELETE /manufacturers/{id}
///
/// Soft delete; the manufacturer disappears from listings only.
#[utoipa::path(
    delete,
    path = "/manufacturers/{id}",
    params(
        ("id" = i64, Path, description = "Manufacturer id"),
    ),
    responses(
        (status = 204, description = "Manufacturer deleted"),
        (status = 404, description = "Manufacturer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "manufacturers"
)]
pub async fn delete_manufacturer(
    service: web::Data<SharedService>,
    path: web::Path<ManufacturerId>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.delete_by_id(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
