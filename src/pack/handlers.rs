use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};

use crate::pack::assembler::{self, BUNDLE_FILE_NAME};
use crate::pack::models::CompanyProfileRequest;
use crate::ErrorResponse;

#[utoipa::path(
    context_path = "/api",
    tag = "Template Pack",
    post,
    path = "/generate-pack",
    request_body = CompanyProfileRequest,
    responses(
        (status = 200, description = "ZIP bundle containing the ten pre-filled templates", body = Vec<u8>, content_type = "application/zip"),
        (status = 500, description = "Pack generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_pack(req: web::Json<CompanyProfileRequest>) -> impl Responder {
    let profile = match req.into_inner().validate() {
        Ok(profile) => profile,
        Err(message) => {
            log::error!("Pack generation rejected: {message}");
            return HttpResponse::InternalServerError().json(ErrorResponse::new(message));
        }
    };

    // Document generation is CPU-bound and synchronous; keep it off the
    // actix worker threads.
    match web::block(move || assembler::assemble(&profile)).await {
        Ok(Ok(bundle)) => HttpResponse::Ok()
            .content_type("application/zip")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{BUNDLE_FILE_NAME}\""),
            ))
            .body(bundle),
        Ok(Err(e)) => {
            log::error!("Pack generation failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            log::error!("Pack generation worker failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))
        }
    }
}
