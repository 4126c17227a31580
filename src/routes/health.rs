use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
