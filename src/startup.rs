use crate::configuration::Settings;
use crate::helpers;
use crate::middleware::authentication;
use crate::routes;
use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{dev::Server, error, web, App, HttpResponse, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    // Body the client can act on instead of actix's plain-text default.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = err.to_string();
        let response = HttpResponse::BadRequest().json(helpers::ErrorBody { error: msg.clone() });
        error::InternalError::from_response(msg, response).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(authentication::Manager::new())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .service(routes::index)
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/auth")
                    .service(routes::auth::login_handler)
                    .service(routes::auth::register_handler)
                    .service(routes::auth::me_handler)
                    .service(routes::auth::change_password_handler),
            )
            .service(
                web::scope("/videos")
                    .service(routes::video::get::page_list)
                    .service(routes::video::get::list)
                    .service(routes::video::get::item)
                    .service(routes::video::add::add)
                    .service(routes::video::update::item)
                    .service(routes::video::delete::item),
            )
            .service(
                web::scope("/articles")
                    .service(routes::article::get::by_slug)
                    .service(routes::article::get::list)
                    .service(routes::article::get::item)
                    .service(routes::article::add::add)
                    .service(routes::article::update::item)
                    .service(routes::article::delete::item),
            )
            .service(
                web::scope("/products")
                    .service(routes::product::get::by_slug)
                    .service(routes::product::get::by_category)
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::add::add)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .service(
                web::scope("/webinars")
                    // upcoming has to land before the id matcher
                    .service(routes::webinar::get::upcoming)
                    .service(routes::webinar::get::list)
                    .service(routes::webinar::get::item)
                    .service(routes::webinar::add::add)
                    .service(routes::webinar::update::item)
                    .service(routes::webinar::delete::item),
            )
            .service(
                web::scope("/quotes")
                    .service(routes::quote::add::add)
                    .service(routes::quote::get::list)
                    .service(routes::quote::get::item),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
