use crate::api::{batch, dashboard, employee, payment};
use actix_web::web;

/// Mount the dashboard surface under `prefix` (e.g. `/dashboard`).
pub fn configure(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(
        web::scope(prefix)
            // /dashboard
            .service(web::resource("").route(web::get().to(dashboard::get_dashboard)))
            .service(web::resource("/reload").route(web::post().to(dashboard::reload)))
            .service(web::resource("/bank-accounts").route(web::get().to(dashboard::bank_accounts)))
            .service(
                web::scope("/prompt")
                    .route("/confirm", web::post().to(dashboard::confirm_prompt))
                    .route("/cancel", web::post().to(dashboard::cancel_prompt)),
            )
            .service(
                web::scope("/batches")
                    // /batches
                    .service(web::resource("").route(web::post().to(batch::add_batch)))
                    // /batches/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(batch::rename_batch))
                            .route(web::delete().to(batch::request_delete_batch)),
                    )
                    .service(web::resource("/{id}/edit").route(web::post().to(batch::open_edit_batch)))
                    .service(
                        web::resource("/{id}/payment").route(web::post().to(batch::open_payment)),
                    ),
            )
            .service(web::resource("/edit/close").route(web::post().to(batch::close_edit_batch)))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(web::resource("").route(web::post().to(employee::add_employee)))
                    // before /{id} so it is not taken for an id
                    .service(
                        web::resource("/bulk-upload")
                            .route(web::post().to(employee::bulk_upload))
                            .route(web::get().to(employee::bulk_upload_format)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}").route(web::delete().to(employee::request_delete_employee)),
                    )
                    .service(
                        web::resource("/{id}/assign/{batch_id}")
                            .route(web::put().to(employee::assign_employee)),
                    )
                    .service(
                        web::resource("/{id}/unassign").route(web::put().to(employee::unassign_employee)),
                    ),
            )
            .service(
                web::scope("/payment")
                    .route("/options", web::get().to(payment::payment_options))
                    .route("/preview", web::post().to(payment::preview_payment))
                    .route("/confirm", web::post().to(payment::confirm_payment))
                    .route("/draft", web::post().to(payment::draft_payment))
                    .route("/close", web::post().to(payment::close_payment)),
            ),
    );
}
