pub mod contact;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new().route("/contact", get(contact::list).post(contact::submit))
}
