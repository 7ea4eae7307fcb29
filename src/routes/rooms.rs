//! Room listing and availability route handlers

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    Form,
};

use crate::error::Result;
use crate::models::Room;
use crate::pricing::{quote_rooms, AvailabilityForm, RoomQuote, StayRequest};
use crate::AppState;

/// Homepage template listing the catalog
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    rooms: Vec<Room>,
    has_rooms: bool,
}

/// Availability page template
///
/// Covers all three states of the page: the empty form, a validation
/// message, and a rendered quote list.
#[derive(Template)]
#[template(path = "availability.html")]
struct AvailabilityTemplate {
    results: Vec<RoomQuote>,
    has_results: bool,
    error: String,
    has_error: bool,
    nights: i64,
    checkin: String,
    checkout: String,
}

impl AvailabilityTemplate {
    fn empty() -> Self {
        Self {
            results: vec![],
            has_results: false,
            error: String::new(),
            has_error: false,
            nights: 0,
            checkin: String::new(),
            checkout: String::new(),
        }
    }
}

/// Homepage: all rooms in catalog order
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let rooms = state.cache.get_rooms(&state.db).await?;

    let template = HomeTemplate {
        has_rooms: !rooms.is_empty(),
        rooms: rooms.as_ref().clone(),
    };

    Ok(Html(template.render()?))
}

/// Availability page: empty search form
pub async fn availability_form() -> Result<Html<String>> {
    Ok(Html(AvailabilityTemplate::empty().render()?))
}

/// Availability page: quote every room for the submitted stay.
///
/// Validation failures render back into the form with a message rather
/// than an error status; the catalog is never touched before the dates
/// validate.
pub async fn availability_quote(
    State(state): State<AppState>,
    Form(form): Form<AvailabilityForm>,
) -> Result<Html<String>> {
    let stay = match StayRequest::parse(&form) {
        Ok(stay) => stay,
        Err(e) => {
            let template = AvailabilityTemplate {
                error: e.to_string(),
                has_error: true,
                checkin: form.checkin,
                checkout: form.checkout,
                ..AvailabilityTemplate::empty()
            };
            return Ok(Html(template.render()?));
        }
    };

    let rooms = state.cache.get_rooms(&state.db).await?;
    let results = quote_rooms(&stay, &rooms);

    let template = AvailabilityTemplate {
        has_results: true,
        results,
        nights: stay.total_nights(),
        checkin: form.checkin,
        checkout: form.checkout,
        ..AvailabilityTemplate::empty()
    };

    Ok(Html(template.render()?))
}
