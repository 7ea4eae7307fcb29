//! Static marketing page handlers

use askama::Template;
use axum::response::Html;

use crate::error::Result;

/// One gallery entry
struct Photo {
    src: &'static str,
    caption: &'static str,
}

/// Fixed gallery contents; a CMS-backed gallery is out of scope for now
const PHOTOS: [Photo; 6] = [
    Photo { src: "deluxe.jpg", caption: "Deluxe Room Interiors" },
    Photo { src: "premium.jpg", caption: "Valley View from Bed" },
    Photo { src: "suite.jpg", caption: "Family Suite Space" },
    Photo { src: "default.jpg", caption: "Resort Exterior" },
    Photo { src: "deluxe.jpg", caption: "Cozy Corners" },
    Photo { src: "premium.jpg", caption: "Sunrise Views" },
];

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryTemplate {
    photos: &'static [Photo],
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate;

#[derive(Template)]
#[template(path = "corporate.html")]
struct CorporateTemplate;

/// Gallery page
pub async fn gallery() -> Result<Html<String>> {
    let template = GalleryTemplate { photos: &PHOTOS };
    Ok(Html(template.render()?))
}

/// Contact page
pub async fn contact() -> Result<Html<String>> {
    Ok(Html(ContactTemplate.render()?))
}

/// Corporate bookings page
pub async fn corporate() -> Result<Html<String>> {
    Ok(Html(CorporateTemplate.render()?))
}
