use std::convert::Infallible;

use axum::{
    Json,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

use crate::models::shared::Page;

pub const FLASH_COOKIE: &str = "flash";

/// One-shot messages carried from a write handler to the next rendered page.
///
/// Add this as a handler parameter, then finish with [`Flash::render`] for a
/// page or [`Flash::redirect`] after a write. Rendering consumes the pending
/// message.
pub struct Flash {
    jar: CookieJar,
    messages: Vec<String>,
}

impl Flash {
    /// Renders `data` as a page carrying the pending messages.
    pub fn render<T: Serialize>(self, data: T) -> Response {
        let jar = if self.messages.is_empty() {
            self.jar
        } else {
            self.jar.remove(Cookie::build(FLASH_COOKIE).path("/"))
        };
        let page = Page {
            messages: self.messages,
            data,
        };
        (jar, Json(page)).into_response()
    }

    /// Queues `message` and redirects (303) to `to`.
    pub fn redirect(self, message: impl Into<String>, to: &str) -> Response {
        let cookie = Cookie::build((FLASH_COOKIE, message.into()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (self.jar.add(cookie), Redirect::to(to)).into_response()
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let messages = jar
            .get(FLASH_COOKIE)
            .map(|c| vec![c.value().to_string()])
            .unwrap_or_default();
        Ok(Flash { jar, messages })
    }
}
