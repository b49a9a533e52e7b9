//! REST convention helpers.
//!
//! Alert headers, pagination headers, and the wrap-or-not-found response
//! shape the frontend's entity components rely on. Header values here are
//! always ASCII; a value that fails header encoding is dropped rather than
//! aborting the response.

use axum::{
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::Page;

/// Application name prefixed to alert header names and message keys.
pub const APPLICATION_NAME: &str = "portalApp";

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}

fn create_alert(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_header(&mut headers, "x-portalapp-alert", message);
    insert_header(&mut headers, "x-portalapp-params", param);
    headers
}

/// Alert headers announcing a successful entity creation.
pub fn create_entity_creation_alert(entity_name: &str, param: &str) -> HeaderMap {
    create_alert(
        &format!("{}.{}.created", APPLICATION_NAME, entity_name),
        param,
    )
}

/// Alert headers announcing a successful entity update.
pub fn create_entity_update_alert(entity_name: &str, param: &str) -> HeaderMap {
    create_alert(
        &format!("{}.{}.updated", APPLICATION_NAME, entity_name),
        param,
    )
}

/// Alert headers announcing a successful entity deletion.
pub fn create_entity_deletion_alert(entity_name: &str, param: &str) -> HeaderMap {
    create_alert(
        &format!("{}.{}.deleted", APPLICATION_NAME, entity_name),
        param,
    )
}

/// Failure alert headers for a rejected entity operation.
///
/// Carries the dotted error key in `X-portalApp-error` and the entity name
/// in `X-portalApp-params`.
pub fn create_failure_alert(entity_name: &str, error_key: &str, default_message: &str) -> HeaderMap {
    tracing::error!("Entity processing failed, {}", default_message);
    let mut headers = HeaderMap::new();
    insert_header(&mut headers, "x-portalapp-error", &format!("error.{}", error_key));
    insert_header(&mut headers, "x-portalapp-params", entity_name);
    headers
}

fn page_uri(base_url: &str, page: usize, size: usize) -> String {
    format!("{}?page={}&size={}", base_url, page, size)
}

/// `X-Total-Count` and `Link` pagination headers for a page of results.
///
/// `next` and `prev` relations appear only when such a page exists; `last`
/// and `first` are always present, in that order.
pub fn generate_pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert_header(
        &mut headers,
        "x-total-count",
        &page.total_elements.to_string(),
    );

    let mut link = String::new();
    if page.has_next() {
        link.push_str(&format!(
            "<{}>; rel=\"next\",",
            page_uri(base_url, page.number + 1, page.size)
        ));
    }
    if page.has_previous() {
        link.push_str(&format!(
            "<{}>; rel=\"prev\",",
            page_uri(base_url, page.number - 1, page.size)
        ));
    }
    let last_page = page.total_pages().saturating_sub(1) as usize;
    link.push_str(&format!(
        "<{}>; rel=\"last\",",
        page_uri(base_url, last_page, page.size)
    ));
    link.push_str(&format!(
        "<{}>; rel=\"first\"",
        page_uri(base_url, 0, page.size)
    ));

    if let Ok(value) = HeaderValue::from_str(&link) {
        headers.insert(header::LINK, value);
    }

    headers
}

/// 200 with a JSON body when the value is present, empty-body 404 otherwise.
pub fn wrap_or_not_found<T: Serialize>(maybe: Option<T>) -> Response {
    match maybe {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_creation_alert_headers() {
        let headers = create_entity_creation_alert("produto", "7");

        assert_eq!(
            header_str(&headers, "x-portalapp-alert"),
            "portalApp.produto.created"
        );
        assert_eq!(header_str(&headers, "x-portalapp-params"), "7");
    }

    #[test]
    fn test_update_and_deletion_alert_headers() {
        let updated = create_entity_update_alert("produto", "3");
        assert_eq!(
            header_str(&updated, "x-portalapp-alert"),
            "portalApp.produto.updated"
        );

        let deleted = create_entity_deletion_alert("produto", "3");
        assert_eq!(
            header_str(&deleted, "x-portalapp-alert"),
            "portalApp.produto.deleted"
        );
    }

    #[test]
    fn test_failure_alert_headers() {
        let headers = create_failure_alert("produto", "idexists", "already has an ID");

        assert_eq!(header_str(&headers, "x-portalapp-error"), "error.idexists");
        assert_eq!(header_str(&headers, "x-portalapp-params"), "produto");
    }

    #[test]
    fn test_pagination_headers_middle_page() {
        let page: Page<i32> = Page::new(vec![0; 5], 1, 5, 15);
        let headers = generate_pagination_headers(&page, "/api/produtos");

        assert_eq!(header_str(&headers, "x-total-count"), "15");
        assert_eq!(
            header_str(&headers, "link"),
            "</api/produtos?page=2&size=5>; rel=\"next\",\
             </api/produtos?page=0&size=5>; rel=\"prev\",\
             </api/produtos?page=2&size=5>; rel=\"last\",\
             </api/produtos?page=0&size=5>; rel=\"first\""
        );
    }

    #[test]
    fn test_pagination_headers_first_page_has_no_prev() {
        let page: Page<i32> = Page::new(vec![0; 5], 0, 5, 15);
        let headers = generate_pagination_headers(&page, "/api/produtos");

        let link = header_str(&headers, "link");
        assert!(link.contains("rel=\"next\""));
        assert!(!link.contains("rel=\"prev\""));
        assert!(link.contains("</api/produtos?page=2&size=5>; rel=\"last\""));
    }

    #[test]
    fn test_pagination_headers_last_page_has_no_next() {
        let page: Page<i32> = Page::new(vec![0; 5], 2, 5, 15);
        let headers = generate_pagination_headers(&page, "/api/produtos");

        let link = header_str(&headers, "link");
        assert!(!link.contains("rel=\"next\""));
        assert!(link.contains("rel=\"prev\""));
    }

    #[test]
    fn test_pagination_headers_empty_store() {
        let page: Page<i32> = Page::new(vec![], 0, 20, 0);
        let headers = generate_pagination_headers(&page, "/api/produtos");

        assert_eq!(header_str(&headers, "x-total-count"), "0");
        // No next/prev, and last falls back to page 0.
        assert_eq!(
            header_str(&headers, "link"),
            "</api/produtos?page=0&size=20>; rel=\"last\",\
             </api/produtos?page=0&size=20>; rel=\"first\""
        );
    }

    #[test]
    fn test_wrap_or_not_found() {
        let found = wrap_or_not_found(Some(42));
        assert_eq!(found.status(), StatusCode::OK);

        let missing = wrap_or_not_found(None::<i32>);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
