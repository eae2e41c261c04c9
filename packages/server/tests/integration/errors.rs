use crate::common::{TestApp, routes};

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get("/no/such/page").await;

    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/venues/abc").await.status, 404);
    assert_eq!(app.get("/artists/abc/edit").await.status, 404);
}

#[tokio::test]
async fn home_renders_without_messages() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HOME).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body, serde_json::json!({ "messages": [] }));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().unwrap();
    for path in ["/", "/venues", "/venues/{id}", "/artists/{id}/edit", "/shows/create"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn search_response_is_documented_as_a_search_page() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    for path in ["/venues/search", "/artists/search"] {
        let schema = &res.body["paths"][path]["post"]["responses"]["200"]["content"]
            ["application/json"]["schema"];
        let schema = match schema["$ref"].as_str() {
            Some(reference) => {
                let name = reference.trim_start_matches("#/components/schemas/");
                &res.body["components"]["schemas"][name]
            }
            None => schema,
        };
        assert_ne!(schema["type"], "array", "{path}");
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("search_term"), "{path}");
        assert!(properties.contains_key("results"), "{path}");
    }
}
