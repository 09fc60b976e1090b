use mockito::{Matcher, Server};
use musicfinder::catalog::{Catalog, ItunesClient};
use musicfinder::error::{SEARCH_FAILED_MESSAGE, SearchError};
use musicfinder::widget::{RowAction, Widget};

const ADELE_BODY: &str = r#"{
    "resultCount": 1,
    "results": [
        {"trackId": 1, "trackName": "Hello", "artistName": "Adele", "previewUrl": "http://x/1.m4a", "kind": "song"}
    ]
}"#;

fn search_query(term: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("term".into(), term.into()),
        Matcher::UrlEncoded("limit".into(), "10".into()),
    ])
}

#[tokio::test]
async fn test_search_sends_escaped_term_and_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(search_query("Simon & Garfunkel"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .expect(1)
        .create_async()
        .await;

    let client = ItunesClient::with_endpoint(format!("{}/search", server.url()));
    let tracks = client.search("Simon & Garfunkel").await.unwrap();

    assert!(tracks.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_decodes_tracks_in_order() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(search_query("adele"))
        .with_status(200)
        .with_body(
            r#"{"results": [
                {"trackId": 3, "trackName": "Skyfall", "artistName": "Adele", "previewUrl": "http://x/3.m4a"},
                {"trackId": 1, "trackName": "Hello", "artistName": "Adele", "previewUrl": null},
                {"trackId": 2, "trackName": "Easy On Me", "artistName": "Adele"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = ItunesClient::with_endpoint(format!("{}/search", server.url()));
    let tracks = client.search_tracks("adele").await.unwrap();

    let ids: Vec<u64> = tracks.iter().map(|t| t.track_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(tracks[0].preview_url.as_deref(), Some("http://x/3.m4a"));
    assert!(tracks[1].preview_url.is_none());
    assert!(tracks[2].preview_url.is_none());
}

#[tokio::test]
async fn test_search_non_success_status_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = ItunesClient::with_endpoint(format!("{}/search", server.url()));
    let err = client.search("adele").await.unwrap_err();

    assert!(matches!(err, SearchError::Status(_)));
    assert_eq!(err.to_string(), "Failed to fetch music");
}

#[tokio::test]
async fn test_search_malformed_json_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = ItunesClient::with_endpoint(format!("{}/search", server.url()));
    let err = client.search("adele").await.unwrap_err();

    assert!(matches!(err, SearchError::Http(_)));
}

#[tokio::test]
async fn test_widget_adele_scenario() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(search_query("Adele"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ADELE_BODY)
        .expect(1)
        .create_async()
        .await;

    let mut widget = Widget::new(ItunesClient::with_endpoint(format!(
        "{}/search",
        server.url()
    )));
    widget.state_mut().set_query("Adele");
    assert_eq!(widget.search().await.unwrap(), 1);
    mock.assert_async().await;

    let view = widget.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].title, "Hello");
    assert_eq!(view.rows[0].artists, "Adele");
    assert_eq!(view.rows[0].action, RowAction::PlayPreview);
    assert!(view.player.is_none());

    widget.select(0).unwrap();
    let player = widget.view().player.unwrap();
    assert_eq!(player.src, "http://x/1.m4a");
    assert!(player.autoplay);
}

#[tokio::test]
async fn test_widget_failure_keeps_results() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("GET", "/search")
        .match_query(search_query("Adele"))
        .with_status(200)
        .with_body(ADELE_BODY)
        .create_async()
        .await;
    let failing = server
        .mock("GET", "/search")
        .match_query(search_query("broken"))
        .with_status(500)
        .create_async()
        .await;

    let mut widget = Widget::new(ItunesClient::with_endpoint(format!(
        "{}/search",
        server.url()
    )));
    widget.state_mut().set_query("Adele");
    widget.search().await.unwrap();

    widget.state_mut().set_query("broken");
    assert!(widget.search().await.is_err());

    ok.assert_async().await;
    failing.assert_async().await;
    assert_eq!(widget.state().tracks().len(), 1);
    assert_eq!(widget.state().tracks()[0].track_name, "Hello");
    assert_eq!(widget.state().error(), Some(SEARCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_widget_network_failure_sets_error() {
    // Nothing listens on port 1
    let mut widget = Widget::new(ItunesClient::with_endpoint("http://127.0.0.1:1/search"));
    widget.state_mut().set_query("Adele");

    let err = widget.search().await.unwrap_err();
    assert!(matches!(err, SearchError::Http(_)));
    assert!(widget.state().tracks().is_empty());
    assert_eq!(widget.state().error(), Some(SEARCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_search_skips_results_that_are_not_tracks() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(search_query("harry potter"))
        .with_status(200)
        .with_body(
            r#"{"resultCount": 3, "results": [
                {"wrapperType": "track", "kind": "song", "trackId": 7, "trackName": "Hedwig's Theme", "artistName": "John Williams", "previewUrl": "http://x/7.m4a"},
                {"wrapperType": "audiobook", "collectionId": 99, "collectionName": "Harry Potter and the Sorcerer's Stone", "artistName": "J.K. Rowling", "previewUrl": "http://x/99.m4a"},
                {"wrapperType": "track", "kind": "song", "trackId": 8, "trackName": "Harry's Wondrous World", "artistName": "John Williams"}
            ]}"#,
        )
        .create_async()
        .await;

    let mut widget = Widget::new(ItunesClient::with_endpoint(format!(
        "{}/search",
        server.url()
    )));
    widget.state_mut().set_query("harry potter");
    assert_eq!(widget.search().await.unwrap(), 2);

    let ids: Vec<u64> = widget.state().tracks().iter().map(|t| t.track_id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert!(widget.state().error().is_none());
}

#[tokio::test]
async fn test_search_without_results_field_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"errorMessage": "Invalid value(s) for key(s): [mediaType]"}"#)
        .create_async()
        .await;

    let client = ItunesClient::with_endpoint(format!("{}/search", server.url()));
    let err = client.search("adele").await.unwrap_err();

    assert!(matches!(err, SearchError::Http(_)));
}
