/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Dispatcher tests against a mocked transport: auth gating, silo redirect
//! resolution, error wrapping and endpoint composition.

use mockito::Matcher;
use photobucket::api::{
    Album, ApiRequest, AuthMode, Client, Creds, GroupAlbums, HttpMethod, Identifier,
    PhotobucketError, oauth,
};
use std::io::{Read, Write};

fn full_creds() -> Creds {
    Creds::from_tokens("key", "secret", Some("token"), Some("token_secret"))
}

fn anonymous_creds() -> Creds {
    Creds::from_tokens("key", "secret", None, None)
}

const OK_BODY: &str = r#"{"status":"OK","content":{}}"#;

#[tokio::test]
async fn required_auth_without_token_fails_before_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Client::with_domain(anonymous_creds(), &server.host_with_port());
    let err = client.ping(HttpMethod::Get).await.unwrap_err();

    assert!(matches!(err, PhotobucketError::Auth(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn anonymous_request_is_tolerated_when_auth_not_required() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("oauth_consumer_key".into(), "key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = Client::with_domain(anonymous_creds(), &server.host_with_port());
    let resp = client
        .execute(ApiRequest::new(HttpMethod::Get, "ping").auth(AuthMode::NotRequired))
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.envelope().unwrap().status.as_deref(), Some("OK"));
    mock.assert_async().await;
}

#[tokio::test]
async fn silo_redirect_reassigns_subdomain_and_retries_once() {
    let mut silo_a = mockito::Server::new_async().await;
    let mut silo_b = mockito::Server::new_async().await;

    let redirect_body = format!(
        r#"{{"content":{{"subdomain":"http://{}"}}}}"#,
        silo_b.host_with_port()
    );
    let reassigned = silo_a
        .mock("POST", "/album/!")
        .match_query(Matcher::Any)
        .with_status(301)
        .with_body(redirect_body)
        .expect(1)
        .create_async()
        .await;
    let accepted = silo_b
        .mock("POST", "/album/!")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(OK_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(full_creds());
    client.set_subdomain(silo_a.host_with_port());

    let albums = Album::new(client.clone());
    let resp = albums
        .create(&Identifier::new("user"), "holiday")
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(client.subdomain(), silo_b.host_with_port());
    reassigned.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn second_redirect_is_surfaced_as_api_error() {
    let mut silo_a = mockito::Server::new_async().await;
    let mut silo_b = mockito::Server::new_async().await;

    let first_body = format!(
        r#"{{"content":{{"subdomain":"http://{}"}}}}"#,
        silo_b.host_with_port()
    );
    let second_body = r#"{"content":{"subdomain":"http://s999.photobucket.com"}}"#;
    let first = silo_a
        .mock("POST", "/album/!")
        .match_query(Matcher::Any)
        .with_status(301)
        .with_body(first_body)
        .expect(1)
        .create_async()
        .await;
    let second = silo_b
        .mock("POST", "/album/!")
        .match_query(Matcher::Any)
        .with_status(301)
        .with_body(second_body)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(full_creds());
    client.set_subdomain(silo_a.host_with_port());

    let albums = Album::new(client.clone());
    let err = albums
        .create(&Identifier::new("user"), "holiday")
        .await
        .unwrap_err();

    match err {
        PhotobucketError::Api(resp) => assert_eq!(resp.status().as_u16(), 301),
        other => panic!("expected Api error, got {other:?}"),
    }
    // The retry's redirect is not resolved; the stored subdomain stays at
    // the host the first redirect assigned.
    assert_eq!(client.subdomain(), silo_b.host_with_port());
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn malformed_redirect_body_is_a_distinct_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_query(Matcher::Any)
        .with_status(301)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(full_creds());
    client.set_subdomain(server.host_with_port());

    let err = client
        .execute(ApiRequest::new(HttpMethod::Get, "ping").silo(true))
        .await
        .unwrap_err();

    assert!(matches!(err, PhotobucketError::MalformedRedirect(_)));
    assert_eq!(client.subdomain(), server.host_with_port());
    mock.assert_async().await;
}

#[tokio::test]
async fn non_redirect_error_wraps_the_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ping")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"status":"Exception","message":"no such resource"}"#)
        .create_async()
        .await;

    let client = Client::with_domain(full_creds(), &server.host_with_port());
    let err = client.ping(HttpMethod::Get).await.unwrap_err();

    match err {
        PhotobucketError::Api(resp) => {
            assert_eq!(resp.status().as_u16(), 404);
            let envelope = resp.envelope().unwrap();
            assert_eq!(envelope.status.as_deref(), Some("Exception"));
            assert_eq!(envelope.message.as_deref(), Some("no such resource"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    mock.assert_async().await;
}

#[test]
fn unsupported_method_fails_validation() {
    let err = HttpMethod::parse("PATCH").unwrap_err();
    match err {
        PhotobucketError::UnsupportedMethod(method) => assert_eq!(method, "PATCH"),
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
    assert_eq!(HttpMethod::parse("GET").unwrap(), HttpMethod::Get);
    assert_eq!(HttpMethod::parse("DELETE").unwrap(), HttpMethod::Delete);
}

#[tokio::test]
async fn album_rename_composes_identifier_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/album/!")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id".into(), "a%2Fb".into()),
            Matcher::UrlEncoded("name".into(), "renamed".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = Client::with_domain(full_creds(), &server.host_with_port());
    let albums = Album::new(client);
    albums
        .rename(&Identifier::from_segments(["a", "b"]), "renamed")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn user_handle_requests_against_its_base_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/!/url")
        .match_query(Matcher::UrlEncoded("id".into(), "someuser".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = Client::with_domain(full_creds(), &server.host_with_port());
    let users = photobucket::api::Users::new(client);
    users
        .request(
            HttpMethod::Get,
            "/url",
            photobucket::api::ApiParams::new().id(&Identifier::new("someuser")),
            AuthMode::Required,
            false,
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn media_tags_embeds_tag_name_in_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/group/!/tag/vacation")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = Client::with_domain(anonymous_creds(), &server.host_with_port());
    let groups = GroupAlbums::new(client);
    groups
        .media_tags(&Identifier::new("grp"), Some("vacation"), None, None, None)
        .await
        .unwrap();

    mock.assert_async().await;
}

// Minimal single-connection server that records the request line, enough to
// inspect the exact query string reqwest put on the wire.
fn capture_server(body: &'static str) -> (String, std::sync::mpsc::Receiver<String>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 16384];
        let mut head = Vec::new();
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let request_line = String::from_utf8_lossy(&head)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        let _ = stream.shutdown(std::net::Shutdown::Both);
        let _ = tx.send(request_line);
    });
    (format!("127.0.0.1:{port}"), rx)
}

#[tokio::test]
async fn silo_request_signature_covers_canonical_domain() {
    let (host, rx) = capture_server(OK_BODY);

    let creds = full_creds();
    let client = Client::new(creds.clone());
    client.set_subdomain(host.clone());

    let resp = client
        .execute(ApiRequest::new(HttpMethod::Get, "ping").silo(true))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let request_line = rx.recv().unwrap();
    let path_and_query = request_line.split_whitespace().nth(1).unwrap();
    let wire_url = url::Url::parse(&format!("http://{host}{path_and_query}")).unwrap();
    let pairs: Vec<(String, String)> = wire_url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let get = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    let wire_signature = get("oauth_signature");
    let nonce = get("oauth_nonce");
    let timestamp: i64 = get("oauth_timestamp").parse().unwrap();

    // Recomputing over the canonical domain reproduces the wire signature,
    // recomputing over the host actually targeted does not.
    let over_canonical = oauth::signed_params_at(
        &creds,
        Some(("token", "token_secret")),
        HttpMethod::Get,
        "http://api.photobucket.com/ping",
        &[("format".to_owned(), "json".to_owned())],
        timestamp,
        &nonce,
    );
    let canonical_signature = over_canonical
        .iter()
        .find(|(k, _)| k == "oauth_signature")
        .map(|(_, v)| v.clone())
        .unwrap();
    assert_eq!(wire_signature, canonical_signature);

    let over_silo = oauth::signed_params_at(
        &creds,
        Some(("token", "token_secret")),
        HttpMethod::Get,
        &format!("http://{host}/ping"),
        &[("format".to_owned(), "json".to_owned())],
        timestamp,
        &nonce,
    );
    let silo_signature = over_silo
        .iter()
        .find(|(k, _)| k == "oauth_signature")
        .map(|(_, v)| v.clone())
        .unwrap();
    assert_ne!(wire_signature, silo_signature);
}
