// SPDX-License-Identifier: MPL-2.0
//! Drives `DogApi` against a canned HTTP server on localhost.

use dog_gallery::api::{DogApi, FetchFailure};
use dog_gallery::config::ApiConfig;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const AFGHAN: &str = "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg";

/// (path, HTTP status, body)
type Route = (&'static str, u16, &'static str);

const NOT_FOUND_BODY: &str =
    r#"{"status":"error","message":"Breed not found (master breed does not exist)","code":404}"#;

/// Serves `routes` until the test ends. Unknown paths get the dog.ceo 404 envelope.
async fn serve(routes: Vec<Route>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = vec![0_u8; 8192];
            let mut read = 0;
            loop {
                let n = stream.read(&mut buf[read..]).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request = String::from_utf8_lossy(&buf[..read]);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes
                .iter()
                .find(|(route, _, _)| *route == path)
                .map_or((404, NOT_FOUND_BODY), |(_, status, body)| (*status, *body));
            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Internal Server Error",
            };

            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    addr
}

fn api_for(addr: SocketAddr, breed: &str, count: u32) -> DogApi {
    DogApi::new(&ApiConfig {
        base_url: format!("http://{addr}/api"),
        thumbnail_breed: breed.to_string(),
        thumbnail_count: count,
    })
    .expect("HTTP client")
}

#[tokio::test]
async fn random_image_is_parsed_with_breed() {
    let body = r#"{"message":"https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg","status":"success"}"#;
    let addr = serve(vec![("/api/breeds/image/random", 200, body)]).await;

    let dog = api_for(addr, "hound", 10)
        .fetch_random_image()
        .await
        .expect("random image");

    assert_eq!(dog.image, AFGHAN);
    assert_eq!(dog.breed, "hound-afghan");
}

#[tokio::test]
async fn image_batch_uses_configured_breed_and_count() {
    let body = r#"{"message":[
        "https://images.dog.ceo/breeds/hound-basset/n02088238_1.jpg",
        "https://images.dog.ceo/breeds/hound-blood/n02088466_2.jpg",
        "https://images.dog.ceo/breeds/hound-walker/n02089867_3.jpg"
    ],"status":"success"}"#;
    let addr = serve(vec![("/api/breed/hound/images/random/3", 200, body)]).await;

    let batch = api_for(addr, "hound", 3)
        .fetch_image_batch()
        .await
        .expect("thumbnail batch");

    let breeds: Vec<_> = batch.iter().map(|t| t.dog.breed.as_str()).collect();
    assert_eq!(breeds, ["hound-basset", "hound-blood", "hound-walker"]);
    let ids: Vec<_> = batch.iter().map(|t| t.id).collect();
    assert_eq!(ids, [0, 1, 2]);
}

#[tokio::test]
async fn unknown_breed_reports_api_status() {
    let addr = serve(Vec::new()).await;

    let result = api_for(addr, "nosuchbreed", 10).fetch_image_batch().await;

    assert_eq!(
        result,
        Err(FetchFailure::Api {
            status: "error".to_string()
        })
    );
}

#[tokio::test]
async fn server_error_without_envelope_reports_http_status() {
    let addr = serve(vec![("/api/breeds/image/random", 500, "upstream down")]).await;

    let result = api_for(addr, "hound", 10).fetch_random_image().await;

    assert_eq!(result, Err(FetchFailure::Http(500)));
}

#[tokio::test]
async fn garbage_body_is_decode_failure() {
    let addr = serve(vec![("/api/breeds/image/random", 200, "<html>maintenance</html>")]).await;

    let result = api_for(addr, "hound", 10).fetch_random_image().await;

    assert!(matches!(result, Err(FetchFailure::Decode(_))));
}

#[tokio::test]
async fn image_bytes_are_returned_verbatim() {
    let addr = serve(vec![("/breeds/hound-afghan/a.jpg", 200, "not-really-a-jpeg")]).await;
    let api = api_for(addr, "hound", 10);

    let bytes = api
        .fetch_image_bytes(&format!("http://{addr}/breeds/hound-afghan/a.jpg"))
        .await
        .expect("image bytes");

    assert_eq!(bytes, b"not-really-a-jpeg");
}

#[tokio::test]
async fn closed_port_is_transport_failure() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("local addr")
    };

    let result = api_for(addr, "hound", 10).fetch_random_image().await;

    assert!(matches!(result, Err(FetchFailure::Transport(_))));
}
