#![allow(clippy::unwrap_used)]
// Discovery tests against a local UDP responder standing in for the
// multicast group.

use std::net::SocketAddr;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::net::UdpSocket;

use rokuctl_api::discovery::{self, Discovery};
use rokuctl_api::Error;

const WINDOW: Duration = Duration::from_millis(400);

fn reply(st: &str, location: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\n\
         Cache-Control: max-age=3600\r\n\
         ST: {st}\r\n\
         Location: {location}\r\n\
         USN: uuid:roku:ecp:TEST\r\n\
         \r\n"
    )
}

/// Answer the first M-SEARCH with each of `replies`, returning the request
/// text the responder saw.
async fn spawn_responder(replies: Vec<String>) -> (SocketAddr, tokio::task::JoinHandle<String>) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut buf = [0u8; 2048];
        let (n, from) = socket.recv_from(&mut buf).await.unwrap();
        for reply in replies {
            socket.send_to(reply.as_bytes(), from).await.unwrap();
        }
        String::from_utf8_lossy(&buf[..n]).into_owned()
    });
    (addr, handle)
}

#[tokio::test]
async fn test_discovery_collects_locations() {
    let (addr, responder) = spawn_responder(vec![
        reply("roku:ecp", "http://192.168.1.134:8060/"),
        reply("urn:schemas-upnp-org:device:MediaRenderer:1", "http://192.168.1.7:1400/xml"),
        reply("roku:ecp", "http://192.168.1.20:8060/"),
    ])
    .await;

    let urls = Discovery::default()
        .with_target(addr)
        .with_window(WINDOW)
        .run()
        .await
        .unwrap();

    let request = responder.await.unwrap();
    assert!(request.starts_with("M-SEARCH * HTTP/1.1\r\n"), "{request}");
    assert!(request.contains("ST: roku:ecp\r\n"), "{request}");

    let hosts: Vec<_> = urls.iter().filter_map(discovery::host_of).collect();
    assert_eq!(hosts, ["192.168.1.134", "192.168.1.20"]);
}

#[tokio::test]
async fn test_discovery_no_devices() {
    let (addr, _responder) = spawn_responder(Vec::new()).await;

    let urls = Discovery::default()
        .with_target(addr)
        .with_window(WINDOW)
        .run()
        .await
        .unwrap();

    assert!(urls.is_empty());
}

#[tokio::test]
async fn test_discovery_malformed_location_fails_whole_batch() {
    let (addr, _responder) = spawn_responder(vec![
        reply("roku:ecp", "http://192.168.1.134:8060/"),
        reply("roku:ecp", "not a url"),
    ])
    .await;

    let result = Discovery::default()
        .with_target(addr)
        .with_window(WINDOW)
        .run()
        .await;

    assert!(
        matches!(result, Err(Error::Discovery { .. })),
        "expected Discovery error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_discovery_custom_search_target() {
    const DIAL: &str = "urn:dial-multiscreen-org:service:dial:1";
    let (addr, responder) = spawn_responder(vec![
        reply("roku:ecp", "http://192.168.1.134:8060/"),
        reply(DIAL, "http://192.168.1.134:8060/dial/dd.xml"),
    ])
    .await;

    let urls = Discovery::default()
        .with_target(addr)
        .with_search_target(DIAL)
        .with_window(WINDOW)
        .run()
        .await
        .unwrap();

    let request = responder.await.unwrap();
    assert!(request.contains(&format!("ST: {DIAL}\r\n")), "{request}");

    let found: Vec<&str> = urls.iter().map(url::Url::as_str).collect();
    assert_eq!(found, ["http://192.168.1.134:8060/dial/dd.xml"]);
}
