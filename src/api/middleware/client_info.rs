//! Caller address and user agent for contact submissions

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::domain::ClientInfo;

/// Extractor for [`ClientInfo`]; never rejects
#[derive(Debug, Clone, Default)]
pub struct RequestClient(pub ClientInfo);

impl<S> FromRequestParts<S> for RequestClient
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(RequestClient(ClientInfo {
            ip_address: client_ip(&parts.headers).or(peer),
            user_agent: header_str(&parts.headers, header::USER_AGENT.as_str()),
        }))
    }
}

/// First `X-Forwarded-For` hop, else `X-Real-IP`
fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = header_str(headers, "x-forwarded-for").and_then(|value| {
        value
            .split(',')
            .next()
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
    });

    forwarded.or_else(|| header_str(headers, "x-real-ip"))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(headers: &[(&str, &str)], peer: Option<SocketAddr>) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let mut request = builder.body(()).unwrap();
        if let Some(addr) = peer {
            request.extensions_mut().insert(ConnectInfo(addr));
        }
        request.into_parts().0
    }

    async fn extract(mut parts: Parts) -> ClientInfo {
        RequestClient::from_request_parts(&mut parts, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn test_forwarded_for_wins() {
        let info = extract(parts(
            &[
                ("x-forwarded-for", "203.0.113.7, 10.0.0.1"),
                ("x-real-ip", "198.51.100.2"),
                ("user-agent", "curl/8.0"),
            ],
            Some("127.0.0.1:5000".parse().unwrap()),
        ))
        .await;

        assert_eq!(info.ip_address.as_deref(), Some("203.0.113.7"));
        assert_eq!(info.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[tokio::test]
    async fn test_real_ip_then_peer() {
        let info = extract(parts(&[("x-real-ip", "198.51.100.2")], None)).await;
        assert_eq!(info.ip_address.as_deref(), Some("198.51.100.2"));

        let info = extract(parts(&[], Some("127.0.0.1:5000".parse().unwrap()))).await;
        assert_eq!(info.ip_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(info.user_agent, None);
    }

    #[tokio::test]
    async fn test_nothing_known() {
        assert_eq!(extract(parts(&[], None)).await, ClientInfo::default());
    }
}
