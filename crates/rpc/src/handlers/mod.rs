use std::net::IpAddr;

use actix_web::HttpRequest;

pub mod count;
pub mod health;
pub mod registration;
pub mod validator_key;

/// Peer IP for quota accounting; absent for in-process test calls.
pub(crate) fn peer_ip(request: &HttpRequest) -> Option<IpAddr> {
    request.peer_addr().map(|addr| addr.ip())
}
