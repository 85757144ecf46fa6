use std::net::SocketAddr;

/// HTTP server configuration, assembled by the binary from CLI arguments.
#[derive(Clone, Copy, Debug)]
pub struct RpcServerConfig {
    pub http_socket_address: SocketAddr,
    pub http_allow_origin: bool,
}

impl RpcServerConfig {
    pub fn new(http_socket_address: SocketAddr, http_allow_origin: bool) -> Self {
        Self {
            http_socket_address,
            http_allow_origin,
        }
    }
}
