//! Local network address lookup for "Local network URL" browser targets.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

use tracing::debug;

/// Address of the interface the OS would route outbound traffic through.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
/// Falls back to `127.0.0.1` when there is no usable interface.
pub fn local_ip() -> IpAddr {
    match outbound_ip() {
        Ok(ip) if !ip.is_unspecified() => ip,
        Ok(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        Err(e) => {
            debug!(error = %e, "no outbound interface, using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

fn outbound_ip() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80))?;
    Ok(socket.local_addr()?.ip())
}
