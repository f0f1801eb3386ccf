use serde::Serialize;
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6};

/// A fallback peer: IPv6 (or IPv4-mapped) address and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        SeedSpec6 {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        match ip.to_ipv4_mapped() {
            Some(v4) => SocketAddr::new(v4.into(), self.port),
            None => SocketAddr::V6(SocketAddrV6::new(ip, self.port, 0, 0)),
        }
    }
}

pub const SEED6_MAIN: [SeedSpec6; 3] = [
    SeedSpec6::ipv4(94, 156, 35, 109, 11111),
    SeedSpec6::ipv4(185, 218, 124, 52, 11111),
    SeedSpec6::ipv4(213, 91, 128, 67, 11111),
];

pub const SEED6_TEST: [SeedSpec6; 1] = [SeedSpec6::ipv4(94, 156, 35, 109, 19336)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_seeds_map_back_to_ipv4() {
        let seed = SeedSpec6::ipv4(10, 0, 0, 1, 11111);
        assert_eq!(seed.socket_addr().to_string(), "10.0.0.1:11111");
    }

    #[test]
    fn seed_ports_match_network_ports() {
        assert!(SEED6_MAIN.iter().all(|s| s.port == 11111));
        assert!(SEED6_TEST.iter().all(|s| s.port == 19336));
    }
}
