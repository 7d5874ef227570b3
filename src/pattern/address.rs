//! Client address to world coordinate mapping.
//!
//! The upper 16 bits of the IPv4 address select the column and the lower 16
//! bits select the row, each scaled to the world size and shifted so that
//! (0, 0) is the middle of the world.

use std::net::IpAddr;

use crate::schema::Coordinate;

/// Largest value of a 16-bit address half.
const HALF_MAX: f64 = 65535.0;

/// Map a textual network address onto a `width` x `height` world.
///
/// Only the last four bytes of the address are used, so an IPv4-mapped IPv6
/// address lands in the same cell as its IPv4 form. Anything that does not
/// parse as an address maps to the origin.
pub fn map_to_coordinate(address: &str, width: u32, height: u32) -> Coordinate {
    let Some(octets) = ipv4_tail(address) else {
        return Coordinate::ORIGIN;
    };

    let u1 = u16::from_be_bytes([octets[0], octets[1]]);
    let u2 = u16::from_be_bytes([octets[2], octets[3]]);

    Coordinate {
        x: scale_axis(u1, width),
        y: scale_axis(u2, height),
    }
}

/// Last four bytes of a parsed address.
fn ipv4_tail(address: &str) -> Option<[u8; 4]> {
    match address.trim().parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => Some(v4.octets()),
        IpAddr::V6(v6) => {
            let o = v6.octets();
            Some([o[12], o[13], o[14], o[15]])
        }
    }
}

/// Scale a 16-bit value onto `[0, size)` and centre it on `[-size/2, size/2)`.
#[inline]
fn scale_axis(value: u16, size: u32) -> i32 {
    let size = i64::from(size);
    let half = size / 2;
    // Truncating cast. The top is capped at half - 1 so 0xffff, and the last
    // column of an odd-sized world, never land on +size/2.
    let scaled = ((f64::from(value) / HALF_MAX) * size as f64) as i64;
    let scaled = scaled.min((2 * half - 1).max(0));
    (scaled - half) as i32
}
