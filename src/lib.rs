//! Decoder/Encoder for Genesys/S-TEC IDU navigation files.
//!
//! Two fixed-size container formats are supported:
//!
//! - [rte]: flight plans (`*.RTE`), an ordered list of [Waypoint]s.
//! - [dat]: the user waypoint database (`user.dat`), a list of
//!   [UserWaypoint]s sorted by identifier.
//!
//! Both formats store some per-waypoint fields one record *ahead* of the
//! waypoint they belong to, because the IDU addresses legs rather than
//! points. The codecs take care of that displacement; callers only ever see
//! plain waypoint lists and byte buffers.
//!
//! ```
//! # #[cfg(feature = "rte")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use genesys_nav::{rte, Waypoint};
//!
//! let route = vec![
//!     Waypoint::new("KJFK", "JOHN F KENNEDY INTL", 40.6399, -73.7787),
//!     Waypoint::new("KLAX", "LOS ANGELES INTL", 33.9425, -118.4081),
//! ];
//!
//! let data = rte::encode_file(&route)?;
//! assert_eq!(rte::route_filename(&route), "JFK-LAX0.RTE");
//!
//! let decoded = rte::decode_file_checked(&data)?;
//! assert_eq!(decoded[1].ident, "KLAX");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "rte"))]
//! # fn main() {}
//! ```

pub mod coord;
pub mod crc;
pub mod framing;
pub mod text;

#[cfg(feature = "dat")]
pub mod dat;
#[cfg(feature = "rte")]
pub mod rte;

/// A single point of a flight plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Identifier, up to 6 printable characters (5 survive the terminator).
    pub ident: String,
    /// Free text description, up to 31 characters (30 survive the terminator).
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(ident: &str, description: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            ident: ident.to_string(),
            description: description.to_string(),
            latitude,
            longitude,
        }
    }
}

/// An entry of the user waypoint database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserWaypoint {
    /// Identifier, up to 5 characters. Determines the sort order of the file.
    pub ident: String,
    /// Name, up to 12 characters.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in feet, stored rounded to the nearest multiple of 10.
    pub elevation: f64,
    pub bearing: u16,
}

impl UserWaypoint {
    pub fn new(ident: &str, name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            ident: ident.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_bearing(mut self, bearing: u16) -> Self {
        self.bearing = bearing;
        self
    }
}
