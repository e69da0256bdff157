//! The per-participant ledger record and its match bookkeeping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GeoPoint, UserId, constants};

/// Which side of the market a user is on for the current round.
///
/// A freshly registered user has no role yet (`Option<Role>::None` on the
/// record) until the ride-configuration step assigns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    Rider,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Rider => write!(f, "rider"),
        }
    }
}

impl Role {
    /// Parse the wire form used by the configuration operation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "driver" => Some(Self::Driver),
            "rider" => Some(Self::Rider),
            _ => None,
        }
    }
}

/// A rider matched to a driver, with the boarding/alighting coordinates
/// projected onto the driver's realized path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRider {
    pub id: UserId,
    pub boarding: GeoPoint,
    pub alighting: GeoPoint,
}

/// The driver a rider was matched to, with the rider's projected
/// boarding/alighting coordinates on that driver's path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: UserId,
    pub boarding: GeoPoint,
    pub alighting: GeoPoint,
}

/// One participant's full ledger state.
///
/// Created by registration with defaults, reshaped by ride configuration,
/// and mutated by the assignment engine. Seats are `u32` so the
/// "never negative" capacity invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: UserId,
    pub role: Option<Role>,
    pub source: GeoPoint,
    pub destination: GeoPoint,
    /// Integer balance; drivers earn, riders spend.
    pub token: i64,
    /// Remaining capacity; meaningful only while `role == Some(Driver)`.
    pub seats: u32,
    /// Percent tolerance for route lengthening. Zero means the rider must
    /// already lie on the driver's direct path.
    pub threshold: u32,
    /// Maximum nearest-node distance in kilometers for the on-route test.
    pub radius: f64,
    /// Driver: the realized route. Rider: the matched sub-route.
    pub path: Vec<GeoPoint>,
    /// Riders matched to this driver in the current round.
    pub riders: Vec<MatchedRider>,
    /// The driver this rider was matched to in the current round.
    pub driver: Option<DriverRef>,
    /// Terminal for the round; assigned users are excluded from both
    /// eligibility and assignment until externally reset.
    pub assigned: bool,
}

impl UserRecord {
    /// A freshly registered, not-yet-configured user.
    #[must_use]
    pub fn registered(id: UserId) -> Self {
        Self {
            id,
            role: None,
            source: GeoPoint::zero(),
            destination: GeoPoint::zero(),
            token: constants::REGISTRATION_TOKEN_GRANT,
            seats: 0,
            threshold: 0,
            radius: 0.0,
            path: Vec::new(),
            riders: Vec::new(),
            driver: None,
            assigned: false,
        }
    }

    #[must_use]
    pub fn is_unassigned_driver(&self) -> bool {
        self.role == Some(Role::Driver) && !self.assigned
    }

    #[must_use]
    pub fn is_unassigned_rider(&self) -> bool {
        self.role == Some(Role::Rider) && !self.assigned
    }
}
