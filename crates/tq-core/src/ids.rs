//! Identifiers and store-key composition.
//!
//! Every counter the simulator touches lives under a composite key:
//!
//! ```text
//! {department_id}:{person_type_code}:{kind}
//! 42:1:current      ← juridical tickets issued so far at department 42
//! 42:0:total        ← simulated physical-person capacity at department 42
//! ```
//!
//! Person-type codes are the numeric codes used by downstream readers of the
//! store (`PHYSICAL = 0`, `JURIDICAL = 1`); changing them breaks consumers.

use std::fmt;
use std::str::FromStr;

use crate::TqError;

// ── DepartmentId ──────────────────────────────────────────────────────────────

/// Identity of a department as assigned by the upstream catalog.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DepartmentId(pub i64);

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DepartmentId {
    #[inline(always)]
    fn from(id: i64) -> Self {
        DepartmentId(id)
    }
}

// ── PersonType ────────────────────────────────────────────────────────────────

/// Queue category served at a department.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersonType {
    /// Individual customers.
    Physical,
    /// Legal entities.
    Juridical,
}

impl PersonType {
    pub const ALL: [PersonType; 2] = [PersonType::Physical, PersonType::Juridical];

    /// Numeric code embedded in store keys.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            PersonType::Physical  => 0,
            PersonType::Juridical => 1,
        }
    }

    /// Inverse of [`code`][Self::code].
    pub fn from_code(code: u8) -> Option<PersonType> {
        match code {
            0 => Some(PersonType::Physical),
            1 => Some(PersonType::Juridical),
            _ => None,
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PersonType::Physical  => "physical",
            PersonType::Juridical => "juridical",
        })
    }
}

// ── CounterKind ───────────────────────────────────────────────────────────────

/// Which of the two per-window counters a key refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterKind {
    /// Tickets issued so far in the active window.
    Current,
    /// Simulated capacity of the active window.
    Total,
}

impl CounterKind {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            CounterKind::Current => "current",
            CounterKind::Total   => "total",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CounterKey ────────────────────────────────────────────────────────────────

/// A fully-qualified counter address.  `Display` renders the store key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterKey {
    pub department:  DepartmentId,
    pub person_type: PersonType,
    pub kind:        CounterKind,
}

impl CounterKey {
    pub fn new(department: DepartmentId, person_type: PersonType, kind: CounterKind) -> Self {
        Self { department, person_type, kind }
    }

    /// The `current` counter for the same department and person type.
    #[inline]
    pub fn current(self) -> Self {
        Self { kind: CounterKind::Current, ..self }
    }

    /// The `total` counter for the same department and person type.
    #[inline]
    pub fn total(self) -> Self {
        Self { kind: CounterKind::Total, ..self }
    }
}

impl fmt::Display for CounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.department.0, self.person_type.code(), self.kind)
    }
}

impl FromStr for CounterKey {
    type Err = TqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TqError::Parse(format!("invalid counter key {s:?}: expected \"{{id}}:{{0|1}}:{{current|total}}\""));

        let mut parts = s.split(':');
        let (Some(id), Some(code), Some(kind), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };

        let department = id.parse::<i64>().map(DepartmentId).map_err(|_| bad())?;
        let person_type = code
            .parse::<u8>()
            .ok()
            .and_then(PersonType::from_code)
            .ok_or_else(bad)?;
        let kind = match kind {
            "current" => CounterKind::Current,
            "total"   => CounterKind::Total,
            _ => return Err(bad()),
        };

        Ok(CounterKey { department, person_type, kind })
    }
}
