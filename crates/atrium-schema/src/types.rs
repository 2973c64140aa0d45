use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

///
/// ColumnKind
///
/// Primitive storage kinds a schema column can declare. Kinds with no
/// dedicated field mapping fall back to a plain text field at resolution.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum ColumnKind {
    Binary,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Float,
    Integer,
    Text,
    Time,
    Timestamp,
}

impl ColumnKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Decimal | Self::Float | Self::Integer)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time | Self::Timestamp)
    }
}

///
/// AssociationKind
///
/// Direction of a declared association. Indirect (through/source)
/// has-many associations keep the HasMany kind; indirection lives in the
/// association options, not here.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum AssociationKind {
    BelongsTo,
    HasMany,
    HasOne,
}

impl AssociationKind {
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::BelongsTo => Cardinality::One,
            Self::HasOne => Cardinality::Opt,
            Self::HasMany => Cardinality::Many,
        }
    }
}

///
/// TESTS
///
