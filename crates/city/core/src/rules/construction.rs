//! Construction targets and category filters.

/// What a city is currently building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionKind {
    Unit,
    Building,
    Wonder,
    /// Converts production into gold.
    Gold,
    /// Converts production into science.
    Science,
}

/// The current construction of a city.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionTarget {
    pub name: String,
    pub kind: ConstructionKind,
}

impl ConstructionTarget {
    pub fn new(name: impl Into<String>, kind: ConstructionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Units, buildings and wonders. Conversions never match a filter.
    pub fn is_buildable(&self) -> bool {
        matches!(
            self.kind,
            ConstructionKind::Unit | ConstructionKind::Building | ConstructionKind::Wonder
        )
    }
}

/// Construction filters the engine decides on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ConstructionKind),
}

impl CategoryFilter {
    /// Classifies `filter`; `None` means the filter is content-defined.
    pub fn parse(filter: &str) -> Option<Self> {
        match filter {
            "All" => Some(Self::All),
            "Unit" | "Units" => Some(Self::Only(ConstructionKind::Unit)),
            "Building" | "Buildings" => Some(Self::Only(ConstructionKind::Building)),
            "Wonder" | "Wonders" => Some(Self::Only(ConstructionKind::Wonder)),
            _ => None,
        }
    }

    pub fn matches(self, target: &ConstructionTarget) -> bool {
        match self {
            Self::All => target.is_buildable(),
            Self::Only(kind) => target.kind == kind,
        }
    }
}

/// `true` for the filters that select every city.
pub fn is_any_city(filter: &str) -> bool {
    filter.is_empty() || filter == "All"
}
