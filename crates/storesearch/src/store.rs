//! Store records and the coordinate key used by the geo index.

/// A geographic coordinate used as an exact-equality key.
///
/// There is no tolerance: two coordinates are the same key only when both
/// components compare equal as floats. `0.0` and `-0.0` are the same key, and a
/// coordinate with a NaN component never matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geo {
    pub latitude: f32,
    pub longitude: f32,
}

impl Geo {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn is_nan(&self) -> bool {
        self.latitude.is_nan() || self.longitude.is_nan()
    }
}

/// A point-of-interest record.
///
/// Names are not unique. Category lists keep their order and any duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    pub name: String,
    pub geo: Geo,
    pub categories: Vec<String>,
}

impl Store {
    pub fn new<N, C>(name: N, geo: Geo, categories: C) -> Self
    where
        N: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: name.into(),
            geo,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Hashable form of [`Geo`] built from the components' bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GeoKey {
    latitude: u32,
    longitude: u32,
}

impl GeoKey {
    /// Returns `None` for coordinates that can never compare equal.
    pub(crate) fn new(geo: Geo) -> Option<Self> {
        if geo.is_nan() {
            return None;
        }
        Some(Self {
            latitude: canonical_bits(geo.latitude),
            longitude: canonical_bits(geo.longitude),
        })
    }
}

// -0.0 == 0.0 but their bit patterns differ.
fn canonical_bits(value: f32) -> u32 {
    let value = if value == 0.0 { 0.0_f32 } else { value };
    value.to_bits()
}
