//! Feature Vector - Core data structure for classifier input
//!
//! Versioned feature vector with layout validation. All feature data flows
//! through this type; never pass a raw `Vec<f32>` between modules, since a
//! bare vector loses the version/hash needed for drift detection.

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};

/// Fixed-order numeric summary of a URL, with layout metadata.
///
/// Immutable once extraction produces it; schema slots no rule computes
/// stay at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in the order defined by FEATURE_LAYOUT
    #[serde(with = "values_serde")]
    pub values: [f32; FEATURE_COUNT],
}

/// serde only covers arrays up to length 32; the schema array goes through
/// a sequence, with the length checked on the way back in.
mod values_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FEATURE_COUNT;

    pub fn serialize<S: Serializer>(
        values: &[f32; FEATURE_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        values.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[f32; FEATURE_COUNT], D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        let len = values.len();
        values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"a schema-length feature array"))
    }
}

impl FeatureVector {
    /// Create a new zeroed feature vector with the current layout
    pub fn new() -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Create from raw values with the current layout
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Create from a Vec<f32> (truncates or zero-pads to the schema length)
    pub fn from_vec(values: Vec<f32>) -> Self {
        let mut array = [0.0f32; FEATURE_COUNT];
        for (i, v) in values.into_iter().take(FEATURE_COUNT).enumerate() {
            array[i] = v;
        }
        Self::from_values(array)
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index
    pub fn set(&mut self, index: usize, value: f32) {
        if index < FEATURE_COUNT {
            self.values[index] = value;
        }
    }

    /// Set feature by name. Returns false if the name is not in the schema.
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Validate that this vector matches the current layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    /// Check if this vector is compatible with the current layout
    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// Feature names for this vector
    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }

    /// JSON form with named values, for structured logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

/// One stage of the extraction pipeline. Each stage computes its signals
/// up front and writes them into the shared vector by schema name.
pub trait FeatureSignal {
    fn apply(&self, vector: &mut FeatureVector);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_new() {
        let vector = FeatureVector::new();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert_eq!(vector.values.len(), FEATURE_COUNT);
        assert!(vector.values.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_and_get_by_name() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("num_dots", 3.0));
        assert_eq!(vector.get_by_name("num_dots"), Some(3.0));

        assert!(!vector.set_by_name("nonexistent", 1.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);
    }

    #[test]
    fn test_from_vec_pads_and_truncates() {
        let short = FeatureVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(short.get(0), Some(1.0));
        assert_eq!(short.get(1), Some(2.0));
        assert_eq!(short.get(2), Some(0.0));

        let long = FeatureVector::from_vec(vec![1.0; FEATURE_COUNT + 10]);
        assert_eq!(long.values.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_validation() {
        let vector = FeatureVector::new();
        assert!(vector.is_compatible());

        let mut stale = FeatureVector::new();
        stale.version = FEATURE_VERSION + 1;
        assert!(!stale.is_compatible());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut vector = FeatureVector::new();
        vector.set_by_name("num_dots", 2.0);
        vector.set_by_name("domain_token_count", 3.0);

        let json = serde_json::to_string(&vector).unwrap();
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let json = serde_json::json!({
            "version": FEATURE_VERSION,
            "layout_hash": layout_hash(),
            "values": [1.0, 2.0, 3.0],
        });
        assert!(serde_json::from_value::<FeatureVector>(json).is_err());
    }

    #[test]
    fn test_to_log_entry() {
        let mut vector = FeatureVector::new();
        vector.set_by_name("url_length", 42.0);

        let log = vector.to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["url_length"], 42.0);
    }
}
