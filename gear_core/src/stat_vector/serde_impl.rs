//! StatVector is written as a map of short codes.
//!
//! Reading is forgiving: unknown keys are skipped, missing keys stay 0,
//! and anything that is not a number counts as 0.

use super::{StatKey, StatVector};
use serde::de::IgnoredAny;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Other(IgnoredAny),
}

impl Serialize for StatVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StatKey::COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.code(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, LooseNumber>::deserialize(deserializer)?;
        let mut stats = StatVector::zero();
        for (name, value) in raw {
            let Ok(key) = name.parse::<StatKey>() else {
                tracing::debug!(stat = %name, "ignoring unknown stat key");
                continue;
            };
            if let LooseNumber::Number(n) = value {
                stats = stats.plus(key, n);
            }
        }
        Ok(stats)
    }
}
