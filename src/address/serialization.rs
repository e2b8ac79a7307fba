use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{AddressBody, encode, normalize};

impl Serialize for AddressBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(self))
    }
}

/// Accepts bare, `0x`- or `XKO`-prefixed strings in any letter case.
impl<'de> Deserialize<'de> for AddressBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        normalize(&s, true).map_err(D::Error::custom)
    }
}
