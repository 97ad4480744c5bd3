// Energy records as reported by the vendor
use serde::{Deserialize, Deserializer};

/// Vendor fields are sometimes `null`; treat that like an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One minute bucket of site data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sample {
    #[serde(rename = "t_stamp", default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[allow(dead_code)]
    #[serde(rename = "energy_expected", default, deserialize_with = "null_as_default")]
    pub expected: f64,
    #[serde(rename = "energy_generated", default, deserialize_with = "null_as_default")]
    pub generated: f64,
    #[serde(rename = "energy_consumed", default, deserialize_with = "null_as_default")]
    pub consumed: f64,
    #[serde(rename = "load_hot_water", default, deserialize_with = "null_as_default")]
    pub hot_water: f64,
    #[serde(rename = "load_other", default, deserialize_with = "null_as_default")]
    pub ac1: f64,
    #[serde(rename = "load_air_conditioner", default, deserialize_with = "null_as_default")]
    pub ac2: f64,
    #[serde(rename = "load_stove", default, deserialize_with = "null_as_default")]
    pub stove: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LiveReading {
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub consumed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Sample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<LiveReading>,
}
