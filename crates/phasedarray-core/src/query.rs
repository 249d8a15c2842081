//! URL query (de)serialization for the registry and the active LUT.

use crate::color::ColorStops;
use crate::params::ParameterRegistry;

/// Reserved key carrying the active color stops.
pub const LUT_KEY: &str = "lut";

/// Outcome of [`ParameterRegistry::hydrate_from_query`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hydrated {
    /// Decoded `lut` stops, if the query carried a valid list.
    pub stops: Option<ColorStops>,
    /// Keys routed into the registry (declared or pre-seeded).
    pub seeded: usize,
}

impl<L> ParameterRegistry<L> {
    /// Declared parameters in order, then `lut` from `stops`.
    pub fn serialize_to_query(&self, stops: &ColorStops) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .iter()
            .filter(|p| p.name() != LUT_KEY)
            .map(|p| (p.name().to_string(), p.value().to_query_string()))
            .collect();
        pairs.push((LUT_KEY.to_string(), stops.encode_query()));
        pairs
    }

    /// Route query pairs: `lut` is decoded and handed back, every other key
    /// is seeded into the registry. A malformed `lut` is logged and dropped.
    pub fn hydrate_from_query<I, K, V>(&mut self, pairs: I) -> Hydrated
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Hydrated::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key == LUT_KEY {
                match ColorStops::decode_query(value) {
                    Ok(stops) => out.stops = Some(stops),
                    Err(e) => log::warn!("[query] ignoring lut={:?}: {}", value, e),
                }
                continue;
            }
            if !self.contains(key) {
                log::debug!("[query] {} is not declared yet", key);
            }
            self.seed(key, value);
            out.seeded += 1;
        }
        out
    }
}

/// `a=1&b=2` rendering of ordered pairs, for logs and non-URL consumers.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
