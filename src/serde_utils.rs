/// Serde utility functions for common patterns
use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserialize an integer that clients may send as `3`, `3.0` or `"3"`.
///
/// Fractional numbers and non-numeric strings are still rejected.
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "crate::serde_utils::lenient_i64")]
///     priority: i64,
/// }
/// ```
pub fn lenient_i64<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientI64Visitor;

    impl<'de> Visitor<'de> for LenientI64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, an integral float, or a numeric string")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            // 2^63 is exactly representable; anything at or above it overflows
            if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    de.deserialize_any(LenientI64Visitor)
}
