//! Query parameter validation
//!
//! Turns raw query-string pairs into a [`FilterSpec`]. Unknown parameters
//! are rejected rather than dropped.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

/// Recognized results-lookup parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryParam {
    From,
    To,
    Full,
}

impl QueryParam {
    pub const ALL: [QueryParam; 3] = [QueryParam::From, QueryParam::To, QueryParam::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Full => "full",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// Normalized filter for a results lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub full: bool,
}

impl FilterSpec {
    /// Validate raw `(name, value)` pairs from a query string
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();
        let mut seen = HashSet::new();

        for (name, value) in pairs {
            let name = name.as_ref();
            let value = value.as_ref();

            let param = QueryParam::parse(name)
                .ok_or_else(|| Error::InvalidQuery(format!("\"{}\" is not allowed", name)))?;

            if !seen.insert(param) {
                return Err(Error::InvalidQuery(format!(
                    "\"{}\" must not be repeated",
                    name
                )));
            }

            match param {
                QueryParam::From => {
                    filter.date_from = Some(parse_date(name, value, DayEdge::Start)?)
                }
                QueryParam::To => filter.date_to = Some(parse_date(name, value, DayEdge::End)?),
                QueryParam::Full => filter.full = parse_flag(name, value)?,
            }
        }

        Ok(filter)
    }
}

#[derive(Clone, Copy)]
enum DayEdge {
    Start,
    End,
}

fn parse_date(name: &str, raw: &str, edge: DayEdge) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let bound = match edge {
            DayEdge::Start => date.and_hms_opt(0, 0, 0),
            DayEdge::End => date.and_hms_nano_opt(23, 59, 59, 999_999_999),
        };
        return bound
            .map(|dt| dt.and_utc())
            .ok_or_else(|| invalid_date(name));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| invalid_date(name))
}

fn invalid_date(name: &str) -> Error {
    Error::InvalidQuery(format!("\"{}\" must be a valid date", name))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidQuery(format!("\"{}\" must be a boolean", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn validate(pairs: &[(&str, &str)]) -> Result<FilterSpec> {
        FilterSpec::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_empty_query_is_default() {
        let filter = validate(&[]).unwrap();
        assert_eq!(filter, FilterSpec::default());
        assert!(!filter.full);
    }

    #[test]
    fn test_date_only_bounds_cover_whole_days() {
        let filter = validate(&[("from", "2013-01-02"), ("to", "2013-01-07")]).unwrap();
        assert_eq!(
            filter.date_from,
            Some(Utc.with_ymd_and_hms(2013, 1, 2, 0, 0, 0).unwrap())
        );
        let to = filter.date_to.unwrap();
        assert_eq!(to.format("%Y-%m-%d %H:%M:%S").to_string(), "2013-01-07 23:59:59");
        assert_eq!(to.timestamp_subsec_nanos(), 999_999_999);
        assert_eq!(
            to + chrono::Duration::nanoseconds(1),
            Utc.with_ymd_and_hms(2013, 1, 8, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rfc3339_dates_are_accepted() {
        let filter = validate(&[("from", "2013-01-02T10:30:00+02:00")]).unwrap();
        assert_eq!(
            filter.date_from,
            Some(Utc.with_ymd_and_hms(2013, 1, 2, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        match validate(&[("foo", "bar")]).unwrap_err() {
            Error::InvalidQuery(msg) => assert!(msg.contains("foo")),
            e => panic!("Expected InvalidQuery error, got: {:?}", e),
        }
    }

    #[test]
    fn test_unknown_parameter_rejected_alongside_valid_ones() {
        assert!(validate(&[("full", "true"), ("limit", "10")]).is_err());
    }

    #[test]
    fn test_unparsable_date_rejected() {
        assert!(matches!(
            validate(&[("from", "yesterday")]),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            validate(&[("to", "2013-02-30")]),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_repeated_parameter_rejected() {
        assert!(matches!(
            validate(&[("from", "2013-01-02"), ("from", "2013-01-03")]),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_full_flag_values() {
        for raw in ["", "true", "TRUE", "1", "yes", "on"] {
            assert!(validate(&[("full", raw)]).unwrap().full, "{raw:?}");
        }
        for raw in ["false", "0", "no", "off"] {
            assert!(!validate(&[("full", raw)]).unwrap().full, "{raw:?}");
        }
        assert!(validate(&[("full", "maybe")]).is_err());
    }
}
