use crate::client::{ParamValue, ToParam};
use chrono::{SecondsFormat, Utc};
use serde::{ser, Serialize};
use std::{fmt, str::FromStr};

/// A UTC timestamp, written as ISO 8601 `YYYY-MM-DDTHH:MM:SSZ` in queries and request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    pub fn now() -> Self {
        DateTime(Utc::now())
    }

    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        chrono::DateTime::<Utc>::from_timestamp(seconds, 0).map(DateTime)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<Utc>) -> Self {
        DateTime(datetime)
    }
}

impl FromStr for DateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DateTime(
            chrono::DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc),
        ))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

impl ToParam for DateTime {
    fn to_param(&self) -> ParamValue {
        ParamValue::Scalar(self.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::DateTime;
    use crate::client::{ParamValue, ToParam};

    #[test]
    fn iso_8601() {
        let since = DateTime::from_timestamp(1372700873).unwrap();
        assert_eq!(since.to_string(), "2013-07-01T17:47:53Z");
        assert_eq!(
            since.to_param(),
            ParamValue::Scalar("2013-07-01T17:47:53Z".to_owned())
        );
        assert_eq!(
            serde_json::to_value(since).unwrap(),
            serde_json::json!("2013-07-01T17:47:53Z")
        );
    }

    #[test]
    fn parse_with_offset() {
        let parsed: DateTime = "2013-07-01T19:47:53+02:00".parse().unwrap();
        assert_eq!(parsed, DateTime::from_timestamp(1372700873).unwrap());
    }
}
