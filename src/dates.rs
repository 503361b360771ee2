//! Calendar-day helpers. Days travel over the wire as `YYYY-MM-DD`.

use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

use crate::error::{AppError, AppResult};

pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

pub mod iso_date_opt {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(
        value: &Option<Date>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => super::iso_date::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

pub fn parse(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, ISO_DATE)
}

pub fn format(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

/// Parse an optional `?date=` parameter; blank means absent.
pub fn parse_param(raw: Option<&str>) -> AppResult<Option<Date>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .map_err(|_| AppError::Validation(format!("invalid date '{s}', expected YYYY-MM-DD"))),
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
