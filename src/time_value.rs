use crate::{data_value::ValueContent, RestApiError};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{json, Value};

/// Represents the Gregorian calendar model.
pub const GREGORIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q1985727";

/// Represents the Julian calendar model.
pub const JULIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q11184";

/// Represents the precision of a time value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    Gigayear = 0,
    HundredMegayear = 1,
    TenMegayear = 2,
    Megayear = 3,
    HundredKiloyear = 4,
    TenKiloyear = 5,
    Millennium = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl TimePrecision {
    /// Returns the human-readable name of the precision.
    pub const fn pretty_name(&self) -> &'static str {
        match self {
            TimePrecision::Gigayear => "gigayear",
            TimePrecision::HundredMegayear => "100_megayear",
            TimePrecision::TenMegayear => "10_megayear",
            TimePrecision::Megayear => "megayear",
            TimePrecision::HundredKiloyear => "100_kiloyear",
            TimePrecision::TenKiloyear => "10_kiloyear",
            TimePrecision::Millennium => "millennium",
            TimePrecision::Century => "century",
            TimePrecision::Decade => "decade",
            TimePrecision::Year => "year",
            TimePrecision::Month => "month",
            TimePrecision::Day => "day",
            TimePrecision::Hour => "hour",
            TimePrecision::Minute => "minute",
            TimePrecision::Second => "second",
        }
    }
}

impl TryFrom<u8> for TimePrecision {
    type Error = RestApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TimePrecision::Gigayear),
            1 => Ok(TimePrecision::HundredMegayear),
            2 => Ok(TimePrecision::TenMegayear),
            3 => Ok(TimePrecision::Megayear),
            4 => Ok(TimePrecision::HundredKiloyear),
            5 => Ok(TimePrecision::TenKiloyear),
            6 => Ok(TimePrecision::Millennium),
            7 => Ok(TimePrecision::Century),
            8 => Ok(TimePrecision::Decade),
            9 => Ok(TimePrecision::Year),
            10 => Ok(TimePrecision::Month),
            11 => Ok(TimePrecision::Day),
            12 => Ok(TimePrecision::Hour),
            13 => Ok(TimePrecision::Minute),
            14 => Ok(TimePrecision::Second),
            other => Err(RestApiError::InvalidPrecision(u64::from(other))),
        }
    }
}

impl TryFrom<u64> for TimePrecision {
    type Error = RestApiError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let small = u8::try_from(value).map_err(|_| RestApiError::InvalidPrecision(value))?;
        small.try_into()
    }
}

impl From<TimePrecision> for u8 {
    fn from(precision: TimePrecision) -> Self {
        precision as u8
    }
}

/// A point in time. Month and day of `time` may be zero when the precision does not cover them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time {
    time: String,
    precision: TimePrecision,
    calendar_model: String,
}

impl Time {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        time: S1,
        precision: TimePrecision,
        calendar_model: S2,
    ) -> Self {
        Self {
            time: time.into(),
            precision,
            calendar_model: calendar_model.into(),
        }
    }

    /// Like `new`, but with the precision as its numeric wire value (0-14).
    pub fn with_numeric_precision<S1: Into<String>, S2: Into<String>>(
        time: S1,
        precision: u64,
        calendar_model: S2,
    ) -> Result<Self, RestApiError> {
        Ok(Self::new(time, precision.try_into()?, calendar_model))
    }

    /// A Gregorian calendar date.
    pub fn gregorian<S: Into<String>>(time: S, precision: TimePrecision) -> Self {
        Self::new(time, precision, GREGORIAN_CALENDAR)
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub const fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub const fn pretty_precision(&self) -> &'static str {
        self.precision.pretty_name()
    }

    pub fn calendar_model(&self) -> &str {
        &self.calendar_model
    }
}

impl ValueContent for Time {
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        let time = j["time"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("time", j))?;
        let precision = j["precision"]
            .as_u64()
            .ok_or_else(|| RestApiError::missing_field("precision", j))?;
        let calendar_model = j["calendarmodel"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("calendarmodel", j))?;
        Self::with_numeric_precision(time, precision, calendar_model)
    }

    fn to_content(&self) -> Value {
        json!(self)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Time", 3)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field("precision", &u8::from(self.precision))?;
        s.serialize_field("calendarmodel", &self.calendar_model)?;
        s.end()
    }
}
