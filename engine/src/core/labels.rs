//! Code-to-label mappings for the categorical rental data columns.
//!
//! The upstream datasets encode every categorical column as a small integer.
//! Each mapping here is a closed enum: every defined code converts to exactly
//! one display label and back, and undefined codes or labels are reported
//! as [`UnknownCode`] / [`UnknownLabel`] errors rather than passed through
//! raw.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a categorical code has no defined label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {column} code: {code}")]
pub struct UnknownCode {
    pub column: &'static str,
    pub code: i64,
}

/// Error returned when a display label maps back to no defined code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {column} label: {label}")]
pub struct UnknownLabel {
    pub column: &'static str,
    pub label: String,
}

/// Season encoding of the `season` column.
///
/// # Examples
///
/// ```
/// use bikeshare_insights::core::labels::Season;
///
/// let season = Season::from_code(3).unwrap();
/// assert_eq!(season, Season::Fall);
/// assert_eq!(season.label(), "Fall");
/// assert_eq!(season.code(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    /// All seasons in code order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Converts a raw `season` code into a [`Season`].
    pub fn from_code(code: i64) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            _ => Err(UnknownCode {
                column: "season",
                code,
            }),
        }
    }

    /// Looks a display label back up, returning the season it names.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|season| season.label() == label)
            .ok_or_else(|| UnknownLabel {
                column: "season",
                label: label.to_string(),
            })
    }

    /// Returns the raw column code for this season.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the display label for this season.
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Weather situation encoding of the `weathersit` column.
///
/// Code 4 (heavy precipitation) is defined upstream but extremely rare; it
/// still maps totally so a record carrying it never breaks labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Clear = 1,
    Mist = 2,
    LightPrecipitation = 3,
    HeavyPrecipitation = 4,
}

impl Weather {
    /// All weather situations in code order.
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Mist,
        Weather::LightPrecipitation,
        Weather::HeavyPrecipitation,
    ];

    /// Converts a raw `weathersit` code into a [`Weather`].
    pub fn from_code(code: i64) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(Weather::Clear),
            2 => Ok(Weather::Mist),
            3 => Ok(Weather::LightPrecipitation),
            4 => Ok(Weather::HeavyPrecipitation),
            _ => Err(UnknownCode {
                column: "weathersit",
                code,
            }),
        }
    }

    /// Looks a display label back up, returning the weather it names.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|weather| weather.label() == label)
            .ok_or_else(|| UnknownLabel {
                column: "weathersit",
                label: label.to_string(),
            })
    }

    /// Returns the raw column code for this weather situation.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the display label for this weather situation.
    pub fn label(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Mist => "Mist",
            Weather::LightPrecipitation => "Light precipitation",
            Weather::HeavyPrecipitation => "Heavy precipitation",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Month encoding of the `mnth` column (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Converts a raw `mnth` code into a [`Month`].
    pub fn from_code(code: i64) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(Month::January),
            2 => Ok(Month::February),
            3 => Ok(Month::March),
            4 => Ok(Month::April),
            5 => Ok(Month::May),
            6 => Ok(Month::June),
            7 => Ok(Month::July),
            8 => Ok(Month::August),
            9 => Ok(Month::September),
            10 => Ok(Month::October),
            11 => Ok(Month::November),
            12 => Ok(Month::December),
            _ => Err(UnknownCode {
                column: "mnth",
                code,
            }),
        }
    }

    /// Looks a display label back up, returning the month it names.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|month| month.label() == label)
            .ok_or_else(|| UnknownLabel {
                column: "mnth",
                label: label.to_string(),
            })
    }

    /// Returns the raw column code for this month.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the display label for this month.
    pub fn label(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Day-of-week encoding of the `weekday` column (0 = Sunday, 6 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in code order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Converts a raw `weekday` code into a [`Weekday`].
    pub fn from_code(code: i64) -> Result<Self, UnknownCode> {
        match code {
            0 => Ok(Weekday::Sunday),
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            _ => Err(UnknownCode {
                column: "weekday",
                code,
            }),
        }
    }

    /// Looks a display label back up, returning the weekday it names.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|weekday| weekday.label() == label)
            .ok_or_else(|| UnknownLabel {
                column: "weekday",
                label: label.to_string(),
            })
    }

    /// Returns the raw column code for this weekday.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the display label for this weekday.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Year encoding of the `yr` column. The datasets span two calendar years;
/// code 0 is the first year of data (2011) and code 1 the second (2012).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataYear {
    Y2011 = 0,
    Y2012 = 1,
}

impl DataYear {
    /// Both data years in code order.
    pub const ALL: [DataYear; 2] = [DataYear::Y2011, DataYear::Y2012];

    /// Converts a raw `yr` code into a [`DataYear`].
    pub fn from_code(code: i64) -> Result<Self, UnknownCode> {
        match code {
            0 => Ok(DataYear::Y2011),
            1 => Ok(DataYear::Y2012),
            _ => Err(UnknownCode { column: "yr", code }),
        }
    }

    /// Looks a display label back up, returning the data year it names.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|year| year.label() == label)
            .ok_or_else(|| UnknownLabel {
                column: "yr",
                label: label.to_string(),
            })
    }

    /// Returns the raw column code for this year.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the calendar year this code stands for.
    pub fn calendar_year(self) -> i32 {
        match self {
            DataYear::Y2011 => 2011,
            DataYear::Y2012 => 2012,
        }
    }

    /// Returns the display label for this year.
    pub fn label(self) -> &'static str {
        match self {
            DataYear::Y2011 => "2011",
            DataYear::Y2012 => "2012",
        }
    }
}

impl fmt::Display for DataYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a `holiday` flag code to its display label.
pub fn holiday_label(code: i64) -> Result<&'static str, UnknownCode> {
    match code {
        0 => Ok("Non-holiday"),
        1 => Ok("Holiday"),
        _ => Err(UnknownCode {
            column: "holiday",
            code,
        }),
    }
}

/// Maps a `workingday` flag code to its display label.
pub fn working_day_label(code: i64) -> Result<&'static str, UnknownCode> {
    match code {
        0 => Ok("Non-working day"),
        1 => Ok("Working day"),
        _ => Err(UnknownCode {
            column: "workingday",
            code,
        }),
    }
}

/// Formats an `hr` code (0-23) on a 12-hour clock, e.g. `17` becomes `"5 PM"`.
///
/// # Examples
///
/// ```
/// use bikeshare_insights::core::labels::hour_label;
///
/// assert_eq!(hour_label(0).unwrap(), "12 AM");
/// assert_eq!(hour_label(17).unwrap(), "5 PM");
/// ```
pub fn hour_label(hour: i64) -> Result<String, UnknownCode> {
    if !(0..=23).contains(&hour) {
        return Err(UnknownCode {
            column: "hr",
            code: hour,
        });
    }
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    Ok(format!("{} {}", clock, suffix))
}
