//! Calendar-month bucketing for time series aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month identified by year and month number (1-12).
///
/// Buckets order chronologically (`derive(Ord)` on the year/month pair), so
/// a sorted collection of buckets is a valid time axis.
///
/// # Examples
///
/// ```
/// use bikeshare_insights::time::month::MonthBucket;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2011, 1, 15).unwrap();
/// let bucket = MonthBucket::from_date(date);
///
/// assert_eq!(bucket, MonthBucket { year: 2011, month: 1 });
/// assert_eq!(bucket.to_string(), "2011-01");
/// assert!(bucket < MonthBucket { year: 2011, month: 2 });
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
}

impl MonthBucket {
    /// Returns the bucket containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the next calendar month, rolling over at year end.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of months from the start of year zero; used for distances.
    fn index(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Counts the months in `self..=end`, or 0 if `end` precedes `self`.
    pub fn months_until(self, end: MonthBucket) -> usize {
        let span = end.index() - self.index() + 1;
        if span > 0 {
            span as usize
        } else {
            0
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_date_takes_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2012, 7, 31).unwrap();
        let bucket = MonthBucket::from_date(date);
        assert_eq!(bucket.year, 2012);
        assert_eq!(bucket.month, 7);
    }

    #[test]
    fn next_rolls_over_december() {
        let december = MonthBucket {
            year: 2011,
            month: 12,
        };
        assert_eq!(
            december.next(),
            MonthBucket {
                year: 2012,
                month: 1
            }
        );

        let june = MonthBucket {
            year: 2012,
            month: 6,
        };
        assert_eq!(
            june.next(),
            MonthBucket {
                year: 2012,
                month: 7
            }
        );
    }

    #[test]
    fn ordering_is_chronological() {
        let a = MonthBucket {
            year: 2011,
            month: 12,
        };
        let b = MonthBucket {
            year: 2012,
            month: 1,
        };
        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn months_until_counts_inclusive_span() {
        let jan = MonthBucket {
            year: 2011,
            month: 1,
        };
        let dec = MonthBucket {
            year: 2012,
            month: 12,
        };
        assert_eq!(jan.months_until(dec), 24);
        assert_eq!(jan.months_until(jan), 1);
        assert_eq!(dec.months_until(jan), 0);
    }

    #[test]
    fn display_pads_year_and_month() {
        let bucket = MonthBucket {
            year: 2011,
            month: 3,
        };
        assert_eq!(bucket.to_string(), "2011-03");
    }
}
