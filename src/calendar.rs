//! Calendar day boundaries
//!
//! Both the filter and the grouping engine need to agree on where one
//! day ends and the next begins. A [`Calendar`] pins that boundary either
//! to a fixed UTC offset or to the machine's local time zone. In the
//! local case the offset is resolved per timestamp, so visits on either
//! side of a daylight saving change land on their own local day.

use chrono::{
    DateTime, Duration, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, Offset, TimeZone,
    Utc,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Fixed(FixedOffset),
    Local,
}

/// A day-boundary definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    zone: Zone,
}

impl Calendar {
    /// Calendar whose days start at midnight UTC
    pub fn utc() -> Self {
        Self {
            zone: Zone::Fixed(Utc.fix()),
        }
    }

    /// Calendar following the machine's local time zone
    pub fn local() -> Self {
        Self { zone: Zone::Local }
    }

    /// Calendar with a fixed offset in minutes east of UTC
    ///
    /// Returns `None` when the offset is outside +/- 24 hours.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self {
            zone: Zone::Fixed(offset),
        })
    }

    /// The fixed offset, or `None` for a local-time calendar
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        match self.zone {
            Zone::Fixed(offset) => Some(offset),
            Zone::Local => None,
        }
    }

    pub fn is_local(&self) -> bool {
        self.zone == Zone::Local
    }

    /// `ts` as wall-clock time in this calendar
    pub fn localize(&self, ts: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self.zone {
            Zone::Fixed(offset) => ts.with_timezone(&offset),
            Zone::Local => ts.with_timezone(&Local).fixed_offset(),
        }
    }

    /// The instant a wall-clock time occurs in this calendar
    ///
    /// An ambiguous local time resolves to its earliest instant. A local
    /// time skipped by a daylight saving jump resolves to one hour later.
    pub fn resolve(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.zone {
            Zone::Fixed(offset) => offset
                .from_local_datetime(&local)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Local => Local
                .from_local_datetime(&local)
                .earliest()
                .or_else(|| {
                    Local
                        .from_local_datetime(&(local + Duration::hours(1)))
                        .earliest()
                })
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// The calendar day a timestamp falls on
    pub fn day_of(&self, ts: DateTime<Utc>) -> NaiveDate {
        self.localize(ts).date_naive()
    }

    /// The calendar day before the one containing `ts`
    pub fn day_before(&self, ts: DateTime<Utc>) -> NaiveDate {
        let day = self.day_of(ts);
        day.pred_opt().unwrap_or(day)
    }

    /// `ts` moved back by seven days
    pub fn week_before(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        ts - Duration::days(7)
    }

    /// `ts` moved back by one calendar month in this calendar
    ///
    /// The day of month is clamped when the previous month is shorter, so
    /// March 31st maps to the last day of February.
    pub fn month_before(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let back = match self.zone {
            Zone::Fixed(offset) => ts
                .with_timezone(&offset)
                .checked_sub_months(Months::new(1))
                .map(|dt| dt.with_timezone(&Utc)),
            Zone::Local => ts
                .with_timezone(&Local)
                .checked_sub_months(Months::new(1))
                .map(|dt| dt.with_timezone(&Utc)),
        };
        back.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            Zone::Fixed(offset) => write!(f, "UTC{}", offset),
            Zone::Local => f.write_str("local time"),
        }
    }
}
