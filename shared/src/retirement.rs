//! Retirement projection
//!
//! Remaining time is expressed with average calendar lengths
//! (365.25-day years, 30.44-day months), not exact calendar arithmetic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Mandatory retirement age
pub const RETIREMENT_AGE: i32 = 65;

/// Age at which an employee is listed as retiring soon
pub const UPCOMING_RETIREMENT_AGE: i32 = RETIREMENT_AGE - 1;

const MS_PER_DAY: f64 = 86_400_000.0;
const MS_PER_YEAR: f64 = MS_PER_DAY * 365.25;
const MS_PER_MONTH: f64 = MS_PER_DAY * 30.44;

/// Time left until retirement (never persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementInfo {
    pub years_left: u32,
    pub months_left: u32,
    pub days_left: u32,
}

impl RetirementInfo {
    pub fn is_retired(&self) -> bool {
        *self == RetirementInfo::default()
    }
}

/// Date on which someone who joined at `age_at_joining` reaches retirement age.
///
/// Feb 29 rolls over to Mar 1 in non-leap target years.
pub fn retirement_date(date_of_joining: NaiveDate, age_at_joining: i32) -> Option<NaiveDate> {
    let year = date_of_joining
        .year()
        .checked_add(RETIREMENT_AGE.checked_sub(age_at_joining)?)?;
    date_of_joining
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Remaining time until retirement, measured from now
pub fn calculate_retirement_info(date_of_joining: NaiveDate, age_at_joining: i32) -> RetirementInfo {
    calculate_retirement_info_at(date_of_joining, age_at_joining, Utc::now())
}

/// Remaining time until retirement, measured from `now`
pub fn calculate_retirement_info_at(
    date_of_joining: NaiveDate,
    age_at_joining: i32,
    now: DateTime<Utc>,
) -> RetirementInfo {
    let Some(retires_on) = retirement_date(date_of_joining, age_at_joining) else {
        return RetirementInfo::default();
    };
    let retirement_ms = retires_on.and_time(NaiveTime::MIN).and_utc().timestamp_millis();

    let diff = (retirement_ms - now.timestamp_millis()) as f64;
    if diff <= 0.0 {
        return RetirementInfo::default();
    }

    let years = (diff / MS_PER_YEAR).floor();
    let rest = diff % MS_PER_YEAR;
    let months = (rest / MS_PER_MONTH).floor();
    let days = ((rest % MS_PER_MONTH) / MS_PER_DAY).floor();

    RetirementInfo {
        years_left: years as u32,
        months_left: months as u32,
        days_left: days as u32,
    }
}

/// Whether an employee of this age is listed as retiring soon
pub fn is_upcoming_retirement(age: i32) -> bool {
    age == UPCOMING_RETIREMENT_AGE
}
