//! Excel serial date conversion
//!
//! Spreadsheets store dates as serial numbers: whole days since a base date,
//! with the time of day as a fraction. In the 1900 date system Excel keeps the
//! historical Lotus leap-year bug, inserting the non-existent day 1900-02-29
//! as serial 60.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Which base day date serials count from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// 1900 system (Windows default): serial 1 is 1900-01-01, with the
    /// fictional 1900-02-29 at serial 60
    #[default]
    Excel1900,
    /// 1904 system (classic Mac): serial 0 is 1904-01-01
    Excel1904,
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One past the highest meaningful serial (9999-12-31 rounds under it)
const SERIAL_LIMIT: f64 = 2_958_466.0;

/// Convert a date serial to a chrono datetime
///
/// The day fraction is rounded to whole seconds, carrying into the next day
/// when it rounds up to midnight.
///
/// Returns `None` for serials with no calendar meaning: negative or
/// non-finite values, serial 60 in the 1900 system (the fictional
/// 1900-02-29), and values at or past the year-9999 limit.
pub fn serial_to_datetime(serial: f64, system: DateSystem) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial >= SERIAL_LIMIT {
        return None;
    }

    let days = serial.trunc() as i64;
    let mut date = match system {
        DateSystem::Excel1900 => excel1900_date_from_serial(days)?,
        DateSystem::Excel1904 => excel1904_date_from_serial(days)?,
    };

    let mut seconds = (serial.fract() * SECONDS_PER_DAY).round() as u32;
    if seconds >= 86_400 {
        date = date.succ_opt()?;
        seconds = 0;
    }
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(NaiveDateTime::new(date, time))
}

/// Convert a chrono datetime to a date serial
///
/// Returns `None` for datetimes before the system's base day.
pub fn datetime_to_serial(dt: NaiveDateTime, system: DateSystem) -> Option<f64> {
    let days = match system {
        DateSystem::Excel1900 => {
            let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
            let days = (dt.date() - base).num_days();
            if days < 0 {
                return None;
            }
            // Dates from 1900-03-01 on sit one serial later because of the
            // fictional 1900-02-29.
            if days >= 60 {
                days + 1
            } else {
                days
            }
        }
        DateSystem::Excel1904 => {
            let base = NaiveDate::from_ymd_opt(1904, 1, 1)?;
            let days = (dt.date() - base).num_days();
            if days < 0 {
                return None;
            }
            days
        }
    };

    let fraction = f64::from(dt.time().num_seconds_from_midnight()) / SECONDS_PER_DAY;
    Some(days as f64 + fraction)
}

fn excel1900_date_from_serial(serial: i64) -> Option<NaiveDate> {
    // Serial 60 is the fictional 1900-02-29; chrono cannot represent it.
    if serial == 60 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?;
    let adjusted = if serial > 60 { serial - 1 } else { serial };
    base.checked_add_signed(Duration::days(adjusted))
}

fn excel1904_date_from_serial(serial: i64) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1904, 1, 1)?;
    base.checked_add_signed(Duration::days(serial))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_1900_system_day_boundaries() {
        let sys = DateSystem::Excel1900;
        assert_eq!(
            serial_to_datetime(0.0, sys),
            Some(ymd_hms(1899, 12, 31, 0, 0, 0))
        );
        assert_eq!(
            serial_to_datetime(1.0, sys),
            Some(ymd_hms(1900, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            serial_to_datetime(59.0, sys),
            Some(ymd_hms(1900, 2, 28, 0, 0, 0))
        );
        // The fictional leap day
        assert_eq!(serial_to_datetime(60.0, sys), None);
        assert_eq!(
            serial_to_datetime(61.0, sys),
            Some(ymd_hms(1900, 3, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_1900_system_modern_date() {
        let sys = DateSystem::Excel1900;
        assert_eq!(
            serial_to_datetime(45000.0, sys),
            Some(ymd_hms(2023, 3, 15, 0, 0, 0))
        );
        assert_eq!(
            serial_to_datetime(45000.5, sys),
            Some(ymd_hms(2023, 3, 15, 12, 0, 0))
        );
        assert_eq!(
            serial_to_datetime(45000.25, sys),
            Some(ymd_hms(2023, 3, 15, 6, 0, 0))
        );
    }

    #[test]
    fn test_fraction_rounds_and_carries() {
        let sys = DateSystem::Excel1900;
        // 0.9999999 of a day rounds up to midnight of the next day
        assert_eq!(
            serial_to_datetime(45000.9999999, sys),
            Some(ymd_hms(2023, 3, 16, 0, 0, 0))
        );
        // Half a second rounds up
        let dt = serial_to_datetime(45000.0 + 0.75 / 86_400.0, sys).unwrap();
        assert_eq!(dt, ymd_hms(2023, 3, 15, 0, 0, 1));
    }

    #[test]
    fn test_invalid_serials() {
        let sys = DateSystem::Excel1900;
        assert_eq!(serial_to_datetime(-1.0, sys), None);
        assert_eq!(serial_to_datetime(-0.5, sys), None);
        assert_eq!(serial_to_datetime(f64::NAN, sys), None);
        assert_eq!(serial_to_datetime(f64::INFINITY, sys), None);
        assert_eq!(serial_to_datetime(1e300, sys), None);

        // The last representable day, then one past it
        assert_eq!(
            serial_to_datetime(2_958_465.0, sys),
            Some(ymd_hms(9999, 12, 31, 0, 0, 0))
        );
        assert_eq!(serial_to_datetime(2_958_466.0, sys), None);
    }

    #[test]
    fn test_1904_system() {
        let sys = DateSystem::Excel1904;
        assert_eq!(
            serial_to_datetime(0.0, sys),
            Some(ymd_hms(1904, 1, 1, 0, 0, 0))
        );
        // 1904 is a leap year, so 366 days reach the next year
        assert_eq!(
            serial_to_datetime(366.0, sys),
            Some(ymd_hms(1905, 1, 1, 0, 0, 0))
        );
        // No leap bug in this system
        assert_eq!(
            serial_to_datetime(60.0, sys),
            Some(ymd_hms(1904, 3, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_serial_round_trip() {
        for sys in [DateSystem::Excel1900, DateSystem::Excel1904] {
            for serial in [0.0, 1.0, 59.0, 61.0, 1000.25, 45000.5] {
                if let Some(dt) = serial_to_datetime(serial, sys) {
                    assert_eq!(datetime_to_serial(dt, sys), Some(serial), "{:?}", sys);
                }
            }
        }
    }

    #[test]
    fn test_datetime_to_serial_phantom_day_shift() {
        let sys = DateSystem::Excel1900;
        assert_eq!(
            datetime_to_serial(ymd_hms(1900, 2, 28, 0, 0, 0), sys),
            Some(59.0)
        );
        assert_eq!(
            datetime_to_serial(ymd_hms(1900, 3, 1, 0, 0, 0), sys),
            Some(61.0)
        );
    }

    #[test]
    fn test_datetime_before_base() {
        assert_eq!(
            datetime_to_serial(ymd_hms(1899, 12, 30, 0, 0, 0), DateSystem::Excel1900),
            None
        );
        assert_eq!(
            datetime_to_serial(ymd_hms(1903, 12, 31, 0, 0, 0), DateSystem::Excel1904),
            None
        );
    }
}
