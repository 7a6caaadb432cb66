//! Hydrological year and month conversions.

use crate::error::CalendarError;

/// First month of the hydrological year in the Polish (IMGW) convention.
pub const DEFAULT_START_MONTH: u8 = 11;

fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Computes the hydrological year for a given calendar year and month.
///
/// A hydrological year is defined by its `start_month`. All months from
/// `start_month` onward belong to the *next* calendar year's hydrological
/// year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` or `start_month` is
/// outside 1..=12.
///
/// # Examples
///
/// ```ignore
/// // November-start hydrological year:
/// assert_eq!(hydrological_year(2000, 11, 11).unwrap(), 2001); // Nov 2000 -> 2001
/// assert_eq!(hydrological_year(2001, 10, 11).unwrap(), 2001); // Oct 2001 -> 2001
///
/// // Calendar year (start_month = 1):
/// assert_eq!(hydrological_year(2000, 6, 1).unwrap(), 2000);
/// ```
pub fn hydrological_year(year: i32, month: u8, start_month: u8) -> Result<i32, CalendarError> {
    check_month(month)?;
    check_month(start_month)?;
    if start_month == 1 {
        return Ok(year);
    }
    if month >= start_month {
        Ok(year + 1)
    } else {
        Ok(year)
    }
}

/// Position of a calendar month within the hydrological year (1..=12).
///
/// With a November start, November is 1, February is 4 and October is 12.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if either argument is outside 1..=12.
pub fn hydrological_month(month: u8, start_month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    check_month(start_month)?;
    Ok((month + 12 - start_month) % 12 + 1)
}

/// Calendar month (1..=12) of a hydrological month index.
///
/// Inverse of [`hydrological_month`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if either argument is outside 1..=12.
pub fn calendar_month(hydro_month: u8, start_month: u8) -> Result<u8, CalendarError> {
    check_month(hydro_month)?;
    check_month(start_month)?;
    Ok((start_month - 1 + hydro_month - 1) % 12 + 1)
}

/// Calendar year in which a hydrological month falls.
///
/// Months of the hydrological year that precede January belong to the
/// previous calendar year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if either month is outside 1..=12.
pub fn calendar_year(hydro_year: i32, hydro_month: u8, start_month: u8) -> Result<i32, CalendarError> {
    let month = calendar_month(hydro_month, start_month)?;
    if start_month != 1 && month >= start_month {
        Ok(hydro_year - 1)
    } else {
        Ok(hydro_year)
    }
}
