//! Fixed 366-slot hydrological year layout.
//!
//! Every hydrological month occupies its maximum length, so February always
//! has 29 slots. A year vector built on this layout has the same length in
//! leap and common years; slots that do not exist in a given year are the
//! ones that receive leap-day placeholders.

use crate::error::CalendarError;
use crate::hydro_year::{calendar_month, calendar_year};
use crate::month::{days_in_month, max_days_in_month};

/// Number of slots in the normalized hydrological year.
pub const SLOTS_PER_YEAR: u16 = 366;

/// Slot layout of a hydrological year starting in `start_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearLayout {
    start_month: u8,
    /// First slot of each hydrological month (index 0 unused).
    month_start: [u16; 13],
}

impl YearLayout {
    /// Builds the layout for a hydrological year beginning in `start_month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `start_month` is outside 1..=12.
    pub fn new(start_month: u8) -> Result<Self, CalendarError> {
        let mut month_start = [0u16; 13];
        let mut next = 1u16;
        for hm in 1..=12u8 {
            month_start[hm as usize] = next;
            let cm = calendar_month(hm, start_month)?;
            next += max_days_in_month(cm)? as u16;
        }
        debug_assert_eq!(next, SLOTS_PER_YEAR + 1);
        Ok(Self {
            start_month,
            month_start,
        })
    }

    /// First month of the hydrological year.
    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    /// Slot (1..=366) of a hydrological month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
    /// [`CalendarError::InvalidDay`] for a day beyond the month's maximum length.
    pub fn slot(&self, hydro_month: u8, day: u8) -> Result<u16, CalendarError> {
        let cm = calendar_month(hydro_month, self.start_month)?;
        let max_day = max_days_in_month(cm)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month: hydro_month,
                max_day,
            });
        }
        Ok(self.month_start[hydro_month as usize] + day as u16 - 1)
    }

    /// Hydrological month and day of a slot.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSlot`] if `slot` is outside 1..=366.
    pub fn month_day(&self, slot: u16) -> Result<(u8, u8), CalendarError> {
        if !(1..=SLOTS_PER_YEAR).contains(&slot) {
            return Err(CalendarError::InvalidSlot { slot });
        }
        let hm = (1..=12u8)
            .rev()
            .find(|&m| self.month_start[m as usize] <= slot)
            .ok_or(CalendarError::InvalidSlot { slot })?;
        let day = (slot - self.month_start[hm as usize] + 1) as u8;
        Ok((hm, day))
    }

    /// Whether a slot is a real day of the given hydrological year.
    ///
    /// Only February 29 of a common year is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSlot`] if `slot` is outside 1..=366.
    pub fn slot_exists(&self, hydro_year: i32, slot: u16) -> Result<bool, CalendarError> {
        let (hm, day) = self.month_day(slot)?;
        let cm = calendar_month(hm, self.start_month)?;
        let cy = calendar_year(hydro_year, hm, self.start_month)?;
        Ok(day <= days_in_month(cy, cm)?)
    }

    /// Number of real days in a hydrological year (365 or 366).
    pub fn days_in_year(&self, hydro_year: i32) -> u16 {
        (1..=SLOTS_PER_YEAR)
            .filter(|&s| self.slot_exists(hydro_year, s).unwrap_or(false))
            .count() as u16
    }
}
