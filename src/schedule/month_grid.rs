use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(u32),
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn days_in_month(&self) -> u32 {
        let next_month_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };

        next_month_first
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(0)
    }

    pub fn first_day_offset(&self) -> u32 {
        self.date_of(1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn cells(&self) -> Vec<CalendarCell> {
        let mut cells = Vec::new();
        for _ in 0..self.first_day_offset() {
            cells.push(CalendarCell::Blank);
        }
        for day in 1..=self.days_in_month() {
            cells.push(CalendarCell::Day(day));
        }
        cells
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn title(&self) -> String {
        self.date_of(1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}
