use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    days: [NaiveDate; 7],
}

impl WeekWindow {
    pub fn containing(reference: NaiveDate) -> Self {
        let offset = reference.weekday().num_days_from_sunday() as u64;
        let start = reference
            .checked_sub_days(Days::new(offset))
            .unwrap_or(reference);

        let mut days = [start; 7];
        for (index, day) in days.iter_mut().enumerate() {
            *day = start
                .checked_add_days(Days::new(index as u64))
                .unwrap_or(start);
        }
        Self { days }
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.days[6]
    }

    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn prev(&self) -> Self {
        let reference = self
            .start()
            .checked_sub_days(Days::new(7))
            .unwrap_or(self.start());
        Self::containing(reference)
    }

    pub fn next(&self) -> Self {
        let reference = self
            .start()
            .checked_add_days(Days::new(7))
            .unwrap_or(self.start());
        Self::containing(reference)
    }

    pub fn label(&self) -> String {
        let start = self.start();
        let end = self.end();

        if start.month() == end.month() {
            format!(
                "{} - {} {} {}",
                start.day(),
                end.day(),
                start.format("%b"),
                start.year()
            )
        } else {
            format!(
                "{} {} - {} {} {}",
                start.day(),
                start.format("%b"),
                end.day(),
                end.format("%b"),
                start.year()
            )
        }
    }
}
