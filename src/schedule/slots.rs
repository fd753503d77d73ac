use chrono::NaiveDate;

use crate::schedule::duration::{TimeFormat, TimeOfDay};
use crate::schedule::week_range::WeekWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGranularity {
    Hourly,
    QuarterHour,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotCatalog {
    granularity: SlotGranularity,
    slots: Vec<TimeOfDay>,
}

impl SlotCatalog {
    pub fn hourly() -> Self {
        Self::generate(SlotGranularity::Hourly, TimeOfDay::new(8, 0), TimeOfDay::new(23, 0), 60)
    }

    pub fn quarter_hour() -> Self {
        Self::generate(
            SlotGranularity::QuarterHour,
            TimeOfDay::new(16, 30),
            TimeOfDay::new(18, 0),
            15,
        )
    }

    fn generate(
        granularity: SlotGranularity,
        first: TimeOfDay,
        last: TimeOfDay,
        step_minutes: u32,
    ) -> Self {
        let mut slots = Vec::new();
        let mut current = first;
        while current <= last {
            slots.push(current);
            current = current.add_minutes(step_minutes);
        }
        Self { granularity, slots }
    }

    pub fn granularity(&self) -> SlotGranularity {
        self.granularity
    }

    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(TimeOfDay::label).collect()
    }

    pub fn display_labels(&self, format: TimeFormat) -> Vec<String> {
        self.slots.iter().map(|slot| slot.display(format)).collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.slots.iter().any(|slot| slot.label() == label)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyMark {
    pub date: NaiveDate,
    pub time: String,
}

pub fn sample_busy_marks(week: &WeekWindow) -> Vec<BusyMark> {
    vec![BusyMark {
        date: week.days()[4],
        time: TimeOfDay::new(15, 0).label(),
    }]
}
