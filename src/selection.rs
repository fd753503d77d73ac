use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    DateChosen {
        date: NaiveDate,
    },
    SlotChosen {
        date: NaiveDate,
        time: String,
    },
}

impl SelectionState {
    pub fn choose_date(&mut self, date: NaiveDate) {
        *self = SelectionState::DateChosen { date };
    }

    pub fn choose_time(&mut self, time: &str) {
        if let Some(date) = self.date() {
            *self = SelectionState::SlotChosen {
                date,
                time: time.to_string(),
            };
        }
    }

    pub fn reset(&mut self) {
        *self = SelectionState::NoSelection;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::DateChosen { date } | SelectionState::SlotChosen { date, .. } => {
                Some(*date)
            }
        }
    }

    pub fn time(&self) -> Option<&str> {
        match self {
            SelectionState::SlotChosen { time, .. } => Some(time),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        match self {
            SelectionState::SlotChosen { date, time } => Some(Selection {
                date: *date,
                time: time.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_date_selected(&self, date: NaiveDate) -> bool {
        self.date() == Some(date)
    }

    pub fn is_slot_selected(&self, date: NaiveDate, time: &str) -> bool {
        match self {
            SelectionState::SlotChosen {
                date: chosen_date,
                time: chosen_time,
            } => *chosen_date == date && chosen_time == time,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn starts_with_no_selection() {
        let state = SelectionState::default();
        assert_eq!(state, SelectionState::NoSelection);
        assert_eq!(state.date(), None);
        assert_eq!(state.time(), None);
    }

    #[test]
    fn choosing_time_without_date_is_ignored() {
        let mut state = SelectionState::default();

        state.choose_time("14:00");

        assert_eq!(state, SelectionState::NoSelection);
    }

    #[test]
    fn choosing_date_then_time_completes_selection() {
        let mut state = SelectionState::default();

        state.choose_date(date(2025, 7, 31));
        state.choose_time("14:00");

        assert_eq!(
            state.selection(),
            Some(Selection {
                date: date(2025, 7, 31),
                time: "14:00".to_string(),
            })
        );
    }

    #[test]
    fn choosing_new_date_clears_chosen_time() {
        let mut state = SelectionState::default();
        state.choose_date(date(2025, 7, 31));
        state.choose_time("14:00");

        state.choose_date(date(2025, 7, 30));

        assert_eq!(
            state,
            SelectionState::DateChosen {
                date: date(2025, 7, 30)
            }
        );
        assert_eq!(state.time(), None);
    }

    #[test]
    fn choosing_another_time_replaces_the_slot() {
        let mut state = SelectionState::default();
        state.choose_date(date(2025, 7, 31));
        state.choose_time("14:00");

        state.choose_time("15:00");

        assert_eq!(state.time(), Some("15:00"));
        assert_eq!(state.date(), Some(date(2025, 7, 31)));
    }

    #[test]
    fn reset_returns_to_no_selection() {
        let mut state = SelectionState::default();
        state.choose_date(date(2025, 7, 31));
        state.choose_time("14:00");

        state.reset();

        assert_eq!(state, SelectionState::NoSelection);
    }

    #[test]
    fn slot_equality_compares_date_and_label() {
        let mut state = SelectionState::default();
        state.choose_date(date(2025, 7, 31));
        state.choose_time("14:00");

        assert!(state.is_slot_selected(date(2025, 7, 31), "14:00"));
        assert!(!state.is_slot_selected(date(2025, 7, 31), "15:00"));
        assert!(!state.is_slot_selected(date(2025, 7, 30), "14:00"));
    }

    #[test]
    fn date_without_time_is_not_a_selected_slot() {
        let mut state = SelectionState::default();
        state.choose_date(date(2025, 7, 31));

        assert!(state.is_date_selected(date(2025, 7, 31)));
        assert!(!state.is_slot_selected(date(2025, 7, 31), "14:00"));
        assert_eq!(state.selection(), None);
    }
}
