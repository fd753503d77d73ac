use chrono::NaiveDate;

use crate::booking::event_type::EventType;
use crate::booking::query;
use crate::schedule::month_grid::MonthGrid;
use crate::schedule::slots::{self, BusyMark, SlotCatalog};
use crate::schedule::week_range::WeekWindow;
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Monthly,
    Weekly,
}

#[derive(Debug, Clone)]
pub struct BookingApp {
    pub event: EventType,
    pub view: ViewType,
    pub grid: MonthGrid,
    pub week: WeekWindow,
    pub selection: SelectionState,
    pub busy: Vec<BusyMark>,
}

impl BookingApp {
    pub fn new(event: EventType, reference: NaiveDate) -> Self {
        let week = WeekWindow::containing(reference);
        Self {
            event,
            view: ViewType::Monthly,
            grid: MonthGrid::containing(reference),
            busy: slots::sample_busy_marks(&week),
            week,
            selection: SelectionState::default(),
        }
    }

    pub fn with_view(mut self, view: ViewType) -> Self {
        self.view = view;
        self
    }

    pub fn switch_view(&mut self, view: ViewType) {
        if self.view != view {
            self.view = view;
            self.selection.reset();
        }
    }

    pub fn active_catalog(&self) -> SlotCatalog {
        match self.view {
            ViewType::Monthly => SlotCatalog::quarter_hour(),
            ViewType::Weekly => SlotCatalog::hourly(),
        }
    }

    pub fn previous_month(&mut self) {
        self.grid = self.grid.prev();
        self.selection.reset();
    }

    pub fn next_month(&mut self) {
        self.grid = self.grid.next();
        self.selection.reset();
    }

    pub fn previous_week(&mut self) {
        self.set_week(self.week.prev());
    }

    pub fn next_week(&mut self) {
        self.set_week(self.week.next());
    }

    pub fn jump_to_date(&mut self, date: NaiveDate) {
        self.grid = MonthGrid::containing(date);
        self.set_week(WeekWindow::containing(date));
    }

    fn set_week(&mut self, week: WeekWindow) {
        self.week = week;
        self.busy = slots::sample_busy_marks(&self.week);
        self.selection.reset();
    }

    pub fn select_day(&mut self, day: u32) {
        if let Some(date) = self.grid.date_of(day) {
            self.selection.choose_date(date);
        }
    }

    pub fn select_time(&mut self, label: &str) {
        let Some(date) = self.selection.date() else {
            return;
        };
        if !self.active_catalog().contains(label) || self.is_busy(date, label) {
            return;
        }
        self.selection.choose_time(label);
    }

    pub fn select_slot(&mut self, date: NaiveDate, label: &str) {
        if !self.week.contains(date) {
            return;
        }
        if !self.active_catalog().contains(label) || self.is_busy(date, label) {
            return;
        }
        self.selection.choose_date(date);
        self.selection.choose_time(label);
    }

    pub fn is_busy(&self, date: NaiveDate, label: &str) -> bool {
        self.busy
            .iter()
            .any(|mark| mark.date == date && mark.time == label)
    }

    pub fn form_path(&self) -> Option<String> {
        self.selection
            .selection()
            .map(|selection| query::form_path(&self.event.id, &selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::confirmation;
    use crate::booking::event_type;
    use crate::storage::config::Config;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn interviews_app() -> BookingApp {
        BookingApp::new(event_type::find("interviews").unwrap(), date(2025, 7, 31))
    }

    #[test]
    fn new_app_opens_monthly_view_on_reference_month() {
        let app = interviews_app();

        assert_eq!(app.view, ViewType::Monthly);
        assert_eq!(app.grid, MonthGrid::new(2025, 7));
        assert_eq!(app.week.start(), date(2025, 7, 27));
        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn month_navigation_clears_active_selection() {
        let mut app = interviews_app();
        app.select_day(31);
        app.select_time("16:30");

        app.next_month();

        assert_eq!(app.grid, MonthGrid::new(2025, 8));
        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn week_navigation_clears_active_selection() {
        let mut app = interviews_app().with_view(ViewType::Weekly);
        app.select_slot(date(2025, 7, 31), "14:00");

        app.previous_week();

        assert_eq!(app.week.start(), date(2025, 7, 20));
        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn jump_to_date_realigns_week_and_clears_selection() {
        let mut app = interviews_app().with_view(ViewType::Weekly);
        app.select_slot(date(2025, 7, 31), "14:00");

        app.jump_to_date(date(2025, 9, 10));

        assert_eq!(app.week.start(), date(2025, 9, 7));
        assert_eq!(app.grid, MonthGrid::new(2025, 9));
        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn switching_views_clears_selection() {
        let mut app = interviews_app();
        app.select_day(31);
        app.select_time("16:30");

        app.switch_view(ViewType::Weekly);

        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn selecting_time_before_date_is_ignored() {
        let mut app = interviews_app();

        app.select_time("16:30");

        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn selecting_label_outside_catalog_is_ignored() {
        let mut app = interviews_app();
        app.select_day(31);

        app.select_time("3:07");

        assert_eq!(app.selection.time(), None);
    }

    #[test]
    fn selecting_day_outside_month_is_ignored() {
        let mut app = interviews_app();

        app.select_day(32);

        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn weekly_slot_click_chooses_date_and_time_together() {
        let mut app = interviews_app().with_view(ViewType::Weekly);

        app.select_slot(date(2025, 7, 29), "9:00");

        assert!(app.selection.is_slot_selected(date(2025, 7, 29), "9:00"));
    }

    #[test]
    fn slot_outside_displayed_week_is_ignored() {
        let mut app = interviews_app().with_view(ViewType::Weekly);

        app.select_slot(date(2025, 8, 4), "9:00");

        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn busy_slot_cannot_be_selected() {
        let mut app = interviews_app().with_view(ViewType::Weekly);

        assert!(app.is_busy(date(2025, 7, 31), "15:00"));

        app.select_slot(date(2025, 7, 31), "15:00");

        assert_eq!(app.selection, SelectionState::NoSelection);
    }

    #[test]
    fn monthly_view_offers_quarter_hour_slots() {
        let app = interviews_app();
        assert_eq!(app.active_catalog(), SlotCatalog::quarter_hour());
    }

    #[test]
    fn weekly_view_offers_hourly_slots() {
        let app = interviews_app().with_view(ViewType::Weekly);
        assert_eq!(app.active_catalog(), SlotCatalog::hourly());
    }

    #[test]
    fn form_path_exists_only_after_full_selection() {
        let mut app = interviews_app();
        assert_eq!(app.form_path(), None);

        app.select_day(31);
        assert_eq!(app.form_path(), None);

        app.select_time("16:30");
        assert_eq!(
            app.form_path(),
            Some("/book/interviews/form?date=2025-07-31T16:30:00Z&time=16:30".to_string())
        );
    }

    #[test]
    fn booking_flow_round_trip_computes_end_time() {
        let mut app = interviews_app().with_view(ViewType::Weekly);
        app.select_slot(date(2025, 7, 31), "14:00");

        let selection = app.selection.selection().unwrap();
        let encoded = query::encode_details(&selection, "Ana", "a@b.co");
        let decoded = query::decode_confirmation(&app.event.id, &encoded).unwrap();
        let confirmation = confirmation::build(&decoded, &Config::default()).unwrap();

        assert_eq!(confirmation.title, "Interviews");
        assert_eq!(confirmation.date_label, "Thursday, July 31, 2025");
        assert_eq!(confirmation.time_range, "14:00 - 14:30");
    }
}
