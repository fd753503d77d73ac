pub mod duration;
pub mod month_grid;
pub mod slots;
pub mod week_range;

pub use duration::{TimeFormat, TimeOfDay};
pub use month_grid::{CalendarCell, MonthGrid};
pub use slots::{BusyMark, SlotCatalog, SlotGranularity, sample_busy_marks};
pub use week_range::WeekWindow;
