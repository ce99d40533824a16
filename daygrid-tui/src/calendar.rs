//! Month grid construction and month navigation.
//!
//! Everything here is a pure function of its inputs; "today" is passed in.

use std::collections::HashMap;
use taskgen::TaskDate;
use time::{Date, Month};

use crate::types::Task;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month, represented by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    first: Date,
}

impl MonthRef {
    pub fn of(date: Date) -> Self {
        Self {
            first: date.replace_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        self.first.month()
    }

    pub fn next(&self) -> Self {
        Self {
            first: next_month(self.first),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            first: previous_month(self.first),
        }
    }

    pub fn days_in_month(&self) -> u8 {
        let next = self.next().first;
        if next == self.first {
            // Last representable month; count forward instead.
            return (1..=31u8)
                .take_while(|d| self.first.replace_day(*d).is_ok())
                .count() as u8;
        }
        (next - self.first).whole_days() as u8
    }

    /// Blank cells before the 1st, with weeks starting on Sunday.
    pub fn leading_blanks(&self) -> usize {
        self.first.weekday().number_days_from_sunday() as usize
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month(), self.year())
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// First day of the month after `date`'s month.
pub fn next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        m => (date.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}

/// First day of the month before `date`'s month.
pub fn previous_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        m => (date.year(), m.previous()),
    };
    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: TaskDate,
    pub tasks: Vec<&'a Task>,
    pub is_today: bool,
}

impl DayCell<'_> {
    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

impl<'a> GridCell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Blank => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    month: MonthRef,
    cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Lay out `month` as whole weeks, bucketing `tasks` by exact date.
    pub fn build(month: MonthRef, tasks: &'a [Task], today: Date) -> Self {
        let mut by_date: HashMap<TaskDate, Vec<&'a Task>> = HashMap::new();
        for task in tasks.iter().filter(|t| month.contains(t.date.date())) {
            by_date.entry(task.date).or_default().push(task);
        }

        let leading = month.leading_blanks();
        let days = month.days_in_month() as usize;
        let trailing = (7 - (leading + days) % 7) % 7;

        let mut cells = Vec::with_capacity(leading + days + trailing);
        cells.extend(std::iter::repeat_with(|| GridCell::Blank).take(leading));
        for offset in 0..days {
            let date = month.first + time::Duration::days(offset as i64);
            let key = TaskDate::new(date);
            cells.push(GridCell::Day(DayCell {
                date: key,
                tasks: by_date.remove(&key).unwrap_or_default(),
                is_today: date == today,
            }));
        }
        cells.extend(std::iter::repeat_with(|| GridCell::Blank).take(trailing));

        Self { month, cells }
    }

    pub fn month(&self) -> MonthRef {
        self.month
    }

    pub fn cells(&self) -> &[GridCell<'a>] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell<'a>]> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    pub fn cell_for(&self, date: Date) -> Option<&DayCell<'a>> {
        let (week, weekday) = self.position_of(date)?;
        self.cells[week * 7 + weekday].as_day()
    }

    /// (week row, weekday column) of `date`, if it falls in this month.
    pub fn position_of(&self, date: Date) -> Option<(usize, usize)> {
        if !self.month.contains(date) {
            return None;
        }
        let index = self.month.leading_blanks() + date.day() as usize - 1;
        Some((index / 7, index % 7))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgen::TaskDraft;
    use time::macros::date;

    fn task(id: &str, date: &str) -> Task {
        Task::with_id(id, TaskDraft::new(id, TaskDate::parse(date).unwrap()))
    }

    #[test]
    fn february_2024_has_29_days_starting_thursday() {
        let month = MonthRef::of(date!(2024 - 02 - 14));
        let grid = MonthGrid::build(month, &[], date!(2030 - 01 - 01));

        assert_eq!(grid.day_cells().count(), 29);
        assert_eq!(month.leading_blanks(), 4);
        assert!(grid.cells()[..4].iter().all(|c| *c == GridCell::Blank));
        assert_eq!(grid.cells()[4].as_day().unwrap().day(), 1);
        assert_eq!(grid.cells().len() % 7, 0);
        assert_eq!(grid.cells().len(), 35);
    }

    #[test]
    fn non_leap_february_has_28_days() {
        let month = MonthRef::of(date!(2023 - 02 - 01));
        assert_eq!(month.days_in_month(), 28);
        assert_eq!(MonthRef::of(date!(1900 - 02 - 01)).days_in_month(), 28);
        assert_eq!(MonthRef::of(date!(2000 - 02 - 01)).days_in_month(), 29);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_blanks() {
        let month = MonthRef::of(date!(2024 - 09 - 30));
        let grid = MonthGrid::build(month, &[], date!(2024 - 09 - 01));
        assert_eq!(month.leading_blanks(), 0);
        assert!(grid.cells()[0].as_day().unwrap().is_today);
        assert_eq!(grid.cells().len(), 35);
    }

    #[test]
    fn tasks_land_only_on_their_exact_date() {
        let tasks = vec![
            task("a", "2024-07-10"),
            task("b", "2024-07-04"),
            task("c", "2024-08-04"),
            task("d", "2024-07-04"),
        ];
        let grid = MonthGrid::build(MonthRef::of(date!(2024 - 07 - 01)), &tasks, date!(2024 - 07 - 01));

        let fourth = grid.cell_for(date!(2024 - 07 - 04)).unwrap();
        let ids: Vec<&str> = fourth.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "d"]);

        let holders: Vec<u8> = grid
            .day_cells()
            .filter(|c| c.tasks.iter().any(|t| t.id == "b"))
            .map(|c| c.day())
            .collect();
        assert_eq!(holders, [4]);
        assert_eq!(grid.day_cells().map(|c| c.tasks.len()).sum::<usize>(), 3);
    }

    #[test]
    fn today_flag_matches_only_today() {
        let grid = MonthGrid::build(
            MonthRef::of(date!(2024 - 07 - 01)),
            &[],
            date!(2024 - 07 - 18),
        );
        let flagged: Vec<u8> = grid.day_cells().filter(|c| c.is_today).map(|c| c.day()).collect();
        assert_eq!(flagged, [18]);
    }

    #[test]
    fn position_of_maps_to_week_and_weekday() {
        let grid = MonthGrid::build(MonthRef::of(date!(2024 - 07 - 01)), &[], date!(2024 - 07 - 01));
        // 2024-07-01 is a Monday.
        assert_eq!(grid.position_of(date!(2024 - 07 - 01)), Some((0, 1)));
        assert_eq!(grid.position_of(date!(2024 - 07 - 31)), Some((4, 3)));
        assert_eq!(grid.position_of(date!(2024 - 08 - 01)), None);
        assert_eq!(grid.week_count(), 5);
    }

    #[test]
    fn navigation_rolls_over_years() {
        assert_eq!(next_month(date!(2024 - 12 - 25)), date!(2025 - 01 - 01));
        assert_eq!(previous_month(date!(2024 - 01 - 31)), date!(2023 - 12 - 01));
        assert_eq!(next_month(date!(2024 - 01 - 31)), date!(2024 - 02 - 01));
        assert_eq!(MonthRef::of(date!(2024 - 03 - 15)).previous().title(), "February 2024");
    }
}
