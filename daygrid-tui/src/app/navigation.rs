use crate::calendar;

use super::*;

impl App {
    pub fn next_month(&mut self) {
        self.show_month(calendar::next_month(self.view_date));
    }

    pub fn previous_month(&mut self) {
        self.show_month(calendar::previous_month(self.view_date));
    }

    pub fn go_to_today(&mut self) {
        self.view_date = self.today;
        self.cursor_date = self.today;
        self.reset_cell_focus();
    }

    /// Show the month starting at `first`, with the cursor on its first day.
    fn show_month(&mut self, first: Date) {
        self.view_date = first;
        self.cursor_date = first;
        self.reset_cell_focus();
    }

    /// Move the cursor by `delta` days; leaving the month navigates with it.
    pub fn move_cursor_days(&mut self, delta: i64) {
        let Some(target) = self
            .cursor_date
            .checked_add(time::Duration::days(delta))
        else {
            return;
        };
        self.cursor_date = target;
        if !self.month().contains(target) {
            self.view_date = MonthRef::of(target).first_day();
        }
        self.reset_cell_focus();
    }

    /// Cycle focus forward through the tasks in the cursor cell.
    pub fn focus_next_task(&mut self) {
        let count = self.tasks_on(self.cursor_date).len();
        if count == 0 {
            self.focused_task_index = None;
            return;
        }
        self.focused_task_index = Some(match self.focused_task_index {
            Some(i) if i + 1 < count => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn focus_previous_task(&mut self) {
        let count = self.tasks_on(self.cursor_date).len();
        if count == 0 {
            self.focused_task_index = None;
            return;
        }
        self.focused_task_index = Some(match self.focused_task_index {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Keep the focused index valid after the cursor cell's tasks changed.
    pub(crate) fn clamp_focus(&mut self) {
        let count = self.tasks_on(self.cursor_date).len();
        self.focused_task_index = match self.focused_task_index {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    fn reset_cell_focus(&mut self) {
        self.focused_task_index = None;
        self.popover = None;
    }

    /// Enter on the cursor cell: popover for the focused task, else focus the
    /// first task, else start a new task on that day.
    pub fn activate_cursor(&mut self) {
        if self.focused_task().is_some() {
            self.open_popover();
        } else if !self.tasks_on(self.cursor_date).is_empty() {
            self.focused_task_index = Some(0);
        } else {
            self.open_editor_for_new(self.cursor_date);
        }
    }

    pub fn edit_focused_task(&mut self) {
        if let Some(id) = self.focused_task().map(|t| t.id.clone()) {
            self.open_editor_for_edit(&id);
        }
    }

    pub fn open_popover(&mut self) {
        let Some(task_id) = self.focused_task().map(|t| t.id.clone()) else {
            return;
        };
        let Some(anchor) = self.month_grid().position_of(self.cursor_date) else {
            return;
        };
        self.popover = Some(PopoverState { task_id, anchor });
        self.navigate_to(View::Popover);
    }

    pub fn close_popover(&mut self) {
        self.popover = None;
        self.navigate_to(View::Calendar);
    }

    /// Task currently shown in the popover, if it still exists.
    pub fn popover_task(&self) -> Option<&Task> {
        self.popover.as_ref().and_then(|p| self.task(&p.task_id))
    }

    pub fn focus_prompt(&mut self) {
        self.popover = None;
        self.navigate_to(View::Prompt);
    }

    pub fn leave_prompt(&mut self) {
        self.navigate_to(View::Calendar);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use time::macros::date;

    #[test]
    fn month_navigation_rolls_over_year_boundaries() {
        let mut app = test_app();
        app.view_date = date!(2024 - 12 - 15);
        app.next_month();
        assert_eq!(app.view_date, date!(2025 - 01 - 01));
        assert_eq!(app.cursor_date, date!(2025 - 01 - 01));

        app.previous_month();
        app.previous_month();
        assert_eq!(app.view_date, date!(2024 - 11 - 01));
        assert_eq!(app.month().title(), "November 2024");
    }

    #[test]
    fn go_to_today_restores_reference_date() {
        let mut app = test_app();
        app.next_month();
        app.next_month();
        app.go_to_today();
        assert_eq!(app.view_date, TODAY);
        assert_eq!(app.cursor_date, TODAY);
    }

    #[test]
    fn cursor_crossing_month_edge_navigates() {
        let mut app = test_app();
        app.cursor_date = date!(2024 - 07 - 30);
        app.move_cursor_days(7);
        assert_eq!(app.cursor_date, date!(2024 - 08 - 06));
        assert_eq!(app.view_date, date!(2024 - 08 - 01));

        app.move_cursor_days(-7);
        assert_eq!(app.view_date, date!(2024 - 07 - 01));
    }

    #[test]
    fn task_focus_cycles_within_cell() {
        let mut app = test_app_with(vec![
            task("1", "Gym", "2024-07-10"),
            task("2", "Elsewhere", "2024-07-11"),
            task("3", "Lunch", "2024-07-10"),
        ]);
        app.focus_next_task();
        assert_eq!(app.focused_task().unwrap().id, "1");
        app.focus_next_task();
        assert_eq!(app.focused_task().unwrap().id, "3");
        app.focus_next_task();
        assert_eq!(app.focused_task().unwrap().id, "1");
        app.focus_previous_task();
        assert_eq!(app.focused_task().unwrap().id, "3");

        app.move_cursor_days(1);
        assert!(app.focused_task().is_none());
    }

    #[test]
    fn enter_focuses_then_opens_popover() {
        let mut app = test_app_with(vec![task("1", "Gym", "2024-07-10")]);
        app.activate_cursor();
        assert_eq!(app.focused_task_index, Some(0));
        assert!(app.popover.is_none());

        app.activate_cursor();
        let popover = app.popover.as_ref().unwrap();
        assert_eq!(popover.task_id, "1");
        // 2024-07-10 is the Wednesday of the second week row.
        assert_eq!(popover.anchor, (1, 3));
        assert_eq!(app.current_view, View::Popover);
        assert_eq!(app.popover_task().unwrap().title, "Gym");

        app.close_popover();
        assert!(app.popover.is_none());
        assert_eq!(app.current_view, View::Calendar);
    }

    #[test]
    fn enter_on_empty_day_opens_create_editor() {
        let mut app = test_app();
        app.activate_cursor();
        assert_eq!(app.current_view, View::Editor);
        assert_eq!(app.editor.as_ref().unwrap().date.value, "2024-07-10");
    }

    #[test]
    fn deleting_last_task_in_cell_clears_focus() {
        let mut app = test_app_with(vec![task("1", "Gym", "2024-07-10")]);
        app.focus_next_task();
        app.edit_focused_task();
        app.request_delete();
        app.confirm_delete();
        assert!(app.tasks().is_empty());
        assert_eq!(app.focused_task_index, None);
        assert!(app.popover.is_none());
    }
}
