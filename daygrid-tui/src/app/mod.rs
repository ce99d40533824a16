use std::sync::Arc;
use taskgen::TaskDate;
use time::Date;

use crate::calendar::{MonthGrid, MonthRef};
use crate::storage::KeyValueStore;
use crate::task_store::TaskStore;
use crate::theme::Theme;
use crate::types::Task;

mod editor;
mod generation;
mod navigation;
mod state;
pub use state::{
    DeleteContext, EditorField, EditorMode, EditorState, GenerationRequest,
    GenerationState, PopoverState, TextInput, View,
};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,
    pub theme: Theme,

    // Dates: `today` is refreshed by the event loop, `view_date` is the reference
    // date (today, or the 1st of a navigated month)
    pub today: Date,
    pub view_date: Date,
    pub cursor_date: Date,
    pub focused_task_index: Option<usize>,

    // AI generation
    pub generation: GenerationState,
    pub error_message: Option<String>,
    pub prompt_input: TextInput,

    // Overlays
    pub editor: Option<EditorState>,
    pub popover: Option<PopoverState>,
    pub delete_context: Option<DeleteContext>,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    store: TaskStore,
    settings: Arc<dyn KeyValueStore>,
}

impl App {
    pub fn new(backend: Arc<dyn KeyValueStore>, today: Date) -> Self {
        let store = TaskStore::load(Arc::clone(&backend));
        let theme = Theme::load(backend.as_ref());
        Self {
            running: true,
            status_message: None,
            current_view: View::Calendar,
            theme,
            today,
            view_date: today,
            cursor_date: today,
            focused_task_index: None,
            generation: GenerationState::Idle,
            error_message: None,
            prompt_input: TextInput::new(),
            editor: None,
            popover: None,
            delete_context: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            store,
            settings: backend,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.store.get(id)
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn month(&self) -> MonthRef {
        MonthRef::of(self.view_date)
    }

    pub fn month_grid(&self) -> MonthGrid<'_> {
        MonthGrid::build(self.month(), self.store.tasks(), self.today)
    }

    /// Tasks on `date` in collection order, matching the grid cell order.
    pub fn tasks_on(&self, date: Date) -> Vec<&Task> {
        let key = TaskDate::new(date);
        self.store.tasks().iter().filter(|t| t.date == key).collect()
    }

    /// The focused task as the grid shows it in the cursor cell.
    pub fn focused_task(&self) -> Option<&Task> {
        let idx = self.focused_task_index?;
        self.month_grid()
            .cell_for(self.cursor_date)?
            .tasks
            .get(idx)
            .copied()
    }

    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    pub fn has_tasks(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn is_generating(&self) -> bool {
        self.generation == GenerationState::Pending
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme.persist(self.settings.as_ref());
        self.set_status(format!("Switched to {} theme", self.theme));
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Keep `today` in step with the wall clock across midnight.
    pub fn refresh_today(&mut self, today: Date) {
        self.today = today;
    }

    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::storage::{MemoryStore, THEME_KEY};

    #[test]
    fn starts_on_today_with_calendar_view() {
        let app = test_app();
        assert_eq!(app.view_date, TODAY);
        assert_eq!(app.cursor_date, TODAY);
        assert_eq!(app.current_view, View::Calendar);
        assert_eq!(app.generation, GenerationState::Idle);
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn tasks_on_keeps_collection_order() {
        let app = test_app_with(vec![
            task("1", "Gym", "2024-07-10"),
            task("2", "Dentist", "2024-07-11"),
            task("3", "Lunch", "2024-07-10"),
        ]);
        let ids: Vec<&str> = app
            .tasks_on(TODAY)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn toggle_theme_persists_choice() {
        let backend = Arc::new(MemoryStore::new());
        let mut app = App::new(backend.clone(), TODAY);
        let before = app.theme;
        app.toggle_theme();
        assert_eq!(app.theme, before.toggled());
        assert_eq!(
            backend.get(THEME_KEY).unwrap().as_deref(),
            Some(before.toggled().as_str())
        );

        let reloaded = App::new(backend, TODAY);
        assert_eq!(reloaded.theme, before.toggled());
    }

    #[test]
    fn loads_tasks_from_backend() {
        let backend = Arc::new(MemoryStore::new());
        {
            let mut app = App::new(backend.clone(), TODAY);
            app.store_mut().append(vec![task("1", "Gym", "2024-07-10")]);
        }
        let app = App::new(backend, TODAY);
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].title, "Gym");
    }
}
