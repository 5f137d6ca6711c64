//! Keyboard and mouse input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::models::LogKind;
use crate::state::Stage;
use crate::ui::stepper_hit;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.state.toggle_sidebar(),
            KeyCode::Char('t') => {
                self.state.toggle_theme();
                self.state.push_log(LogKind::Action, "Theme toggled");
            }
            KeyCode::Up => {
                if self.selected_dataset > 0 {
                    self.selected_dataset -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_dataset + 1 < self.datasets.len() {
                    self.selected_dataset += 1;
                }
            }
            KeyCode::Left => {
                let current = self.state.current_step();
                if current > 0 {
                    self.select_step(current - 1);
                }
            }
            KeyCode::Right => self.select_step(self.state.current_step() + 1),
            KeyCode::Char(c @ '1'..='7') => {
                let idx = (c as usize) - ('1' as usize);
                self.select_step(idx);
            }
            KeyCode::Enter => self.confirm(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(area) = self.stepper_area {
            if let Some(step) = stepper_hit(area, mouse.column, mouse.row) {
                self.select_step(step);
            }
        }
    }

    /// Select a stepper step. Locked future steps are a no-op.
    pub fn select_step(&mut self, step: usize) {
        if self.state.set_step(step) {
            self.state.push_log(
                LogKind::Action,
                format!("Moved to stage {}", self.state.stage().label()),
            );
        }
    }

    /// Stage-dependent primary action.
    fn confirm(&mut self) {
        match self.state.stage() {
            Stage::Datasets => {
                let Some(dataset) = self.datasets.get(self.selected_dataset) else {
                    return;
                };
                let id = dataset.id.clone();
                self.state
                    .push_log(LogKind::Action, format!("Selected dataset {}", id));
                self.load_preview(&id);
                self.start_session(&id);
                self.state.advance();
            }
            Stage::Monitoring => {
                // Final stage: completing it closes out the run.
                self.state.advance();
                self.disconnect();
            }
            _ => {
                self.state.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMessage;
    use crate::config::Config;
    use crate::models::Dataset;
    use ratatui::layout::Rect;
    use tokio::sync::mpsc;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Config::default(), tx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app2 = app();
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[tokio::test]
    async fn test_number_key_on_locked_step_is_noop() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.state.current_step(), 0);
        // The no-op must not add an action log entry either.
        assert!(app.state.log().is_empty());
    }

    #[tokio::test]
    async fn test_number_key_on_completed_step_selects_it() {
        let mut app = app();
        app.state.advance();
        app.state.advance();
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.state.current_step(), 0);
    }

    #[tokio::test]
    async fn test_arrow_keys_move_within_selectable_range() {
        let mut app = app();
        app.state.advance();
        assert_eq!(app.state.current_step(), 1);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.state.current_step(), 0);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state.current_step(), 1);

        // Right beyond the completed frontier stays put.
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state.current_step(), 1);
    }

    #[tokio::test]
    async fn test_sidebar_and_theme_keys() {
        let mut app = app();
        let before = app.state.sidebar_open();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.state.sidebar_open(), !before);

        let theme_before = app.state.theme();
        app.handle_key(key(KeyCode::Char('t')));
        assert_ne!(app.state.theme(), theme_before);
    }

    #[tokio::test]
    async fn test_dataset_selection_bounds() {
        let mut app = app();
        app.update(AppMessage::DatasetsLoaded(vec![
            Dataset {
                id: "a".into(),
                name: "A".into(),
                rows: 1,
                columns: 1,
                description: None,
            },
            Dataset {
                id: "b".into(),
                name: "B".into(),
                rows: 1,
                columns: 1,
                description: None,
            },
        ]));

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_dataset, 0);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_dataset, 1);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_dataset, 1);
    }

    #[tokio::test]
    async fn test_mouse_click_on_stepper_selects_completed_step() {
        let mut app = app();
        app.state.advance();
        app.state.advance();
        app.stepper_area = Some(Rect::new(0, 0, 70, 1));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.state.current_step(), 0);
    }

    #[tokio::test]
    async fn test_mouse_click_on_locked_step_is_noop() {
        let mut app = app();
        app.stepper_area = Some(Rect::new(0, 0, 70, 1));

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 65,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.state.current_step(), 0);
    }

    #[tokio::test]
    async fn test_enter_without_datasets_is_noop() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.current_step(), 0);
    }
}
