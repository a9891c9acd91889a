use crate::ui::app::App;
use crate::ui::layout::HitTarget;
use crate::ui::navigation::NavigationIntent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Outcome of routing one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Not a presentation input; default handling applies.
    Ignored,
    /// Handled here; default handling (scrolling, menus) is suppressed.
    Consumed,
}

/// Navigation keys: Left/Up go back, Right/Down/Space go forward,
/// Home/End jump to the ends.
pub fn nav_intent(key: &KeyEvent) -> Option<NavigationIntent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Up => Some(NavigationIntent::Previous),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => Some(NavigationIntent::Next),
        KeyCode::Home => Some(NavigationIntent::First),
        KeyCode::End => Some(NavigationIntent::Last),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::Ignored;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc) || is_plain_char(key, 'q') {
        app.request_quit();
        return InputAction::Consumed;
    }

    if let Some(intent) = nav_intent(&key) {
        // Consumed even when the move is refused at either end.
        app.navigate(intent);
        return InputAction::Consumed;
    }

    if is_plain_char(key, 't') {
        app.toggle_timer();
        return InputAction::Consumed;
    }

    InputAction::Ignored
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hit_test(mouse.column, mouse.row) {
                Some(HitTarget::PrevButton) => {
                    app.navigate(NavigationIntent::Previous);
                }
                Some(HitTarget::NextButton) => {
                    app.navigate(NavigationIntent::Next);
                }
                Some(HitTarget::Indicator(position)) => {
                    app.navigate(NavigationIntent::GoTo(position));
                }
                Some(HitTarget::Viewport) => app.begin_drag(mouse.column, mouse.row),
                None => return InputAction::Ignored,
            }
            InputAction::Consumed
        }
        MouseEventKind::Drag(MouseButton::Left) if app.drag_in_progress() => {
            InputAction::Consumed
        }
        MouseEventKind::Up(MouseButton::Left) => match app.end_drag(mouse.column, mouse.row) {
            Some(_) => InputAction::Consumed,
            None => InputAction::Ignored,
        },
        // No context menu over the slides.
        MouseEventKind::Down(MouseButton::Right) => {
            if app.hit_test(mouse.column, mouse.row) == Some(HitTarget::Viewport) {
                InputAction::Consumed
            } else {
                InputAction::Ignored
            }
        }
        _ => InputAction::Ignored,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_plain_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_keys_map_to_steps() {
        assert_eq!(nav_intent(&key(KeyCode::Left)), Some(NavigationIntent::Previous));
        assert_eq!(nav_intent(&key(KeyCode::Up)), Some(NavigationIntent::Previous));
        assert_eq!(nav_intent(&key(KeyCode::Right)), Some(NavigationIntent::Next));
        assert_eq!(nav_intent(&key(KeyCode::Down)), Some(NavigationIntent::Next));
        assert_eq!(nav_intent(&key(KeyCode::Char(' '))), Some(NavigationIntent::Next));
    }

    #[test]
    fn home_and_end_jump() {
        assert_eq!(nav_intent(&key(KeyCode::Home)), Some(NavigationIntent::First));
        assert_eq!(nav_intent(&key(KeyCode::End)), Some(NavigationIntent::Last));
    }

    #[test]
    fn other_keys_are_not_navigation() {
        assert_eq!(nav_intent(&key(KeyCode::Char('x'))), None);
        assert_eq!(nav_intent(&key(KeyCode::Enter)), None);
        assert_eq!(
            nav_intent(&KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn quit_keys() {
        assert!(is_ctrl_char(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            'c'
        ));
        assert!(is_plain_char(key(KeyCode::Char('Q')), 'q'));
        assert!(!is_plain_char(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            'q'
        ));
    }
}
