//! Key and mouse mapping from terminal events to session input.

use crate::types::{PanDirection, PointerEvent, SessionAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to session actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SessionAction> {
    match key.code {
        // Simulation
        KeyCode::Char(' ') => Some(SessionAction::ToggleRun),
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(SessionAction::Step),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SessionAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C')
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(SessionAction::Clear)
        }
        KeyCode::Char('g') | KeyCode::Char('G') => Some(SessionAction::StampGlider),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SessionAction::CyclePattern),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(SessionAction::StampPattern),

        // Camera
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(SessionAction::Pan(PanDirection::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(SessionAction::Pan(PanDirection::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(SessionAction::Pan(PanDirection::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(SessionAction::Pan(PanDirection::Down))
        }
        KeyCode::Char('+') | KeyCode::Char('=') => Some(SessionAction::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(SessionAction::ZoomOut),

        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key requests writing the grid to the level file.
pub fn should_save(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('w') | KeyCode::Char('W'))
}

/// Map a mouse event to a pointer event.
///
/// Presses and drags at or below `view_height` (the HUD rows) are dropped;
/// releases always pass so a stroke can't get stuck.
pub fn handle_mouse_event(event: MouseEvent, view_height: u16) -> Option<PointerEvent> {
    let x = event.column as i32;
    let y = event.row as i32;
    let in_view = event.row < view_height;

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if in_view => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) if in_view => Some(PointerEvent::Drag { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
        MouseEventKind::ScrollUp if in_view => Some(PointerEvent::Wheel { delta: 1, x, y }),
        MouseEventKind::ScrollDown if in_view => Some(PointerEvent::Wheel { delta: -1, x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_simulation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(SessionAction::ToggleRun)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(SessionAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(SessionAction::Randomize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(SessionAction::Clear)
        );
    }

    #[test]
    fn test_camera_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(SessionAction::Pan(PanDirection::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(SessionAction::Pan(PanDirection::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(SessionAction::ZoomIn)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(SessionAction::ZoomOut)
        );
    }

    #[test]
    fn test_pattern_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(SessionAction::CyclePattern)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(SessionAction::StampPattern)
        );
    }

    #[test]
    fn test_ctrl_c_is_not_clear() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
    }

    #[test]
    fn test_quit_and_save_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(should_save(KeyEvent::from(KeyCode::Char('w'))));
        assert!(!should_save(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), 10),
            Some(PointerEvent::Down { x: 3, y: 4 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6), 10),
            Some(PointerEvent::Drag { x: 5, y: 6 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 1, 1), 10),
            Some(PointerEvent::Wheel {
                delta: -1,
                x: 1,
                y: 1
            })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), 10),
            None
        );
    }

    #[test]
    fn test_mouse_in_hud_is_dropped_except_release() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 10), 10),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 3, 10), 10),
            Some(PointerEvent::Up)
        );
    }
}
