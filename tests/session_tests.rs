use tui_life::core::{patterns, CameraConfig, Grid, Session, SessionConfig};
use tui_life::types::{CellState, GridPos, PointerEvent, SessionAction};

fn live_set(grid: &Grid) -> Vec<GridPos> {
    grid.live_cells().collect()
}

#[test]
fn test_glider_moves_one_diagonal_every_four_generations() {
    let mut grid = Grid::new(10, 10);
    grid.stamp(&patterns::GLIDER, GridPos::new(1, 1));
    let start = live_set(&grid);

    for _ in 0..4 {
        grid.advance();
    }

    let shifted: Vec<_> = start
        .iter()
        .map(|p| GridPos::new(p.row + 1, p.col + 1))
        .collect();
    assert_eq!(live_set(&grid), shifted);
    assert_eq!(grid.generation(), 4);
}

#[test]
fn test_glider_through_session_steps() {
    let mut grid = Grid::new(10, 10);
    grid.stamp(&patterns::GLIDER, GridPos::new(0, 0));
    let mut session = Session::with_grid(grid, SessionConfig::default());

    for _ in 0..4 {
        session.apply_action(SessionAction::Step);
        assert!(session.tick());
    }

    let status = session.status();
    assert_eq!(status.generation, 4);
    assert_eq!(status.population, 5);
    for &(r, c) in patterns::GLIDER.cells {
        assert!(session.grid().is_alive(r + 1, c + 1));
    }
}

fn drawing_session() -> Session {
    Session::new(SessionConfig {
        rows: 20,
        cols: 20,
        view_width: 100,
        view_height: 100,
        camera: CameraConfig {
            cell_size: 10,
            ..CameraConfig::default()
        },
        ..SessionConfig::default()
    })
}

#[test]
fn test_drag_draws_continuous_line() {
    let mut session = drawing_session();
    session.handle_pointer(PointerEvent::Down { x: 5, y: 5 });
    // Jump across several cells in one sample.
    session.handle_pointer(PointerEvent::Drag { x: 75, y: 5 });
    session.handle_pointer(PointerEvent::Up);

    for col in 0..=7 {
        assert!(session.grid().is_alive(0, col), "col {}", col);
    }
    assert_eq!(session.grid().population(), 8);
    assert!(!session.brush().is_drawing());
}

#[test]
fn test_drag_starting_on_live_cell_erases() {
    let mut session = drawing_session();
    for col in 0..5 {
        session.grid_mut().toggle(2, col, Some(CellState::Alive));
    }
    session.handle_pointer(PointerEvent::Down { x: 5, y: 25 });
    session.handle_pointer(PointerEvent::Drag { x: 45, y: 25 });
    session.handle_pointer(PointerEvent::Up);
    assert_eq!(session.grid().population(), 0);
}

#[test]
fn test_drag_leaving_the_grid_keeps_stroke() {
    let mut session = drawing_session();
    session.handle_pointer(PointerEvent::Down { x: 35, y: 15 });
    session.handle_pointer(PointerEvent::Drag { x: -40, y: 15 });
    session.handle_pointer(PointerEvent::Drag { x: 35, y: -3 });
    session.handle_pointer(PointerEvent::Drag { x: 5, y: 15 });
    session.handle_pointer(PointerEvent::Up);

    // Painted from (row 1, col 3) back to col 0; nothing from the outside samples.
    for col in 0..=3 {
        assert!(session.grid().is_alive(1, col), "col {}", col);
    }
    assert_eq!(session.grid().population(), 4);
}

#[test]
fn test_resize_view_keeps_camera_valid() {
    let mut session = drawing_session();
    session.camera_mut().pan(i32::MAX, i32::MAX);
    assert_eq!(session.camera().pan_offset(), (100, 100));

    session.resize_view(150, 120);
    assert_eq!(session.camera().pan_offset(), (50, 80));

    session.resize_view(400, 300);
    assert_eq!(session.status().cell_size, 20);
    assert_eq!(session.status().pan, (0, 80));
}

#[test]
fn test_wheel_zoom_keeps_cell_under_pointer() {
    let mut session = drawing_session();
    let before = session.camera().screen_to_world(30, 70);
    session.handle_pointer(PointerEvent::Wheel { delta: 1, x: 30, y: 70 });
    assert_eq!(session.camera().cell_size(), 12);
    assert_eq!(session.camera().screen_to_world(30, 70), before);
}

#[test]
fn test_randomize_then_clear() {
    let mut session = Session::new(SessionConfig {
        density: 0.5,
        seed: 12,
        ..SessionConfig::default()
    });
    session.apply_action(SessionAction::Randomize);
    assert!(session.grid().population() > 0);
    session.apply_action(SessionAction::Clear);
    assert_eq!(session.status().population, 0);
    assert_eq!(session.status().generation, 0);
}
