//! Board, geometry, and snake model tests through the public API

use std::collections::HashSet;

use tui_snake::core::{direction_between, step, Board, CoreError, Snake};
use tui_snake::types::{Coord, Direction};

#[test]
fn test_cell_ids_are_row_major_from_one() {
    let board = Board::new(20).unwrap();
    assert_eq!(board.cell_at(Coord::new(0, 0)), Ok(1));
    assert_eq!(board.cell_at(Coord::new(0, 19)), Ok(20));
    assert_eq!(board.cell_at(Coord::new(1, 0)), Ok(21));
    assert_eq!(board.cell_at(Coord::new(19, 19)), Ok(400));
    assert_eq!(board.max_cell(), 400);
}

#[test]
fn test_every_cell_maps_back() {
    let board = Board::new(13).unwrap();
    let mut seen = HashSet::new();
    for row in 0..13 {
        for col in 0..13 {
            let coord = Coord::new(row, col);
            let cell = board.cell_at(coord).unwrap();
            assert!(seen.insert(cell));
            assert_eq!(board.coord_of(cell), Some(coord));
        }
    }
    assert_eq!(seen.len(), 169);
    assert_eq!(board.coord_of(0), None);
    assert_eq!(board.coord_of(170), None);
}

#[test]
fn test_off_board_lookup_is_an_error() {
    let board = Board::new(20).unwrap();
    for coord in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(20, 0),
        Coord::new(0, 20),
    ] {
        assert!(matches!(
            board.cell_at(coord),
            Err(CoreError::OutOfBounds { size: 20, .. })
        ));
    }
}

#[test]
fn test_start_coord_is_a_third_in() {
    assert_eq!(Board::new(20).unwrap().start_coord(), Coord::new(7, 7));
    assert_eq!(Board::new(10).unwrap().start_coord(), Coord::new(3, 3));
    assert_eq!(Board::new(4).unwrap().start_coord(), Coord::new(1, 1));
}

#[test]
fn test_step_and_direction_between_agree() {
    let origin = Coord::new(5, 5);
    for d in Direction::ALL {
        let next = step(origin, d);
        assert_eq!(direction_between(origin, next), Some(d));
        assert_eq!(step(next, d.opposite()), origin);
    }
    assert_eq!(direction_between(origin, Coord::new(6, 6)), None);
}

#[test]
fn test_snake_walk_keeps_occupancy_in_sync() {
    let board = Board::new(10).unwrap();
    let start = Coord::new(4, 4);
    let mut snake = Snake::new(start, board.cell_at(start).unwrap());
    let mut heading = Direction::Right;

    let path = [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Up,
    ];
    for (i, &d) in path.iter().enumerate() {
        let next = step(snake.head().coord, d);
        snake.advance(next, board.cell_at(next).unwrap());
        heading = d;
        if i % 2 == 0 {
            snake.grow(&board, heading);
        }
        assert!(snake.is_consistent());
        assert_eq!(snake.occupied().len(), snake.len());
    }
    assert_eq!(heading, Direction::Up);
    assert_eq!(snake.len(), 5);
    assert_eq!(snake.head().coord, Coord::new(5, 4));
    assert_eq!(snake.tail().coord, Coord::new(6, 7));
}
