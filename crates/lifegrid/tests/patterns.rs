//! Reference patterns driven end to end through the service.

use lifegrid::prelude::*;
use lifegrid_test_utils::{random_soup, translate, Pattern};

fn service() -> BoardService<InMemoryBoardStore> {
    BoardService::new(InMemoryBoardStore::new(), ServiceConfig::default()).unwrap()
}

fn create(svc: &BoardService<InMemoryBoardStore>, pattern: Pattern) -> BoardId {
    svc.create_from_cells(0, pattern.cells().iter().map(Cell::coordinate))
        .unwrap()
}

fn stored_cells(svc: &BoardService<InMemoryBoardStore>, id: &BoardId) -> Vec<Coordinate> {
    svc.store().record(id).unwrap().cells
}

fn coords(pattern: Pattern) -> Vec<Coordinate> {
    pattern.cells().iter().map(Cell::coordinate).collect()
}

#[test]
fn still_lifes_fast_forward() {
    let svc = service();
    for p in Pattern::STILL_LIFES {
        let id = create(&svc, p);
        let view = svc
            .advance(&id, AdvanceRequest::new(1_000).expect_final_state())
            .unwrap();
        assert_eq!(view.generation, 1_000, "{p:?}");
        assert!(!view.mutated, "{p:?}");
        assert_eq!(stored_cells(&svc, &id), coords(p), "{p:?}");
    }
}

#[test]
fn oscillators_return_after_even_steps() {
    let svc = service();
    for p in Pattern::OSCILLATORS {
        let id = create(&svc, p);
        let view = svc.advance(&id, AdvanceRequest::new(10)).unwrap();
        assert_eq!(view.generation, 10, "{p:?}");
        assert!(view.mutated, "{p:?}");
        assert_eq!(stored_cells(&svc, &id), coords(p), "{p:?}");

        let err = svc
            .advance(&id, AdvanceRequest::new(10).expect_final_state())
            .unwrap_err();
        assert!(err.is_precondition_failed(), "{p:?}");
        assert_eq!(svc.get(&id).unwrap().generation, 10, "{p:?}");
    }
}

#[test]
fn glider_travels_diagonally() {
    let svc = service();
    let id = create(&svc, Pattern::Glider);
    let view = svc.advance(&id, AdvanceRequest::new(8)).unwrap();
    assert_eq!(view.population, 5);

    let expected: Vec<Coordinate> = translate(&Pattern::Glider.cells(), -2, -2)
        .iter()
        .map(Cell::coordinate)
        .collect();
    assert_eq!(stored_cells(&svc, &id), expected);
}

#[test]
fn dying_board_settles_empty() {
    let svc = service();
    let id = svc.create(&BoardState::new(5, ["1.", ".."])).unwrap();
    let view = svc
        .advance(&id, AdvanceRequest::new(20).expect_final_state())
        .unwrap();
    assert_eq!(view.generation, 25);
    assert_eq!(view.population, 0);
    assert!(view.cells.is_empty());
}

#[test]
fn service_matches_kernel() {
    let svc = service();
    let soup = random_soup(42, 24, 24, 0.35);
    let id = svc
        .create_from_cells(0, soup.iter().map(Cell::coordinate))
        .unwrap();
    let dry = svc.advance(&id, AdvanceRequest::new(30).dry_run()).unwrap();

    let board = Board::new(BoardId::NONE, 0, soup).unwrap();
    let ran = board.run_generations(30, false).unwrap();
    let expected = BoardView::of(ran.board(), &MatrixFormat::default());

    assert_eq!(dry.generation, expected.generation);
    assert_eq!(dry.cells, expected.cells);
    assert_eq!(dry.population, expected.population);
    assert_eq!(svc.get(&id).unwrap().generation, 0);
}
