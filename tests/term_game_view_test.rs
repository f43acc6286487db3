use tui_blockfall::core::SequenceSource;
use tui_blockfall::engine::{GameConfig, GameEngine};
use tui_blockfall::term::{GameView, Rgb, Viewport};
use tui_blockfall::types::{Color, ShapeKind};

fn engine() -> GameEngine<SequenceSource> {
    GameEngine::new(GameConfig::default(), SequenceSource::repeat(ShapeKind::O))
}

fn screen_text(fb: &tui_blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = engine().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut game = engine();
    game.board_mut().set(19, 0, Some(Color::CYAN));
    let mut snap = game.snapshot();
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Row 19 is drawn at y=20 (inside the border); column 0 spans x=1..=2.
    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, Rgb::from(Color::CYAN));
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = engine().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O spawns at columns 4-5, rows 0-1 => x=9..=12, y=1..=2.
    for x in 9..=12 {
        for y in 1..=2 {
            assert_eq!(fb.get(x, y).unwrap().ch, '█', "({}, {})", x, y);
        }
    }
    assert_eq!(fb.get(8, 1).unwrap().ch, '·');
}

#[test]
fn term_view_panel_shows_score_and_lines() {
    let mut snap = engine().snapshot();
    snap.score = 1600;
    snap.lines = 8;

    let fb = GameView::default().render(&snap, Viewport::new(50, 22));
    let text = screen_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1600"));
    assert!(text.contains("LINES"));
    assert!(text.contains("500ms"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut game = engine();
    for col in 3..=6 {
        game.board_mut().set(2, col, Some(Color::RED));
    }
    game.tick();
    assert!(game.game_over());

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("r: restart"));
}

#[test]
fn term_view_follows_board_dimensions() {
    let config = GameConfig {
        width: 6,
        height: 8,
        ..GameConfig::default()
    };
    let game = GameEngine::new(config, SequenceSource::repeat(ShapeKind::O));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(14, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}
