//! Rendering tests: full snapshots drawn into a framebuffer

use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::leaderboard::{LeaderboardEntry, LeaderboardUpdate, Standings};
use tui_snake::term::{tier_color, FrameBuffer, GameView, HudView, Viewport};
use tui_snake::types::{Phase, RewardTier};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn running_snapshot() -> GameSnapshot {
    let mut state = GameState::new(GameConfig::with_seed(3)).unwrap();
    state.start("ada").unwrap();
    state.step();
    state.snapshot()
}

fn entry(name: &str, score: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        id: None,
        player_name: name.to_string(),
        score,
    }
}

#[test]
fn start_menu_shows_prompt_and_notice() {
    let state = GameState::new(GameConfig::default()).unwrap();
    let mut standings = Standings::new();
    standings.begin_fetch();
    let hud = HudView {
        name_input: "bob",
        notice: Some("Please enter your name (max 10 chars)"),
        leaderboard: Some(&standings),
    };
    let fb = GameView::default().render(&state.snapshot(), &hud, Viewport::new(100, 30));
    let text = screen_text(&fb);

    assert!(text.contains("Enter your name"));
    assert!(text.contains("> bob_"));
    assert!(text.contains("Please enter your name (max 10 chars)"));
    assert!(text.contains("loading..."));
}

#[test]
fn side_panel_shows_score_and_player() {
    let snap = running_snapshot();
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(100, 30));
    let text = screen_text(&fb);

    assert!(text.contains("SCORE  0"));
    assert!(text.contains("PLAYER ada"));
    assert!(text.contains("common"));
    assert!(text.contains("offline"));
}

#[test]
fn game_over_menu_shows_result() {
    let mut snap = running_snapshot();
    snap.phase = Phase::GameOver;
    snap.score = 37;
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(100, 30));
    let text = screen_text(&fb);

    assert!(text.contains("Your Result: 37"));
    assert!(text.contains("R: try again"));
}

#[test]
fn leaderboard_rows_keep_server_order_with_alternating_shade() {
    let mut standings = Standings::new();
    standings.apply(LeaderboardUpdate::Entries(vec![
        entry("zed", 3),
        entry("amy", 50),
        entry("kim", 12),
    ]));
    let hud = HudView {
        leaderboard: Some(&standings),
        ..HudView::default()
    };
    let fb = GameView::default().render(&running_snapshot(), &hud, Viewport::new(100, 30));

    let rows: Vec<(u16, String)> = (0..fb.height())
        .map(|y| (y, fb.row_text(y)))
        .filter(|(_, t)| t.contains("zed") || t.contains("amy") || t.contains("kim"))
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].1.contains("1   zed"));
    assert!(rows[1].1.contains("2   amy"));
    assert!(rows[2].1.contains("3   kim"));

    // Second row is shaded, first and third are not.
    let name_x = rows[1].1.chars().position(|c| c == 'a').unwrap() as u16;
    let shaded = fb.get(name_x, rows[1].0).unwrap().style.bg;
    let plain = fb.get(name_x, rows[0].0).unwrap().style.bg;
    assert_ne!(shaded, plain);
    assert_eq!(fb.get(name_x, rows[2].0).unwrap().style.bg, plain);
}

#[test]
fn failed_refresh_keeps_previous_rows_on_screen() {
    let mut standings = Standings::new();
    standings.apply(LeaderboardUpdate::Entries(vec![entry("amy", 50), entry("kim", 12)]));
    let view = GameView::default();
    let vp = Viewport::new(100, 30);

    // Game over: submit and refresh in flight.
    standings.begin_fetch();
    let hud = HudView {
        leaderboard: Some(&standings),
        ..HudView::default()
    };
    let text = screen_text(&view.render(&running_snapshot(), &hud, vp));
    assert!(text.contains("loading..."));
    assert!(text.contains("1   amy"));

    standings.apply(LeaderboardUpdate::Unavailable("timed out".to_string()));
    let hud = HudView {
        leaderboard: Some(&standings),
        ..HudView::default()
    };
    let text = screen_text(&view.render(&running_snapshot(), &hud, vp));
    assert!(text.contains("unavailable"));
    assert!(text.contains("1   amy"));
    assert!(text.contains("2   kim"));
}

#[test]
fn food_colour_follows_tier() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    for tier in [RewardTier::Common, RewardTier::Uncommon, RewardTier::Rare] {
        let mut snap = running_snapshot();
        snap.food_tier = tier;
        let food = snap.food.unwrap();
        let fb = view.render(&snap, &HudView::default(), vp);
        let area = view.layout(&snap, vp);
        let cell = fb
            .get(area.x + 1 + food.col as u16 * 2, area.y + 1 + food.row as u16)
            .unwrap();
        assert_eq!(cell.style.fg, tier_color(tier));
    }
}

#[test]
fn render_into_reuses_buffer_across_sizes() {
    let view = GameView::default();
    let snap = running_snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    for (w, h) in [(100, 30), (60, 20), (120, 40)] {
        view.render_into(&snap, &HudView::default(), Viewport::new(w, h), &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
        assert_eq!(fb.cells().len(), w as usize * h as usize);
    }
}
