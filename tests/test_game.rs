use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect as UiRect;

use fleetfall::clock::Sleeper;
use fleetfall::entities::{Alien, Bullet, Direction, Rect};
use fleetfall::game::{Invasion, RESPAWN_PAUSE};

/// Records every nap instead of actually sleeping.
#[derive(Clone, Default)]
struct RecordingSleeper {
    naps: Rc<RefCell<Vec<Duration>>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.naps.borrow_mut().push(duration);
    }
}

fn fresh_game() -> (Invasion<RecordingSleeper>, Rc<RefCell<Vec<Duration>>>) {
    let sleeper = RecordingSleeper::default();
    let naps = sleeper.naps.clone();
    (Invasion::with_sleeper(220, 90, sleeper), naps)
}

fn active_game() -> (Invasion<RecordingSleeper>, Rc<RefCell<Vec<Duration>>>) {
    let (mut game, naps) = fresh_game();
    game.start_game();
    (game, naps)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::empty(), KeyEventKind::Release)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// An alien parked on the ship's nose at 220x90.
fn colliding_alien() -> Alien {
    Alien::new(104, 80)
}

// ── Starting and stopping ──

#[test]
fn boots_inactive_with_fleet_on_display() {
    let (game, _) = fresh_game();
    assert!(!game.stats.game_active);
    assert!(game.cursor_visible());
    assert_eq!(game.fleet.len(), 30);
    assert!(game.bullets.is_empty());
}

#[test]
fn inactive_game_ignores_combat_input() {
    let (mut game, _) = fresh_game();

    game.on_key(press(KeyCode::Right));
    game.on_key(press(KeyCode::Char(' ')));
    assert!(!game.ship.moving_right);
    assert!(game.bullets.is_empty());

    // Ticks outside a game move nothing
    let x_before = game.fleet[0].rect.x;
    game.on_tick();
    assert_eq!(game.fleet[0].rect.x, x_before);
    assert_eq!(game.tick, 0);
}

#[test]
fn quit_works_in_both_states() {
    let (mut game, _) = fresh_game();
    game.on_key(press(KeyCode::Char('q')));
    assert!(game.should_quit());

    let (mut game, _) = active_game();
    game.on_key(press(KeyCode::Char('Q')));
    assert!(game.should_quit());
}

#[test]
fn click_starts_only_inside_the_button() {
    let (mut game, _) = fresh_game();
    game.play_button = Some(UiRect::new(10, 5, 20, 5));

    game.on_mouse(click(9, 5));
    assert!(!game.stats.game_active);
    game.on_mouse(click(30, 7));
    assert!(!game.stats.game_active);

    game.on_mouse(click(10, 5));
    assert!(game.stats.game_active);
}

#[test]
fn click_without_button_on_screen_does_nothing() {
    let (mut game, _) = fresh_game();
    assert!(game.play_button.is_none());
    game.on_mouse(click(15, 7));
    assert!(!game.stats.game_active);
}

#[test]
fn clicks_during_play_are_ignored() {
    let (mut game, _) = active_game();
    game.stats.score = 200;
    game.play_button = Some(UiRect::new(10, 5, 20, 5));

    game.on_mouse(click(12, 7));
    assert!(game.stats.game_active);
    // No restart: the score survived
    assert_eq!(game.stats.score, 200);
}

#[test]
fn start_game_resets_the_round_but_not_the_record() {
    let (mut game, _) = fresh_game();
    game.settings.escalate();
    game.stats.score = 990;
    game.stats.level = 9;
    game.stats.ships_left = 1;
    game.scoreboard.check_high_score(&mut game.stats);
    game.bullets.push(Bullet {
        y: 50.0,
        rect: Rect::new(5, 50, 2, 6),
    });

    game.start_game();

    assert!(game.stats.game_active);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, 3);
    assert_eq!(game.stats.high_score, 990);
    assert_eq!(game.settings.ship_speed, 1.5);
    assert_eq!(game.settings.alien_points, 50);
    assert_eq!(game.scoreboard.score_text, "0");
    assert_eq!(game.scoreboard.level_text, "1");
    assert_eq!(game.scoreboard.ships_text, "▲ ▲ ▲ ");
    assert_eq!(game.scoreboard.high_score_text, "990");
    assert!(game.bullets.is_empty());
    assert_eq!(game.fleet.len(), 30);
    assert_eq!(game.ship.rect.x, 104);
    assert!(!game.cursor_visible());
}

// ── Firing ──

#[test]
fn firing_caps_at_the_allowance() {
    let (mut game, _) = active_game();
    for _ in 0..5 {
        game.on_key(press(KeyCode::Char(' ')));
    }
    assert_eq!(game.bullets.len(), 3);
}

#[test]
fn spent_bullets_free_the_allowance() {
    let (mut game, _) = active_game();
    for _ in 0..3 {
        game.on_key(press(KeyCode::Char(' ')));
    }
    // Push one past the top so the next tick prunes it
    game.bullets[0].y = -20.0;
    game.on_tick();
    assert_eq!(game.bullets.len(), 2);

    game.on_key(press(KeyCode::Char(' ')));
    assert_eq!(game.bullets.len(), 3);
}

// ── Movement keys ──

#[test]
fn arrows_hold_and_release() {
    let (mut game, _) = active_game();
    game.on_key(press(KeyCode::Right));
    assert!(game.ship.moving_right);
    game.on_key(release(KeyCode::Right));
    assert!(!game.ship.moving_right);

    game.on_key(press(KeyCode::Left));
    assert!(game.ship.moving_left);
    game.on_key(release(KeyCode::Left));
    assert!(!game.ship.moving_left);
}

#[test]
fn release_lands_even_after_game_over() {
    let (mut game, _) = active_game();
    game.on_key(press(KeyCode::Right));

    // Lose the final ship while the arrow is held
    game.stats.ships_left = 0;
    game.fleet = vec![colliding_alien()];
    game.on_tick();
    assert!(!game.stats.game_active);

    game.on_key(release(KeyCode::Right));
    assert!(!game.ship.moving_right);
}

// ── Collisions and scoring ──

#[test]
fn hit_removes_bullet_and_alien_and_scores() {
    let (mut game, _) = active_game();
    game.bullets.push(Bullet {
        y: 8.0,
        rect: Rect::new(12, 8, 2, 6),
    });

    game.on_tick();

    assert_eq!(game.fleet.len(), 29);
    assert!(game.bullets.is_empty());
    assert_eq!(game.stats.score, 50);
    assert_eq!(game.scoreboard.score_text, "50");
    assert_eq!(game.stats.high_score, 50);
    assert_eq!(game.scoreboard.high_score_text, "50");
}

#[test]
fn one_bullet_sweeps_every_alien_it_overlaps() {
    let (mut game, _) = active_game();
    game.fleet = vec![Alien::new(10, 7), Alien::new(15, 7), Alien::new(100, 7)];
    game.bullets.push(Bullet {
        y: 8.0,
        rect: Rect::new(14, 8, 2, 6),
    });

    game.on_tick();

    // Both overlapped aliens died and both scored
    assert_eq!(game.fleet.len(), 1);
    assert_eq!(game.fleet[0].rect.x, 100);
    assert_eq!(game.stats.score, 100);
    assert!(game.bullets.is_empty());
    assert_eq!(game.stats.level, 1);
}

#[test]
fn marked_alien_cannot_be_claimed_twice() {
    let (mut game, _) = active_game();
    game.fleet = vec![Alien::new(10, 7), Alien::new(100, 7)];
    game.bullets.push(Bullet {
        y: 8.0,
        rect: Rect::new(11, 8, 2, 6),
    });
    game.bullets.push(Bullet {
        y: 8.0,
        rect: Rect::new(14, 8, 2, 6),
    });

    game.on_tick();

    // First bullet claimed the alien; the second flew on unspent
    assert_eq!(game.stats.score, 50);
    assert_eq!(game.bullets.len(), 1);
    assert_eq!(game.bullets[0].rect.x, 14);
    assert_eq!(game.fleet.len(), 1);
}

#[test]
fn clearing_the_fleet_starts_the_next_wave() {
    let (mut game, _) = active_game();
    game.fleet = vec![Alien::new(50, 7)];
    game.bullets.push(Bullet {
        y: 8.0,
        rect: Rect::new(52, 8, 2, 6),
    });
    // A stray bullet mid-flight is swept with the old wave
    game.bullets.push(Bullet {
        y: 50.0,
        rect: Rect::new(5, 50, 2, 6),
    });

    game.on_tick();

    assert_eq!(game.stats.score, 50);
    assert_eq!(game.stats.level, 2);
    assert_eq!(game.scoreboard.level_text, "2");
    assert_eq!(game.fleet.len(), 30);
    assert!(game.bullets.is_empty());
    assert_eq!(game.settings.alien_speed, 0.625);
    assert_eq!(game.settings.alien_points, 75);
}

// ── Losing ships ──

#[test]
fn collision_with_the_fleet_spends_a_ship() {
    let (mut game, naps) = active_game();
    game.ship.set_moving(Direction::Right, true);
    game.fleet = vec![colliding_alien()];

    game.on_tick();

    assert_eq!(game.stats.ships_left, 2);
    assert_eq!(game.scoreboard.ships_text, "▲ ▲ ");
    assert_eq!(game.fleet.len(), 30);
    assert!(game.bullets.is_empty());
    assert_eq!(game.ship.rect.x, 104);
    assert!(game.stats.game_active);

    // The half-second freeze ran and was flagged exactly once
    assert_eq!(*naps.borrow(), vec![RESPAWN_PAUSE]);
    assert_eq!(RESPAWN_PAUSE, Duration::from_millis(500));
    assert!(game.take_respawn_pause());
    assert!(!game.take_respawn_pause());
}

#[test]
fn alien_reaching_the_bottom_costs_a_ship() {
    let (mut game, naps) = active_game();
    game.fleet = vec![Alien::new(10, 85)];

    game.on_tick();

    assert_eq!(game.stats.ships_left, 2);
    assert_eq!(game.fleet.len(), 30);
    assert_eq!(naps.borrow().len(), 1);
}

#[test]
fn hit_with_no_reserve_ends_the_game() {
    let (mut game, naps) = active_game();
    game.stats.ships_left = 0;
    game.fleet = vec![colliding_alien()];

    game.on_tick();

    assert!(!game.stats.game_active);
    assert!(game.cursor_visible());
    // No reset on the way out: the board is left as it fell
    assert_eq!(game.fleet.len(), 1);
    assert!(naps.borrow().is_empty());
    assert!(!game.take_respawn_pause());
}

#[test]
fn the_fourth_hit_ends_the_game() {
    let (mut game, naps) = active_game();

    for expected_left in [2u32, 1, 0] {
        game.fleet = vec![colliding_alien()];
        game.on_tick();
        assert_eq!(game.stats.ships_left, expected_left);
        assert!(game.stats.game_active);
        game.take_respawn_pause();
    }

    game.fleet = vec![colliding_alien()];
    game.on_tick();
    assert!(!game.stats.game_active);
    assert_eq!(game.stats.ships_left, 0);
    assert_eq!(naps.borrow().len(), 3);
}
