use crate::entities::Alien;
use crate::settings::Settings;
use crate::sprites::{ALIEN_HEIGHT, ALIEN_WIDTH, SHIP_HEIGHT};

/// Lay out a fresh fleet for the configured screen.
///
/// One alien-width margin on each flank, one alien-width of spacing between
/// columns; rows fill from the top with one alien-height of spacing, leaving
/// five ship-heights of approach room above the ship. A screen too small for
/// a single column or row yields an empty fleet.
pub fn build_fleet(settings: &Settings) -> Vec<Alien> {
    let available_x = settings.screen_width - 2 * ALIEN_WIDTH;
    let columns = (available_x / (2 * ALIEN_WIDTH)).max(0);
    let available_y = settings.screen_height - 5 * SHIP_HEIGHT - SHIP_HEIGHT;
    let rows = (available_y / (2 * ALIEN_HEIGHT)).max(0);

    let mut fleet = Vec::with_capacity((rows * columns) as usize);
    for row in 0..rows {
        for column in 0..columns {
            fleet.push(Alien::new(
                ALIEN_WIDTH + 2 * ALIEN_WIDTH * column,
                ALIEN_HEIGHT + 2 * ALIEN_HEIGHT * row,
            ));
        }
    }
    fleet
}

/// Advance the whole fleet one frame. The edge check runs first, against
/// where the fleet stands now, so a flank on the boundary drops and turns
/// before it moves again.
pub fn update_fleet(fleet: &mut [Alien], settings: &mut Settings) {
    if fleet
        .iter()
        .any(|alien| alien.touches_edge(settings.screen_width))
    {
        change_direction(fleet, settings);
    }
    for alien in fleet.iter_mut() {
        alien.advance(settings);
    }
}

/// Drop every alien one step and reverse the march. Exactly one reversal
/// per edge contact, however many aliens share the flank.
pub fn change_direction(fleet: &mut [Alien], settings: &mut Settings) {
    for alien in fleet.iter_mut() {
        alien.rect.y += settings.fleet_drop_speed;
    }
    settings.fleet_direction = -settings.fleet_direction;
}
