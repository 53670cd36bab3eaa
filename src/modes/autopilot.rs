use crate::game::{Direction, World};

/// Greedy heading choice for unattended play.
///
/// Considers every turn the world would accept, drops the ones that run
/// into the body, and picks the one that brings the head closest to the
/// reward. Ties keep the current heading. Returns `None` when every move
/// is fatal.
pub fn choose_direction<R>(world: &World<R>) -> Option<Direction> {
    let board = world.board();
    let head = world.head();
    let heading = world.heading();

    Direction::ALL
        .into_iter()
        .filter(|d| world.snake_len() == 1 || !d.is_opposite(heading))
        .filter(|&d| !world.snake().contains(&board.neighbor(head, d)))
        .min_by_key(|&d| {
            let next = board.neighbor(head, d);
            let distance = world
                .reward_cell()
                .map(|reward| {
                    let (rows, cols) = board.toroidal_distance(next, reward);
                    rows + cols
                })
                .unwrap_or(0);
            (distance, d != heading)
        })
}
