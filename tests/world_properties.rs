use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wrap_snake::game::{Board, Direction, GameStatus, StepEvent, World, WorldConfig};

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Play a random game, checking the movement laws after every step
fn random_walk(config: &WorldConfig, seed: u64, ticks: usize) -> World {
    let mut world = World::with_rng(config, seeded(seed)).unwrap();
    let mut input = seeded(seed ^ 0x5eed);
    let capacity = config.width * config.width;
    world.start();

    for _ in 0..ticks {
        let turn = Direction::ALL[input.gen_range(0..4)];
        world.change_direction(turn);

        let before = world.snake().to_vec();
        let reward_before = world.reward_cell();
        let status_before = world.status();

        let event = world.step();
        let after = world.snake();

        assert!(after.iter().all(|&cell| cell < capacity));
        let mut sorted = after.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), after.len(), "snake overlaps itself");
        assert_eq!(world.score(), after.len() - 1);

        match event {
            StepEvent::Moved => {
                assert_eq!(after.len(), before.len());
                assert_eq!(&after[1..], &before[..before.len() - 1]);
                assert_eq!(world.reward_cell(), reward_before);
            }
            StepEvent::Ate | StepEvent::Won => {
                assert_eq!(Some(after[0]), reward_before);
                assert_eq!(after.len(), before.len() + 1);
                assert_eq!(&after[1..], &before[..]);
            }
            StepEvent::Collided => {
                assert_eq!(status_before, GameStatus::Played);
                assert_eq!(world.status(), GameStatus::Lost);
                assert_eq!(after, &before[..]);
                assert_eq!(world.reward_cell(), reward_before);
            }
            StepEvent::Inert => {
                assert!(status_before.is_terminal());
                assert_eq!(after, &before[..]);
                assert_eq!(world.reward_cell(), reward_before);
            }
        }

        match world.status() {
            GameStatus::Played => {
                let reward = world.reward_cell().unwrap();
                assert!(reward < capacity);
                assert!(!after.contains(&reward));
            }
            GameStatus::Won => {
                assert!(after.len() >= world.win_length());
                assert_eq!(world.reward_cell(), None);
            }
            GameStatus::Lost => {}
            GameStatus::Unstarted => unreachable!("started worlds never return to Unstarted"),
        }
    }

    world
}

#[test]
fn random_walks_keep_cells_on_board() {
    for width in 2..=8 {
        for seed in 0..20 {
            let config = WorldConfig::new(width).with_spawn_index(seed as usize % (width * width));
            random_walk(&config, seed, 200);
        }
    }
}

#[test]
fn random_walks_with_low_win_length() {
    let mut wins = 0;
    for seed in 0..50 {
        let config = WorldConfig::new(4).with_win_length(3);
        if random_walk(&config, seed, 200).status() == GameStatus::Won {
            wins += 1;
        }
    }
    assert!(wins > 0, "no random walk reached a length of 3");
}

#[test]
fn wraparound_on_every_edge() {
    for width in 2..=6 {
        let board = Board::new(width);
        let last = width - 1;

        for i in 0..width {
            let cases = [
                (board.index(i, last), Direction::Right, board.index(i, 0)),
                (board.index(i, 0), Direction::Left, board.index(i, last)),
                (board.index(0, i), Direction::Up, board.index(last, i)),
                (board.index(last, i), Direction::Down, board.index(0, i)),
            ];

            for (start, heading, expected) in cases {
                let reward = (0..width * width)
                    .find(|&cell| cell != start && cell != expected)
                    .unwrap();
                let mut world = World::from_parts(
                    &WorldConfig::new(width),
                    vec![start],
                    heading,
                    Some(reward),
                    seeded(1),
                )
                .unwrap();
                world.start();

                assert_eq!(world.step(), StepEvent::Moved);
                assert_eq!(world.snake(), &[expected]);
            }
        }
    }
}

#[test]
fn eating_on_four_wide_board() {
    let mut world = World::from_parts(
        &WorldConfig::new(4),
        vec![5],
        Direction::Right,
        Some(6),
        seeded(2),
    )
    .unwrap();
    world.start();

    world.step();

    assert_eq!(world.snake(), &[6, 5]);
    assert_eq!(world.snake_len(), 2);
    let reward = world.reward_cell().unwrap();
    assert!(reward != 6 && reward != 5);
}

#[test]
fn moving_on_four_wide_board() {
    let mut world = World::from_parts(
        &WorldConfig::new(4),
        vec![5, 4],
        Direction::Right,
        Some(15),
        seeded(3),
    )
    .unwrap();
    world.start();

    world.step();

    assert_eq!(world.snake(), &[6, 5]);
    assert_eq!(world.snake_len(), 2);
}

#[test]
fn reverse_request_keeps_heading() {
    let mut world = World::from_parts(
        &WorldConfig::new(4),
        vec![4, 5, 6],
        Direction::Left,
        Some(0),
        seeded(4),
    )
    .unwrap();
    world.start();

    world.change_direction(Direction::Right);
    assert_eq!(world.heading(), Direction::Left);

    world.step();
    assert_ne!(world.head(), 5);
    assert_eq!(world.snake(), &[7, 4, 5]);
}

#[test]
fn lost_game_is_frozen() {
    let mut world = World::from_parts(
        &WorldConfig::new(4),
        vec![5, 6, 10, 9],
        Direction::Down,
        Some(0),
        seeded(5),
    )
    .unwrap();
    world.start();

    assert_eq!(world.step(), StepEvent::Collided);
    for _ in 0..5 {
        world.change_direction(Direction::Left);
        world.start();
        assert_eq!(world.step(), StepEvent::Inert);
    }

    assert_eq!(world.status(), GameStatus::Lost);
    assert_eq!(world.snake(), &[5, 6, 10, 9]);
    assert_eq!(world.reward_cell(), Some(0));
    assert_eq!(world.steps(), 0);
}

#[test]
fn filling_the_board_wins() {
    // Snake coiled over all but one cell of a 3x3 board, reward in the last gap
    let body = vec![3, 0, 1, 2, 5, 4, 7, 8];
    let mut world = World::from_parts(
        &WorldConfig::new(3),
        body,
        Direction::Down,
        Some(6),
        seeded(6),
    )
    .unwrap();
    world.start();

    assert_eq!(world.step(), StepEvent::Won);
    assert_eq!(world.status(), GameStatus::Won);
    assert_eq!(world.snake(), &[6, 3, 0, 1, 2, 5, 4, 7, 8]);
    assert_eq!(world.reward_cell(), None);
    assert_eq!(world.step(), StepEvent::Inert);
}
