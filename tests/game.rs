mod common;

use common::init_logging;
use unohand::{Action, Game, GameConfig, GameStatus, Hand, HandError};

const MAX_ACTIONS_PER_HAND: usize = 5_000;

/// Plays the first legal card, or draws when nothing fits.
fn play_out(hand: &mut Hand) -> Result<usize, HandError> {
    let mut taken = 0;
    while !hand.has_ended() && taken < MAX_ACTIONS_PER_HAND {
        let action = hand
            .legal_actions()
            .into_iter()
            .next()
            .unwrap_or(Action::Draw);
        hand.apply_action(action)?;
        taken += 1;
    }
    Ok(taken)
}

#[test]
fn config_validates_players_and_target() {
    init_logging();
    assert_eq!(
        GameConfig::new(["solo"]).err(),
        Some(HandError::InvalidPlayerCount(1))
    );
    let config = GameConfig::new(["a", "b"])
        .expect("config")
        .with_target_score(0);
    assert!(matches!(
        Game::new(config),
        Err(HandError::InvalidConfiguration(_))
    ));
}

#[test]
fn game_runs_until_someone_reaches_the_target() -> Result<(), HandError> {
    init_logging();
    let config = GameConfig::new(["ann", "bo", "cy"])?
        .with_seed(7)
        .with_target_score(150);
    let mut game = Game::with_dealer_picker(config, &mut |_count: usize| 1)?;
    assert_eq!(game.dealer(), 1);
    assert_eq!(game.hand().dealer(), 1);

    while !game.is_finished() {
        let dealer = game.dealer();
        play_out(game.hand_mut())?;
        assert!(game.hand().has_ended(), "hand did not finish");
        let status = game.finish_hand()?;
        if status == GameStatus::Ongoing {
            assert_eq!(game.dealer(), (dealer + 1) % 3);
            assert!(!game.hand().has_ended());
        }
        assert!(game.hands_played() < 200);
    }

    let winner = game.winner().expect("finished game has a winner");
    assert!(game.scores()[winner] >= 150);
    let credited: u32 = game.history().iter().map(|end| end.score).sum();
    assert_eq!(game.scores().iter().sum::<u32>(), credited);
    for (player, score) in game.scores().iter().enumerate() {
        if player != winner {
            assert!(*score < 150);
        }
    }
    assert_eq!(game.finish_hand(), Err(HandError::GameOver));
    Ok(())
}

#[test]
fn same_seed_replays_the_same_game() -> Result<(), HandError> {
    init_logging();
    let run = || -> Result<Vec<u32>, HandError> {
        let config = GameConfig::new(["a", "b"])?.with_seed(99).with_target_score(60);
        let mut game = Game::new(config)?;
        while !game.is_finished() {
            play_out(game.hand_mut())?;
            game.finish_hand()?;
        }
        Ok(game.scores().to_vec())
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn hand_view_serializes_for_consumers() -> Result<(), HandError> {
    init_logging();
    let game = Game::new(GameConfig::new(["a", "b", "c", "d"])?)?;
    let view = game.hand().state_view(0)?;
    let json = serde_json::to_value(&view).expect("serializable view");
    assert_eq!(json["players"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["hand"].as_array().map(Vec::len), Some(7));
    assert_eq!(game.hand().state_view(4).err(), Some(HandError::InvalidPlayer(4)));
    Ok(())
}
