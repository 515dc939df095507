use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use cardroom_engine::config::TableConfig;
use cardroom_engine::game::{GameState, Phase};
use cardroom_engine::player::PlayerAction;

fn random_action(rng: &mut ChaCha20Rng) -> PlayerAction {
    match rng.random_range(0..10) {
        0 => PlayerAction::Fold,
        1 | 2 => PlayerAction::Check,
        3..=5 => PlayerAction::Call,
        6 | 7 => PlayerAction::Bet(rng.random_range(0..80)),
        _ => PlayerAction::Raise(rng.random_range(0..60)),
    }
}

fn assert_invariants(g: &GameState) {
    assert!(g.is_participating(g.whose_turn()));
    for seat in g.participants().iter() {
        let p = &g.players()[seat];
        assert!(p.is_alive());
        assert!(g.highest_bet_in_round() >= p.amount_bet_in_round());
    }
}

#[test]
fn random_play_conserves_money_and_keeps_turn_order() {
    for seed in 0..64u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let num_players = 2 + (seed as usize % 6);
        let mut g = GameState::from_config(&TableConfig {
            num_players,
            starting_money: 300,
            big_blind: 10,
            seed: Some(seed),
        })
        .unwrap();
        let total = g.total_money();

        for _hand in 0..3 {
            if g.new_round().is_err() {
                break;
            }
            assert_eq!(g.total_money(), total);
            assert_invariants(&g);

            for _ in 0..200 {
                if rng.random_bool(0.08) {
                    match g.advance_phase() {
                        Ok(Phase::Showdown) | Err(_) => break,
                        Ok(_) => {}
                    }
                }
                // most actions come from the seat to act, a few from anyone
                let seat = if rng.random_bool(0.9) {
                    g.whose_turn()
                } else {
                    rng.random_range(0..num_players)
                };
                let pot_before = g.pot();
                let turn_before = g.whose_turn();
                let result = g.apply(seat, random_action(&mut rng));

                assert_eq!(g.total_money(), total, "seed {seed}");
                assert!(g.pot() >= pot_before);
                assert_invariants(&g);
                match result {
                    Ok(()) => {
                        if !g.is_uncontested() {
                            assert_ne!(g.whose_turn(), seat, "seed {seed}");
                        }
                    }
                    Err(_) => {
                        assert_eq!(g.pot(), pot_before);
                        assert_eq!(g.whose_turn(), turn_before);
                    }
                }
            }

            if g.is_uncontested() {
                let winner = g.whose_turn();
                g.award_pot(winner).unwrap();
                assert_eq!(g.total_money(), total);
            }
        }
    }
}
