use cardroom_engine::config::TableConfig;
use cardroom_engine::game::{GameState, Phase};
use cardroom_engine::history::{ActionRecord, HandHistory};
use cardroom_engine::player::PlayerAction;

fn played() -> GameState {
    let mut g = GameState::from_config(&TableConfig {
        num_players: 3,
        starting_money: 200,
        big_blind: 20,
        seed: Some(2024),
    })
    .unwrap();
    g.new_round().unwrap();
    g.bet(2, 40).unwrap();
    g.call(0).unwrap();
    g.fold(1).unwrap();
    g.advance_phase().unwrap();
    g.check(0).unwrap();
    g
}

#[test]
fn records_committed_actions_in_order() {
    let g = played();
    let h = g.history();
    assert_eq!(h.hand_number, 1);
    assert_eq!(h.pot, 30 + 80);
    assert_eq!(h.board.len(), 3);
    assert_eq!(
        h.actions,
        vec![
            ActionRecord {
                seat: 2,
                phase: Phase::PreFlop,
                action: PlayerAction::Bet(40)
            },
            ActionRecord {
                seat: 0,
                phase: Phase::PreFlop,
                action: PlayerAction::Call
            },
            ActionRecord {
                seat: 1,
                phase: Phase::PreFlop,
                action: PlayerAction::Fold
            },
            ActionRecord {
                seat: 0,
                phase: Phase::Flop,
                action: PlayerAction::Check
            },
        ]
    );
    assert_eq!(h.actions_in(Phase::Flop).count(), 1);
}

#[test]
fn rejected_actions_are_not_recorded() {
    let mut g = played();
    assert!(g.bet(1, 40).is_err());
    assert_eq!(g.history().actions.len(), 4);
}

#[test]
fn exports_as_json() {
    let h = played().history();
    let json = h.to_json().unwrap();
    assert!(json.contains("\"hand_number\":1"));
    assert!(json.contains("\"PreFlop\""));
    assert!(!json.contains('\n'));
    assert_eq!(HandHistory::from_json(&json).unwrap(), h);
}
