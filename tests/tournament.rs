//! Integration tests: standings, match reporting and pairing through the service.

use swiss_tournament::config::{AppConfig, DatabaseSettings};
use swiss_tournament::services::TournamentService;
use swiss_tournament::{PlayerRecord, TournamentError, pair};

fn service() -> TournamentService {
    let config = AppConfig {
        database: DatabaseSettings::in_memory(),
    };
    TournamentService::new(&config).unwrap()
}

fn find(standings: &[PlayerRecord], id: i64) -> &PlayerRecord {
    standings.iter().find(|p| p.id == id).unwrap()
}

#[test]
fn report_match_updates_both_records() {
    let service = service();
    let ids: Vec<i64> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|name| service.register_player(name).unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    service.report_match(2, 5).unwrap();

    let standings = service.player_standings().unwrap();
    let winner = find(&standings, 2);
    let loser = find(&standings, 5);
    assert_eq!((winner.wins, winner.matches_played), (1, 1));
    assert_eq!((loser.wins, loser.matches_played), (0, 1));
    assert_eq!(standings[0].id, 2);
    for untouched in [1, 3, 4] {
        let player = find(&standings, untouched);
        assert_eq!((player.wins, player.matches_played), (0, 0));
    }
}

#[test]
fn delete_matches_resets_every_record() {
    let service = service();
    for name in ["A", "B", "C", "D"] {
        service.register_player(name).unwrap();
    }
    service.report_match(1, 2).unwrap();
    service.report_match(3, 4).unwrap();
    service.report_match(1, 3).unwrap();

    service.delete_matches().unwrap();

    assert!(service.matches().unwrap().is_empty());
    let standings = service.player_standings().unwrap();
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|p| p.wins == 0 && p.matches_played == 0));
}

#[test]
fn pairings_follow_the_standings() {
    let service = service();
    for name in ["A", "B", "C", "D"] {
        service.register_player(name).unwrap();
    }
    service.report_match(3, 1).unwrap();
    service.report_match(4, 2).unwrap();

    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    assert_eq!(pairings[0].player_ids(), [3, 4]);
    assert_eq!(pairings[1].player_ids(), [1, 2]);
    assert_eq!(pairings[0].first_player_name, "C");
    assert_eq!(pairings[0].second_player_name, "D");
}

#[test]
fn ties_keep_registration_order() {
    let service = service();
    for name in ["A", "B", "C", "D", "E", "F"] {
        service.register_player(name).unwrap();
    }
    service.report_match(6, 1).unwrap();
    service.report_match(4, 2).unwrap();

    let ids: Vec<i64> = service.player_standings().unwrap().iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![4, 6, 1, 2, 3, 5]);
}

#[test]
fn rematches_are_not_avoided() {
    let service = service();
    for name in ["A", "B", "C", "D"] {
        service.register_player(name).unwrap();
    }
    service.report_match(1, 2).unwrap();
    service.report_match(3, 4).unwrap();
    service.report_match(1, 3).unwrap();
    service.report_match(2, 4).unwrap();

    // 1 (2 wins), 2 and 3 tied on 1 win, 4 winless.
    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings[0].player_ids(), [1, 2]);
    assert_eq!(pairings[1].player_ids(), [3, 4]);
}

#[test]
fn full_round_robin_of_four() {
    let service = service();
    for name in ["A", "B", "C", "D"] {
        service.register_player(name).unwrap();
    }

    for _ in 0..2 {
        let pairings = service.swiss_pairings().unwrap();
        for pairing in &pairings {
            service
                .report_match(pairing.first_player_id, pairing.second_player_id)
                .unwrap();
        }
    }

    let standings = service.player_standings().unwrap();
    assert_eq!(service.matches().unwrap().len(), 4);
    assert!(standings.iter().all(|p| p.matches_played == 2));
    assert_eq!(standings[0].wins, 2);
    assert_eq!(standings[3].wins, 0);
}

#[test]
fn odd_field_reports_error_without_side_effects() {
    let service = service();
    for name in ["A", "B", "C"] {
        service.register_player(name).unwrap();
    }

    let result = service.swiss_pairings();

    assert!(matches!(result, Err(TournamentError::OddPlayerCount(3))));
    assert_eq!(service.count_players().unwrap(), 3);
}

#[test]
fn engine_matches_documented_scenarios() {
    let standings = vec![
        PlayerRecord::new(1, "A", 2, 2),
        PlayerRecord::new(2, "B", 2, 2),
        PlayerRecord::new(3, "C", 1, 2),
        PlayerRecord::new(4, "D", 0, 2),
    ];
    let pairings = pair(&standings).unwrap();
    assert_eq!(pairings[0].player_ids(), [1, 2]);
    assert_eq!(pairings[1].player_ids(), [3, 4]);

    let single = vec![PlayerRecord::new(1, "A", 0, 0)];
    assert!(matches!(pair(&single), Err(TournamentError::OddPlayerCount(1))));
}
