use crate::form::CompletePairs;
use super::coin::CoinFlip;
use super::types::{Player, TeamPair};

/// Splits each position's pair between the two teams with one coin flip per position.
/// Heads sends the first name to Team A, tails sends it to Team B.
pub fn split_teams<C: CoinFlip + ?Sized>(pairs: &CompletePairs, coin: &mut C) -> TeamPair {
    let mut team_a = Vec::with_capacity(pairs.len());
    let mut team_b = Vec::with_capacity(pairs.len());

    for (position, [first, second]) in pairs.iter() {
        let (to_a, to_b) = if coin.flip() { (first, second) } else { (second, first) };
        team_a.push(Player { name: to_a.clone(), position: *position });
        team_b.push(Player { name: to_b.clone(), position: *position });
    }

    TeamPair { team_a, team_b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{validate_form, PlayerForm, Position};
    use crate::teams::coin::{RandomCoin, ScriptedCoin};
    use std::collections::HashSet;

    fn sample_pairs() -> CompletePairs {
        let mut form = PlayerForm::new();
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
        for (i, position) in Position::ALL.iter().enumerate() {
            form.set_player_name(*position, 0, names[i * 2]).unwrap();
            form.set_player_name(*position, 1, names[i * 2 + 1]).unwrap();
        }
        validate_form(&form).unwrap()
    }

    fn names(team: &[Player]) -> Vec<&str> {
        team.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_scripted_split_is_exact() {
        let mut coin = ScriptedCoin::new(vec![true, false, true, true, false]);
        let pair = split_teams(&sample_pairs(), &mut coin);
        assert_eq!(names(&pair.team_a), vec!["A", "D", "E", "G", "J"]);
        assert_eq!(names(&pair.team_b), vec!["B", "C", "F", "H", "I"]);
    }

    #[test]
    fn test_teams_follow_position_order() {
        let pair = split_teams(&sample_pairs(), &mut RandomCoin::seeded(3));
        let positions_a: Vec<Position> = pair.team_a.iter().map(|p| p.position).collect();
        let positions_b: Vec<Position> = pair.team_b.iter().map(|p| p.position).collect();
        assert_eq!(positions_a, Position::ALL.to_vec());
        assert_eq!(positions_b, Position::ALL.to_vec());
    }

    #[test]
    fn test_every_pair_is_split_across_teams() {
        let pairs = sample_pairs();
        let mut coin = RandomCoin::seeded(11);
        for _ in 0..200 {
            let pair = split_teams(&pairs, &mut coin);
            for (i, (_, [first, second])) in pairs.iter().enumerate() {
                let got: HashSet<&str> =
                    [pair.team_a[i].name.as_str(), pair.team_b[i].name.as_str()].into();
                let want: HashSet<&str> = [first.as_str(), second.as_str()].into();
                assert_eq!(got, want);
            }
        }
    }

    #[test]
    fn test_positions_are_decided_independently() {
        // Over many splits every position should land both ways, and the
        // positions should not all swap together.
        let pairs = sample_pairs();
        let mut coin = RandomCoin::seeded(99);
        let mut first_to_a = [0usize; 5];
        let mut uniform = 0;
        let runs = 2_000;
        for _ in 0..runs {
            let pair = split_teams(&pairs, &mut coin);
            let flags: Vec<bool> = pairs
                .iter()
                .zip(&pair.team_a)
                .map(|((_, [first, _]), player)| &player.name == first)
                .collect();
            for (i, flag) in flags.iter().enumerate() {
                if *flag {
                    first_to_a[i] += 1;
                }
            }
            if flags.iter().all(|f| *f) || flags.iter().all(|f| !*f) {
                uniform += 1;
            }
        }
        for count in first_to_a {
            assert!(count > 850 && count < 1_150, "count = {}", count);
        }
        // Independent flips make an all-same outcome 1 in 16.
        assert!(uniform < runs / 8, "uniform = {}", uniform);
    }
}
