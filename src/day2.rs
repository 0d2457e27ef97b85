use regex::Regex;
use rustc_hash::FxHashMap;
use crate::error::{parse_num, ParseError};

type Round = Vec<(u64, String)>;

#[derive(Debug, PartialEq, Eq)]
struct Game {
    id: u64,
    rounds: Vec<Round>,
}

fn parse_games(input: &str) -> Result<Vec<Game>, ParseError> {
    let header_re = Regex::new(r"^Game ([0-9]+):(.*)$").unwrap();
    let entry_re = Regex::new(r"^([0-9]+) ([a-z]+)$").unwrap();
    input.trim().lines().zip(1 ..).map(|(line, line_no)| {
        let header = header_re.captures(line).ok_or(ParseError::Malformed {
            line: line_no, expected: "not a \"Game <id>: <rounds>\" line"
        })?;
        let id = parse_num(line_no, &header[1])?;
        let rounds = header[2].split(';').map(|round| {
            round.split(',').map(|entry| {
                let entry = entry_re.captures(entry.trim()).ok_or(ParseError::Malformed {
                    line: line_no, expected: "not a \"<count> <colour>\" entry"
                })?;
                Ok((parse_num(line_no, &entry[1])?, entry[2].to_string()))
            }).collect()
        }).collect::<Result<_, _>>()?;
        Ok(Game { id, rounds })
    }).collect()
}

// only red, green and blue are capped; other colours always fit
fn within_limits(game: &Game) -> bool {
    game.rounds.iter().flatten().all(|(count, colour)| match colour.as_str() {
        "red" => *count <= 12,
        "green" => *count <= 13,
        "blue" => *count <= 14,
        _ => true
    })
}

fn cube_power(game: &Game) -> u64 {
    let mut maxima: FxHashMap<&str, u64> = FxHashMap::default();
    for (count, colour) in game.rounds.iter().flatten() {
        let max = maxima.entry(colour.as_str()).or_insert(0);
        if *count > *max {*max = *count};
    }
    maxima.values().product()
}

pub fn day2(part: u8, input: &str) -> Result<u64, ParseError> {
    let games = parse_games(input)?;
    Ok(if part == 1 {
        games.iter().filter(|game| within_limits(game)).map(|game| game.id).sum()
    } else {
        games.iter().map(cube_power).sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn parses_rounds_in_order() {
        let games = parse_games("Game 12: 3 blue, 4 red; 2 green").unwrap();
        assert_eq!(games, vec![Game {
            id: 12,
            rounds: vec![
                vec![(3, "blue".to_string()), (4, "red".to_string())],
                vec![(2, "green".to_string())],
            ],
        }]);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            parse_games("3 blue, 4 red"),
            Err(ParseError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_games("Game 1: 3 blue\nGame 2: blue 3"),
            Err(ParseError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn limits_per_round_not_per_game() {
        let games = parse_games(SAMPLE).unwrap();
        assert!(within_limits(&games[0]));
        assert!(!within_limits(&games[2]));
        assert!(!within_limits(&games[3]));
    }

    #[test]
    fn power_multiplies_colour_maxima() {
        let games = parse_games(SAMPLE).unwrap();
        assert_eq!(cube_power(&games[0]), 4 * 2 * 6);
        assert_eq!(cube_power(&games[3]), 14 * 3 * 15);
    }

    #[test]
    fn sample_answers() {
        assert_eq!(day2(1, SAMPLE), Ok(8));
        assert_eq!(day2(2, SAMPLE), Ok(2286));
    }
}
