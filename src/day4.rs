use bitvec::prelude::*;
use crate::error::{parse_num, ParseError};

#[derive(Debug, PartialEq, Eq)]
struct Card {
    id: u64,
    have: Vec<u64>,
    winning: Vec<u64>,
}

impl Card {
    // how many of the numbers we have appear in the winning list
    fn matches(&self) -> usize {
        let mut winning = bitvec![0; 128];
        for &n in &self.winning {
            let n = n as usize;
            if n >= winning.len() {winning.resize(n + 1, false)};
            winning.set(n, true);
        }
        self.have.iter()
            .filter(|&&n| winning.get(n as usize).map_or(false, |bit| *bit))
            .count()
    }

    fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            matches => 1 << (matches - 1)
        }
    }
}

fn parse_cards(input: &str) -> Result<Vec<Card>, ParseError> {
    input.trim().lines().zip(1 ..).map(|(line, line_no)| {
        let (header, body) = line.split_once(':').ok_or(ParseError::Malformed {
            line: line_no, expected: "no \":\" after the card id"
        })?;
        let id_token = header.strip_prefix("Card").ok_or(ParseError::Malformed {
            line: line_no, expected: "line does not start with \"Card\""
        })?;
        let (have, winning) = body.split_once('|').ok_or(ParseError::Malformed {
            line: line_no, expected: "no \"|\" between the number lists"
        })?;
        let numbers = |tokens: &str| {
            tokens.split_whitespace()
                .map(|token| parse_num(line_no, token))
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(Card { id: parse_num(line_no, id_token)?, have: numbers(have)?, winning: numbers(winning)? })
    }).collect()
}

pub fn day4(part: u8, input: &str) -> Result<u64, ParseError> {
    let cards = parse_cards(input)?;
    Ok(if part == 1 {
        cards.iter().map(Card::points).sum()
    } else {
        // each card adds its own multiplicity to the next `matches` cards
        let mut copies = vec![1u64; cards.len()];
        for (at, card) in cards.iter().enumerate() {
            let won = copies[at];
            for offset in 1 ..= card.matches() {
                if let Some(count) = copies.get_mut(at + offset) {*count += won};
            }
        }
        copies.iter().sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    fn card(id: u64, have: &[u64], winning: &[u64]) -> Card {
        Card { id, have: have.to_vec(), winning: winning.to_vec() }
    }

    #[test]
    fn parses_a_card() {
        let cards = parse_cards("Card 12: 2 3 4 5 | 4 3 2").unwrap();
        assert_eq!(cards, vec![card(12, &[2, 3, 4, 5], &[4, 3, 2])]);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            parse_cards("Card 1 | 2 3"),
            Err(ParseError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_cards("Card 1: 2 3 4 5"),
            Err(ParseError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            parse_cards("Card 1: 2 x | 3"),
            Err(ParseError::BadInt { line: 1, .. })
        ));
    }

    #[test]
    fn counts_overlap() {
        assert_eq!(card(12, &[2, 3, 4, 5], &[4, 3, 8]).matches(), 2);
    }

    #[test]
    fn scores_double_per_extra_match() {
        assert_eq!(card(12, &[1, 2, 3, 4], &[5, 6, 7, 8]).points(), 0);
        assert_eq!(card(12, &[1, 2, 3, 4], &[3, 4, 5]).points(), 2);
        assert_eq!(card(12, &[1, 2, 3, 4], &[1, 2, 3, 4]).points(), 8);
    }

    #[test]
    fn sample_answers() {
        assert_eq!(day4(1, SAMPLE), Ok(13));
        assert_eq!(day4(2, SAMPLE), Ok(30));
    }
}
