use arrayvec::ArrayVec;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use crate::error::{parse_num, ParseError};

const CARDS: &[u8; 13] = b"23456789TJQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, PartialEq, Eq)]
struct Hand {
    cards: [u8; 5],
    bid: u64,
}

fn parse_hands(input: &str) -> Result<Vec<Hand>, ParseError> {
    input.trim().lines().zip(1 ..).map(|(line, line_no)| {
        let (cards, bid) = line.split_once(' ').ok_or(ParseError::Malformed {
            line: line_no, expected: "not a \"<hand> <bid>\" line"
        })?;
        let five_cards = ParseError::Malformed {
            line: line_no, expected: "a hand needs exactly five cards"
        };
        let mut hand = ArrayVec::<u8, 5>::new();
        for card in cards.bytes() {
            if !CARDS.contains(&card) {
                return Err(ParseError::UnexpectedChar { line: line_no, found: card as char });
            }
            hand.try_push(card).map_err(|_| five_cards.clone())?;
        }
        Ok(Hand {
            cards: hand.into_inner().map_err(|_| five_cards)?,
            bid: parse_num(line_no, bid)?,
        })
    }).collect()
}

fn card_value(card: u8, jokers: bool) -> u64 {
    match card {
        b'J' if jokers => 1,
        b'2' ..= b'9' => (card - b'0') as u64,
        b'T' => 10,
        b'J' => 11,
        b'Q' => 12,
        b'K' => 13,
        b'A' => 14,
        _ => unreachable!("cards are validated at parse time")
    }
}

fn rank(cards: &[u8; 5], jokers: bool) -> HandRank {
    let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    if jokers {
        if let Some(joker_count) = counts.remove(&b'J') {
            // jokers impersonate whichever card we hold the most of
            match counts.values_mut().max() {
                Some(count) => *count += joker_count,
                None => return HandRank::FiveOfAKind
            }
        }
    }
    let multiplicities: Vec<u64> = counts.values().copied().sorted().collect();
    match multiplicities[..] {
        [5] => HandRank::FiveOfAKind,
        [1, 4] => HandRank::FourOfAKind,
        [2, 3] => HandRank::FullHouse,
        [1, 1, 3] => HandRank::ThreeOfAKind,
        [1, 2, 2] => HandRank::TwoPair,
        [1, 1, 1, 2] => HandRank::OnePair,
        _ => HandRank::HighCard
    }
}

pub fn day7(part: u8, input: &str) -> Result<u64, ParseError> {
    let jokers = part == 2;
    Ok(parse_hands(input)?.into_iter()
        .map(|hand| {
            let values = hand.cards.map(|card| card_value(card, jokers));
            ((rank(&hand.cards, jokers), values), hand.bid)
        })
        .sorted_by_key(|&(key, _)| key)
        .zip(1 ..)
        .map(|((_, bid), position)| bid * position)
        .sum())
}
