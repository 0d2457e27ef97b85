use itertools::Itertools;
use crate::error::ParseError;

#[derive(Debug, PartialEq, Eq)]
struct Number {
    value: u64,
    row: usize,
    start: usize,
    end: usize, // exclusive column
}

#[derive(Debug, PartialEq, Eq)]
struct Symbol {
    glyph: u8,
    row: usize,
    col: usize,
}

impl Number {
    // 8-neighbour bounding box: one cell around the whole digit run
    fn is_adjacent(&self, symbol: &Symbol) -> bool {
        symbol.col + 1 >= self.start && symbol.col <= self.end &&
        symbol.row + 1 >= self.row && symbol.row <= self.row + 1
    }
}

fn scan(input: &str) -> (Vec<Number>, Vec<Symbol>) {
    let mut numbers = vec![];
    let mut symbols = vec![];
    for (row, line) in input.trim().lines().enumerate() {
        let line = line.as_bytes();
        let mut run: Option<(usize, u64)> = None;
        for (col, &cell) in line.iter().enumerate() {
            if cell.is_ascii_digit() {
                let (start, value) = run.unwrap_or((col, 0));
                run = Some((start, value * 10 + (cell - b'0') as u64));
            } else {
                if let Some((start, value)) = run.take() {
                    numbers.push(Number { value, row, start, end: col });
                }
                if cell != b'.' {
                    symbols.push(Symbol { glyph: cell, row, col });
                }
            }
        }
        if let Some((start, value)) = run {
            numbers.push(Number { value, row, start, end: line.len() });
        }
    }
    (numbers, symbols)
}

pub fn day3(part: u8, input: &str) -> Result<u64, ParseError> {
    let (numbers, symbols) = scan(input);
    Ok(if part == 1 {
        numbers.iter()
            .filter(|number| symbols.iter().any(|symbol| number.is_adjacent(symbol)))
            .map(|number| number.value)
            .sum()
    } else {
        symbols.iter()
            .filter(|symbol| symbol.glyph == b'*')
            .filter_map(|symbol|
                numbers.iter()
                    .filter(|number| number.is_adjacent(symbol))
                    .collect_tuple::<(_, _)>()
                    .map(|(left, right)| left.value * right.value)
            )
            .sum()
    })
}
