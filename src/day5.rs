use itertools::Itertools;
use crate::error::{parse_num, ParseError};

/// Half-open interval of values, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u64,
    end: u64,
}

#[derive(Debug, PartialEq, Eq)]
struct Mapping {
    dest: u64,
    src: u64,
    len: u64,
}

impl Mapping {
    fn convert(&self, value: u64) -> Option<u64> {
        (self.src .. self.src + self.len).contains(&value)
            .then(|| self.dest + (value - self.src))
    }

    // Splits a span against the source range: the overlap comes back already
    // shifted into destination coordinates, the outer pieces untouched.
    // Nonempty spans only ever produce nonempty pieces.
    fn apply(&self, span: Span) -> (Option<Span>, Option<Span>, Option<Span>) {
        let src_end = self.src + self.len;
        let before = (span.start < self.src).then(|| Span {
            start: span.start, end: span.end.min(self.src)
        });
        let overlap_start = span.start.max(self.src);
        let overlap_end = span.end.min(src_end);
        let mapped = (overlap_start < overlap_end).then(|| Span {
            start: self.dest + (overlap_start - self.src),
            end: self.dest + (overlap_end - self.src),
        });
        let after = (span.end > src_end).then(|| Span {
            start: span.start.max(src_end), end: span.end
        });
        (before, mapped, after)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Table {
    mappings: Vec<Mapping>,
}

impl Table {
    // mappings are tried in file order, first match wins;
    // unmatched values pass through unchanged
    fn convert(&self, value: u64) -> u64 {
        self.mappings.iter().find_map(|mapping| mapping.convert(value)).unwrap_or(value)
    }

    fn convert_spans(&self, spans: Vec<Span>) -> Vec<Span> {
        let mut done = vec![];
        let mut pending = spans;
        for mapping in &self.mappings {
            let mut rest = vec![];
            for span in pending {
                let (before, mapped, after) = mapping.apply(span);
                rest.extend(before);
                done.extend(mapped);
                rest.extend(after);
            }
            pending = rest;
        }
        done.extend(pending);
        done
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Almanac {
    seeds: Vec<u64>,
    tables: Vec<Table>,
}

impl Almanac {
    fn convert(&self, seed: u64) -> u64 {
        self.tables.iter().fold(seed, |value, table| table.convert(value))
    }

    fn convert_spans(&self, spans: Vec<Span>) -> Vec<Span> {
        self.tables.iter().fold(spans, |spans, table| table.convert_spans(spans))
    }
}

fn parse_almanac(input: &str) -> Result<Almanac, ParseError> {
    let mut lines = input.trim().lines().zip(1 ..);
    let (first, _) = lines.next().ok_or(ParseError::Malformed {
        line: 1, expected: "empty input"
    })?;
    let seeds = first.strip_prefix("seeds:").ok_or(ParseError::Malformed {
        line: 1, expected: "input does not start with \"seeds:\""
    })?;
    let seeds = seeds.split_whitespace()
        .map(|token| parse_num(1, token))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tables: Vec<Table> = vec![];
    for (line, line_no) in lines {
        if line.trim().is_empty() {continue};
        if line.ends_with("map:") {
            tables.push(Table { mappings: vec![] });
            continue;
        }
        let table = tables.last_mut().ok_or(ParseError::Malformed {
            line: line_no, expected: "mapping line before any \"map:\" header"
        })?;
        let numbers = line.split_whitespace()
            .map(|token| parse_num(line_no, token))
            .collect::<Result<Vec<_>, _>>()?;
        let [dest, src, len] = numbers[..] else {
            return Err(ParseError::Malformed {
                line: line_no, expected: "a mapping needs exactly three numbers"
            });
        };
        table.mappings.push(Mapping { dest, src, len });
    }
    Ok(Almanac { seeds, tables })
}

pub fn day5(part: u8, input: &str) -> Result<u64, ParseError> {
    let almanac = parse_almanac(input)?;
    if part == 1 {
        Ok(almanac.seeds.iter().map(|&seed| almanac.convert(seed)).min().unwrap_or(0))
    } else {
        if almanac.seeds.len() % 2 != 0 {
            return Err(ParseError::Malformed {
                line: 1, expected: "seed ranges need an even number of values"
            });
        }
        let spans = almanac.seeds.iter().tuples()
            .map(|(&start, &len)| Span { start, end: start + len })
            .filter(|span| span.start < span.end)
            .collect();
        Ok(almanac.convert_spans(spans).iter().map(|span| span.start).min().unwrap_or(0))
    }
}
