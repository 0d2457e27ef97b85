use crate::error::ParseError;

const DIGIT_WORDS: [(&[u8], u64); 9] = [
    (b"one", 1), (b"two", 2), (b"three", 3), (b"four", 4), (b"five", 5),
    (b"six", 6), (b"seven", 7), (b"eight", 8), (b"nine", 9),
];

fn digit_at(line: &[u8], at: usize) -> Option<u64> {
    match line[at] {
        digit @ b'0'..=b'9' => Some((digit - b'0') as u64),
        _ => None
    }
}

fn word_or_digit_at(line: &[u8], at: usize) -> Option<u64> {
    digit_at(line, at).or_else(||
        DIGIT_WORDS.iter()
            .find(|(word, _)| line[at..].starts_with(word))
            .map(|&(_, value)| value)
    )
}

// first and last digit of the line, read as a two-digit number;
// a single digit counts twice, a digitless line counts zero
fn calibration_value(line: &str, digit_of: fn(&[u8], usize) -> Option<u64>) -> u64 {
    let line = line.as_bytes();
    let mut digits = (0 .. line.len()).filter_map(|at| digit_of(line, at));
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0
    }
}

pub fn day1(part: u8, input: &str) -> Result<u64, ParseError> {
    let digit_of: fn(&[u8], usize) -> Option<u64> =
        if part == 1 {digit_at} else {word_or_digit_at};
    Ok(input.trim().lines().map(|line| calibration_value(line, digit_of)).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_A: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet";

    const SAMPLE_B: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";

    #[test]
    fn digit_lines() {
        assert_eq!(calibration_value("712324", digit_at), 74);
        assert_eq!(calibration_value("ab7ce12de324defj", digit_at), 74);
        assert_eq!(calibration_value("abec5defs", digit_at), 55);
        assert_eq!(calibration_value("nodigitshere", digit_at), 0);
    }

    #[test]
    fn spelled_lines() {
        assert_eq!(calibration_value("two1nine", word_or_digit_at), 29);
        // "eightwo" yields both eight and two
        assert_eq!(calibration_value("eightwothree", word_or_digit_at), 83);
        assert_eq!(calibration_value("zoneight234", word_or_digit_at), 14);
        assert_eq!(calibration_value("7pqrstsixteen", word_or_digit_at), 76);
    }

    #[test]
    fn sample_answers() {
        assert_eq!(day1(1, SAMPLE_A), Ok(142));
        assert_eq!(day1(2, SAMPLE_B), Ok(281));
    }
}
