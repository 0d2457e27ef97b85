mod error;
mod day1;
mod day2;
mod day3;
mod day4;
mod day5;
mod day7;

use error::ParseError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    let (day_arg, part_arg, fname) = match &args[..] {
        [_, day_arg, part_arg] => (day_arg, part_arg, format!("day{}.in", day_arg)),
        [_, day_arg, test_arg, part_arg] => (day_arg, part_arg, format!("day{}test{}.in", day_arg, test_arg)),
        _ => {
            println!("exactly two or three arguments expected - day number, optionally test number and 1/2 for part");
            std::process::exit(1);
        }
    };

    assert!(part_arg == "1" || part_arg == "2");
    let day: usize = day_arg.parse()?;
    let solver: fn(u8, &str) -> Result<u64, ParseError> = match day {
        1 => day1::day1,
        2 => day2::day2,
        3 => day3::day3,
        4 => day4::day4,
        5 => day5::day5,
        7 => day7::day7,
        _ => {
            println!("no solver for day {}", day);
            std::process::exit(1);
        }
    };
    let input = std::fs::read_to_string(dbg!(fname))?;
    let time = std::time::Instant::now();
    println!("{}", solver(part_arg.parse()?, &input)?);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
