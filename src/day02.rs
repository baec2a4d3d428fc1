// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq)]
enum Shape { Rock, Paper, Scissors }

impl Shape {
	fn score(self) -> u64 {
		match self { Shape::Rock => 1, Shape::Paper => 2, Shape::Scissors => 3 }
	}

	/// The shape this shape wins from.
	fn beats(self) -> Shape {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	fn play_against(self, opponent: Shape) -> u64 {
		self.score() + if self == opponent { 3 }
			else if self.beats() == opponent { 6 }
			else { 0 }
	}
}

#[derive(Clone, Copy)]
enum Outcome { Lose, Draw, Win }

impl Outcome {
	fn shape_against(self, opponent: Shape) -> Shape {
		match self {
			Outcome::Lose => opponent.beats(),
			Outcome::Draw => opponent,
			Outcome::Win => opponent.beats().beats(),
		}
	}
}

struct Round<Second>(Shape, Second);


fn input_rounds_from_str<Second>(s: &str) -> impl Iterator<Item = Round<Second>> + '_
where Second: std::str::FromStr + 'static, <Second as std::str::FromStr>::Err: std::fmt::Debug {
	parsing::rounds_from_str(s).map(|r| r.unwrap())
}

fn input_rounds<Second>() -> impl Iterator<Item = Round<Second>> + 'static
where Second: std::str::FromStr + 'static, <Second as std::str::FromStr>::Err: std::fmt::Debug {
	input_rounds_from_str(include_str!("day02.txt"))
}


fn part1_impl(input_rounds: impl Iterator<Item = Round<Shape>>) -> u64 {
	input_rounds
		.map(|Round(opponent, own)| own.play_against(opponent))
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_rounds())
}


fn part2_impl(input_rounds: impl Iterator<Item = Round<Outcome>>) -> u64 {
	input_rounds
		.map(|Round(opponent, outcome)| outcome.shape_against(opponent).play_against(opponent))
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_rounds())
}


mod parsing {
	use std::str::FromStr;
	use super::{Shape, Outcome, Round};

	macro_rules! exactly_one_char { ( $s:expr, $len_err:expr ) => { {
		use itertools::Itertools as _;
		$s.chars().exactly_one().map_err(|chars| {
			let (low, upp) = chars.size_hint();
			let len_err = $len_err;
			len_err(upp.unwrap_or(low))
		})
	} } }

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ShapeError {
		Len(usize),
		WrongColumn,
		Invalid(char),
	}

	impl FromStr for Shape {
		type Err = ShapeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match exactly_one_char!(s, ShapeError::Len)? {
				'X' => Ok(Shape::Rock),
				'Y' => Ok(Shape::Paper),
				'Z' => Ok(Shape::Scissors),
				'A' | 'B' | 'C' => Err(ShapeError::WrongColumn),
				chr => Err(ShapeError::Invalid(chr)),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum OutcomeError {
		Len(usize),
		Invalid(char),
	}

	impl FromStr for Outcome {
		type Err = OutcomeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match exactly_one_char!(s, OutcomeError::Len)? {
				'X' => Ok(Outcome::Lose),
				'Y' => Ok(Outcome::Draw),
				'Z' => Ok(Outcome::Win),
				chr => Err(OutcomeError::Invalid(chr)),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundError<Second> {
		Format,
		/// `None` if the opponent column held an own-column code.
		Opponent(Option<char>),
		Second(Second),
	}

	impl<Second: FromStr> FromStr for Round<Second> {
		type Err = RoundError<<Second as FromStr>::Err>;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (opponent, second) = s.split_once(' ').ok_or(RoundError::Format)?;
			let opponent = match exactly_one_char!(opponent, |_| RoundError::Format)? {
				'A' => Shape::Rock,
				'B' => Shape::Paper,
				'C' => Shape::Scissors,
				'X' | 'Y' | 'Z' => return Err(RoundError::Opponent(None)),
				chr => return Err(RoundError::Opponent(Some(chr))),
			};
			Ok(Round(opponent, second.parse().map_err(RoundError::Second)?))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundsError<Second> {
		Empty,
		Round { line: usize, source: RoundError<Second> },
	}

	pub(super) fn rounds_from_str<'a, Second: FromStr + 'a>(s: &'a str)
	-> impl Iterator<Item = Result<Round<Second>, RoundsError<<Second as FromStr>::Err>>> + 'a where <Second as FromStr>::Err: 'a {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(RoundsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1_impl(input_rounds_from_str(INPUT)), 15);
	assert_eq!(part1(), 15);
	assert_eq!(part2_impl(input_rounds_from_str(INPUT)), 12);
	assert_eq!(part2(), 12);
}
