// Copyright (c) 2022 Bastiaan Marinus van de Weerd


type Sections = std::ops::RangeInclusive<usize>;
struct AssignedPair([Sections; 2]);

impl AssignedPair {
	fn fully_contained(&self) -> bool {
		let [left, right] = &self.0;
		(left.start() <= right.start() && left.end() >= right.end())
			|| (right.start() <= left.start() && right.end() >= left.end())
	}

	fn overlapping(&self) -> bool {
		let [left, right] = &self.0;
		left.start() <= right.end() && right.start() <= left.end()
	}
}


fn input_pairs_from_str(s: &str) -> impl Iterator<Item = AssignedPair> + '_ {
	parsing::pairs_from_str(s).map(|r| r.unwrap())
}

fn input_pairs() -> impl Iterator<Item = AssignedPair> + 'static {
	input_pairs_from_str(include_str!("day04.txt"))
}


fn part1_impl(input_pairs: impl Iterator<Item = AssignedPair>) -> usize {
	input_pairs.filter(AssignedPair::fully_contained).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_pairs())
}


fn part2_impl(input_pairs: impl Iterator<Item = AssignedPair>) -> usize {
	input_pairs.filter(AssignedPair::overlapping).count()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_pairs())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Sections, AssignedPair};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SectionsError {
		NoHyphen,
		Start(ParseIntError),
		End(ParseIntError),
		Backwards { start: usize, end: usize },
	}

	fn try_sections_from_str(s: &str) -> Result<Sections, SectionsError> {
		let (start, end) = s.split_once('-').ok_or(SectionsError::NoHyphen)?;
		let start = start.parse().map_err(SectionsError::Start)?;
		let end = end.parse().map_err(SectionsError::End)?;
		if end < start { return Err(SectionsError::Backwards { start, end }) }
		Ok(start..=end)
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		NoComma,
		Left(SectionsError),
		Right(SectionsError),
	}

	impl FromStr for AssignedPair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::NoComma)?;
			Ok(AssignedPair([
				try_sections_from_str(left).map_err(PairError::Left)?,
				try_sections_from_str(right).map_err(PairError::Right)?,
			]))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		Empty,
		Pair { line: usize, source: PairError },
	}

	pub(super) fn pairs_from_str(s: &str)
	-> impl Iterator<Item = Result<AssignedPair, PairsError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(PairsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError::Pair { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1_impl(input_pairs_from_str(INPUT)), 2);
	assert_eq!(part1(), 2);
	assert_eq!(part2_impl(input_pairs_from_str(INPUT)), 4);
	assert_eq!(part2(), 4);
}
