// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// `None` separates one elf’s inventory from the next.
fn totals_per_elf(input_calories: impl Iterator<Item = Option<usize>>) -> Vec<usize> {
	let mut totals = vec![0];
	for calories in input_calories {
		match calories {
			Some(calories) => *totals.last_mut().unwrap() += calories,
			None => totals.push(0),
		}
	}
	totals
}


fn input_calories_from_str(s: &str) -> impl Iterator<Item = Option<usize>> + '_ {
	parsing::inventory_from_str(s).map(|r| r.unwrap())
}

fn input_calories() -> impl Iterator<Item = Option<usize>> {
	input_calories_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_calories: impl Iterator<Item = Option<usize>>) -> usize {
	totals_per_elf(input_calories).into_iter().max().unwrap()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_calories())
}


fn part2_impl(input_calories: impl Iterator<Item = Option<usize>>) -> usize {
	use itertools::Itertools as _;
	totals_per_elf(input_calories).into_iter()
		.sorted_unstable()
		.rev()
		.take(3)
		.sum()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_calories())
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InventoryError {
		Empty,
		Calories { line: usize, source: ParseIntError },
	}

	pub(super) fn inventory_from_str(s: &str)
	-> impl Iterator<Item = Result<Option<usize>, InventoryError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(InventoryError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| (!line.is_empty())
				.then(|| line.parse()
					.map_err(|e| InventoryError::Calories { line: l + 1, source: e }))
				.transpose()))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1_impl(input_calories_from_str(INPUT)), 24_000);
	assert_eq!(part1(), 24_000);
	assert_eq!(part2_impl(input_calories_from_str(INPUT)), 45_000);
	assert_eq!(part2(), 45_000);
}
