// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Rucksack<'s>(&'s str);

impl Rucksack<'_> {
	fn compartments(&self) -> [&str; 2] {
		let (left, right) = self.0.split_at(self.0.len() / 2);
		[left, right]
	}

	/// Bit `p` set iff an item with priority `p` is present.
	fn item_bits(items: &str) -> u64 {
		items.bytes().fold(0, |acc, b| acc | 1 << Self::priority(b))
	}

	fn priority(item: u8) -> u32 {
		if item.is_ascii_lowercase() { (item - b'a') as u32 + 1 }
		else { (item - b'A') as u32 + 27 }
	}
}

fn common_priority(item_bits: impl IntoIterator<Item = u64>) -> u64 {
	let common = item_bits.into_iter().fold(u64::MAX, |acc, bits| acc & bits);
	debug_assert_eq!(common.count_ones(), 1);
	common.trailing_zeros() as u64
}


fn input_rucksacks_from_str(s: &str) -> impl Iterator<Item = Rucksack<'_>> + '_ {
	parsing::rucksacks_from_str(s).map(|r| r.unwrap())
}

fn input_rucksacks() -> impl Iterator<Item = Rucksack<'static>> {
	input_rucksacks_from_str(include_str!("day03.txt"))
}


fn part1_impl<'s>(input_rucksacks: impl Iterator<Item = Rucksack<'s>>) -> u64 {
	input_rucksacks
		.map(|rucksack| {
			let [left, right] = rucksack.compartments();
			common_priority([Rucksack::item_bits(left), Rucksack::item_bits(right)])
		})
		.sum()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_rucksacks())
}


fn part2_impl<'s>(input_rucksacks: impl Iterator<Item = Rucksack<'s>>) -> u64 {
	use itertools::Itertools as _;
	input_rucksacks
		.tuples()
		.map(|(first, second, third)| common_priority([&first, &second, &third]
			.map(|rucksack| Rucksack::item_bits(rucksack.0))))
		.sum()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_rucksacks())
}


mod parsing {
	use super::Rucksack;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksackError {
		OddLen(usize),
		InvalidItem { column: usize, found: char },
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
			if let Some((c, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_alphabetic()) {
				return Err(RucksackError::InvalidItem { column: c + 1, found })
			}
			Ok(Rucksack(s))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksacksError {
		Empty,
		Rucksack { line: usize, source: RucksackError },
	}

	pub(super) fn rucksacks_from_str(s: &str)
	-> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(RucksacksError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(part1_impl(input_rucksacks_from_str(INPUT)), 157);
	assert_eq!(part1(), 157);
	assert_eq!(part2_impl(input_rucksacks_from_str(INPUT)), 70);
	assert_eq!(part2(), 70);
}
