// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SOURCE: [usize; 2] = [500, 0];

struct Cave {
	rocks: std::collections::HashSet<[usize; 2]>,
	max_y: usize,
}

struct Simulation<const FLOOR: bool> {
	cave: Cave,
	sand: std::collections::HashSet<[usize; 2]>,
}

impl<const FLOOR: bool> From<Cave> for Simulation<FLOOR> {
	fn from(cave: Cave) -> Self {
		Self { cave, sand: std::collections::HashSet::new() }
	}
}

impl<const FLOOR: bool> Simulation<FLOOR> {
	fn is_blocked(&self, pos: [usize; 2]) -> bool {
		FLOOR && pos[1] == self.cave.max_y + 2
			|| self.cave.rocks.contains(&pos)
			|| self.sand.contains(&pos)
	}

	/// Drops one unit of sand, returning where it came to rest — `None` once
	/// sand falls past the lowest rock (never, with a floor).
	fn drop_sand(&mut self) -> Option<[usize; 2]> {
		let mut pos = SOURCE;
		loop {
			if !FLOOR && pos[1] > self.cave.max_y { return None }

			let below = [
				[pos[0], pos[1] + 1],
				[pos[0] - 1, pos[1] + 1],
				[pos[0] + 1, pos[1] + 1],
			];
			match below.into_iter().find(|&pos| !self.is_blocked(pos)) {
				Some(next) => pos = next,
				None => {
					self.sand.insert(pos);
					return Some(pos)
				}
			}
		}
	}
}


fn input_cave_from_str(s: &str) -> Cave {
	s.parse().unwrap()
}

fn input_cave() -> Cave {
	input_cave_from_str(include_str!("day14.txt"))
}


fn part1_impl(input_cave: Cave) -> usize {
	let mut simulation = Simulation::<false>::from(input_cave);
	while simulation.drop_sand().is_some() {}
	simulation.sand.len()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_cave())
}


fn part2_impl(input_cave: Cave) -> usize {
	let mut simulation = Simulation::<true>::from(input_cave);
	while simulation.drop_sand() != Some(SOURCE) {}
	simulation.sand.len()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_cave())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Cave;

	#[derive(Debug)]
	pub(super) enum PointError {
		NoComma,
		X(ParseIntError),
		Y(ParseIntError),
	}

	fn try_point_from_str(s: &str) -> Result<[usize; 2], PointError> {
		let (x, y) = s.split_once(',').ok_or(PointError::NoComma)?;
		Ok([x.parse().map_err(PointError::X)?, y.parse().map_err(PointError::Y)?])
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CaveError {
		Empty,
		Point { line: usize, offset: usize, source: PointError },
		Unaligned { line: usize, from: [usize; 2], to: [usize; 2] },
	}

	impl FromStr for Cave {
		type Err = CaveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::iproduct;

			let mut rocks = std::collections::HashSet::new();
			for (l, line) in s.lines().enumerate() {
				let mut prev: Option<[usize; 2]> = None;
				for (offset, point) in line.split(" -> ").enumerate() {
					let point = try_point_from_str(point)
						.map_err(|e| CaveError::Point { line: l + 1, offset, source: e })?;
					if let Some(prev) = prev.replace(point) {
						if prev[0] != point[0] && prev[1] != point[1] {
							return Err(CaveError::Unaligned { line: l + 1, from: prev, to: point })
						}
						rocks.extend(iproduct!(
							prev[0].min(point[0])..=prev[0].max(point[0]),
							prev[1].min(point[1])..=prev[1].max(point[1])
						).map(|(x, y)| [x, y]));
					}
				}
			}

			let max_y = rocks.iter().map(|&[_, y]| y).max().ok_or(CaveError::Empty)?;
			Ok(Cave { rocks, max_y })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };
	assert_eq!(part1_impl(input_cave_from_str(INPUT)), 24);
	assert_eq!(part1(), 24);
	assert_eq!(part2_impl(input_cave_from_str(INPUT)), 93);
	assert_eq!(part2(), 93);
}
