// Copyright (c) 2022 Bastiaan Marinus van de Weerd


enum Dir { Up, Down, Left, Right }
struct Motion { dir: Dir, steps: usize }


fn input_motions_from_str(s: &str) -> impl Iterator<Item = Motion> + '_ {
	parsing::motions_from_str(s).map(|r| r.unwrap())
}

fn input_motions() -> impl Iterator<Item = Motion> {
	input_motions_from_str(include_str!("day09.txt"))
}


fn part1and2_impl<const KNOTS: usize>(input_motions: impl Iterator<Item = Motion>) -> usize {
	use {std::collections::HashSet, Dir::*};

	let mut knots = [[0_isize; 2]; KNOTS];
	let mut tail_visited = HashSet::new();
	tail_visited.insert(knots[KNOTS - 1]);

	for Motion { dir, steps } in input_motions {
		let [dx, dy] = match dir { Up => [0, 1], Down => [0, -1], Left => [-1, 0], Right => [1, 0] };
		for _ in 0..steps {
			knots[0][0] += dx;
			knots[0][1] += dy;

			for i in 1..KNOTS {
				let [lead_x, lead_y] = knots[i - 1];
				let knot = &mut knots[i];
				let [delta_x, delta_y] = [lead_x - knot[0], lead_y - knot[1]];
				// Still adjacent; so are all later knots
				if delta_x.abs() <= 1 && delta_y.abs() <= 1 { break }

				knot[0] += delta_x.signum();
				knot[1] += delta_y.signum();
				if i == KNOTS - 1 { tail_visited.insert(*knot); }
			}
		}
	}

	tail_visited.len()
}

pub(crate) fn part1() -> usize {
	part1and2_impl::<2>(input_motions())
}

pub(crate) fn part2() -> usize {
	part1and2_impl::<10>(input_motions())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Motion};

	#[derive(Debug)]
	pub(super) enum MotionError {
		NoSpace,
		Dir(Option<char>),
		Steps(ParseIntError),
	}

	impl FromStr for Motion {
		type Err = MotionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, steps) = s.split_once(' ').ok_or(MotionError::NoSpace)?;
			let dir = match dir {
				"U" => Dir::Up,
				"D" => Dir::Down,
				"L" => Dir::Left,
				"R" => Dir::Right,
				invalid => return Err(MotionError::Dir(invalid.chars().next())),
			};
			let steps = steps.parse().map_err(MotionError::Steps)?;
			Ok(Motion { dir, steps })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MotionsError {
		line: usize,
		source: MotionError,
	}

	pub(super) fn motions_from_str(s: &str)
	-> impl Iterator<Item = Result<Motion, MotionsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MotionsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use {test_case::test_case, super::input_motions_from_str};

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];

	#[test]
	fn part1_impl() {
		assert_eq!(super::part1and2_impl::<2>(input_motions_from_str(INPUTS[0])), 13);
	}

	#[test]
	fn part1() {
		assert_eq!(super::part1(), 13);
	}

	#[test_case(0, 1; "short")]
	#[test_case(1, 36; "long")]
	fn part2_impl(input: usize, tail_visited: usize) {
		assert_eq!(super::part1and2_impl::<10>(input_motions_from_str(INPUTS[input])), tail_visited);
	}

	#[test]
	fn part2() {
		assert_eq!(super::part2(), 1);
	}
}
