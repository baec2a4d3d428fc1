// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Heightmap {
	heights: Vec<u8>,
	width: usize,
	start: usize,
	end: usize,
}

impl Heightmap {
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> {
		let w = self.width;
		let up = (pos >= w).then(|| pos - w);
		let left = (pos % w > 0).then(|| pos - 1);
		let right = (pos % w < w - 1).then(|| pos + 1);
		let down = (pos + w < self.heights.len()).then(|| pos + w);
		[up, left, right, down].into_iter().flatten()
	}

	/// Breadth-first search from `from` to the nearest position satisfying
	/// `found`, taking only steps `step` allows.
	fn fewest_steps(
		&self,
		from: usize,
		found: impl Fn(usize) -> bool,
		step: impl Fn(u8, u8) -> bool,
	) -> usize {
		use std::collections::VecDeque;

		let mut steps = vec![usize::MAX; self.heights.len()];
		let mut queue = VecDeque::from([(from, 0)]);
		steps[from] = 0;

		while let Some((pos, dist)) = queue.pop_front() {
			if found(pos) { return dist }

			for next in self.neighbors(pos) {
				if steps[next] != usize::MAX { continue }
				if !step(self.heights[pos], self.heights[next]) { continue }
				steps[next] = dist + 1;
				queue.push_back((next, dist + 1));
			}
		}

		panic!("Could not find path")
	}
}


fn input_heightmap_from_str(s: &str) -> Heightmap {
	s.parse().unwrap()
}

fn input_heightmap() -> Heightmap {
	input_heightmap_from_str(include_str!("day12.txt"))
}


fn part1_impl(input_heightmap: Heightmap) -> usize {
	input_heightmap.fewest_steps(
		input_heightmap.start,
		|pos| pos == input_heightmap.end,
		|from, to| to <= from + 1,
	)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_heightmap())
}


fn part2_impl(input_heightmap: Heightmap) -> usize {
	input_heightmap.fewest_steps(
		input_heightmap.end,
		|pos| input_heightmap.heights[pos] == 0,
		|from, to| from <= to + 1,
	)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_heightmap())
}


mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightmapError {
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		DuplicateEnd { line: usize, column: usize },
		NoStart,
		NoEnd,
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use HeightmapError as E;

			let mut heights = vec![];
			let mut width = None;
			let mut start = None;
			let mut end = None;

			for (l, line) in s.lines().enumerate() {
				for (c, b) in line.bytes().enumerate() {
					heights.push(match b {
						b'S' => {
							if start.replace(heights.len()).is_some() {
								return Err(E::DuplicateStart { line: l + 1, column: c + 1 })
							}
							0
						}
						b'E' => {
							if end.replace(heights.len()).is_some() {
								return Err(E::DuplicateEnd { line: l + 1, column: c + 1 })
							}
							25
						}
						b if b.is_ascii_lowercase() => b - b'a',
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found }),
					});
				}
				match width {
					None => width = Some(line.len()),
					Some(len) if line.len() != len => return Err(E::LineLen {
						line: l + 1, len, found: line.len() }),
					_ => (),
				}
			}

			Ok(Heightmap {
				heights,
				width: width.ok_or(E::NoStart)?,
				start: start.ok_or(E::NoStart)?,
				end: end.ok_or(E::NoEnd)?,
			})
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };
	assert_eq!(part1_impl(input_heightmap_from_str(INPUT)), 31);
	assert_eq!(part1(), 31);
	assert_eq!(part2_impl(input_heightmap_from_str(INPUT)), 29);
	assert_eq!(part2(), 29);
}
