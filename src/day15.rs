// Copyright (c) 2022 Bastiaan Marinus van de Weerd


use std::ops::Range;

#[cfg_attr(test, derive(Debug))]
struct Sensor {
	pos: [isize; 2],
	beacon: [isize; 2],
}

impl Sensor {
	fn radius(&self) -> isize {
		(self.pos[0].abs_diff(self.beacon[0]) + self.pos[1].abs_diff(self.beacon[1])) as isize
	}

	/// The columns this sensor covers in `row`, clamped to `extent`.
	fn row_coverage(&self, row: isize, extent: Range<isize>) -> Option<Range<isize>> {
		let delta = self.radius() - self.pos[1].abs_diff(row) as isize;
		if delta < 0 { return None }
		let start = (self.pos[0] - delta).max(extent.start);
		let end = (self.pos[0] + delta + 1).min(extent.end);
		(start < end).then_some(start..end)
	}
}

fn merged_row_coverage(sensors: &[Sensor], row: isize, extent: Range<isize>) -> Vec<Range<isize>> {
	use itertools::Itertools as _;
	let mut merged: Vec<Range<isize>> = vec![];
	for range in sensors.iter()
		.filter_map(|sensor| sensor.row_coverage(row, extent.clone()))
		.sorted_by_key(|range| range.start) {
		match merged.last_mut() {
			Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
			_ => merged.push(range),
		}
	}
	merged
}


fn input_sensors_from_str(s: &str) -> Vec<Sensor> {
	parsing::sensors_from_str(s).map(|r| r.unwrap()).collect()
}

fn input_sensors() -> Vec<Sensor> {
	input_sensors_from_str(include_str!("day15.txt"))
}


fn part1_impl<const ROW: isize>(input_sensors: Vec<Sensor>) -> usize {
	use itertools::Itertools as _;
	let merged = merged_row_coverage(&input_sensors, ROW, isize::MIN..isize::MAX);
	let covered: usize = merged.iter().map(|range| (range.end - range.start) as usize).sum();
	let beacons = input_sensors.iter()
		.filter(|sensor| sensor.beacon[1] == ROW)
		.map(|sensor| sensor.beacon[0])
		.unique()
		.filter(|x| merged.iter().any(|range| range.contains(x)))
		.count();
	covered - beacons
}

pub(crate) fn part1() -> usize {
	part1_impl::<10>(input_sensors())
}


fn part2_impl<const MAX: isize>(input_sensors: Vec<Sensor>) -> usize {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let Some((x, y)) = (0..MAX + 1).into_par_iter()
		.find_map_any(|y| {
			let merged = merged_row_coverage(&input_sensors, y, 0..MAX + 1);
			(merged.len() > 1).then(|| (merged[0].end, y))
		})
		else { panic!("Distress beacon not found") };

	x as usize * 4_000_000 + y as usize
}

pub(crate) fn part2() -> usize {
	part2_impl::<20>(input_sensors())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Sensor;

	#[derive(Debug)]
	pub(super) enum PosError {
		Format,
		X(ParseIntError),
		Y(ParseIntError),
	}

	fn try_pos_from_str(s: &str) -> Result<[isize; 2], PosError> {
		let (x, y) = s.split_once(", ").ok_or(PosError::Format)?;
		let x = x.strip_prefix("x=").ok_or(PosError::Format)?
			.parse().map_err(PosError::X)?;
		let y = y.strip_prefix("y=").ok_or(PosError::Format)?
			.parse().map_err(PosError::Y)?;
		Ok([x, y])
	}

	#[derive(Debug)]
	pub(super) enum SensorError {
		Format,
		Pos(PosError),
		Beacon(PosError),
	}

	impl FromStr for Sensor {
		type Err = SensorError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("Sensor at ").ok_or(SensorError::Format)?;
			let (pos, beacon) = s.split_once(": closest beacon is at ")
				.ok_or(SensorError::Format)?;
			Ok(Sensor {
				pos: try_pos_from_str(pos).map_err(SensorError::Pos)?,
				beacon: try_pos_from_str(beacon).map_err(SensorError::Beacon)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct SensorsError { line: usize, source: SensorError }

	pub(super) fn sensors_from_str(s: &str)
	-> impl Iterator<Item = Result<Sensor, SensorsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| SensorsError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sensor at x=2, y=18: closest beacon is at x=-2, y=15
		Sensor at x=9, y=16: closest beacon is at x=10, y=16
		Sensor at x=13, y=2: closest beacon is at x=15, y=3
		Sensor at x=12, y=14: closest beacon is at x=10, y=16
		Sensor at x=10, y=20: closest beacon is at x=10, y=16
		Sensor at x=14, y=17: closest beacon is at x=10, y=16
		Sensor at x=8, y=7: closest beacon is at x=2, y=10
		Sensor at x=2, y=0: closest beacon is at x=2, y=10
		Sensor at x=0, y=11: closest beacon is at x=2, y=10
		Sensor at x=20, y=14: closest beacon is at x=25, y=17
		Sensor at x=17, y=20: closest beacon is at x=21, y=22
		Sensor at x=16, y=7: closest beacon is at x=15, y=3
		Sensor at x=14, y=3: closest beacon is at x=15, y=3
		Sensor at x=20, y=1: closest beacon is at x=15, y=3
	" };
	assert_eq!(part1_impl::<10>(input_sensors_from_str(INPUT)), 26);
	assert_eq!(part1(), 26);
	assert_eq!(part2_impl::<20>(input_sensors_from_str(INPUT)), 56_000_011);
	assert_eq!(part2(), 56_000_011);
}
