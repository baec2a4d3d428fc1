// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
enum Instr {
	Noop,
	AddX(i64),
}

mod cpu {
	use super::Instr;

	/// The value of register X during each successive cycle.
	pub(super) fn execute(instrs: impl Iterator<Item = Instr>) -> impl Iterator<Item = i64> {
		use either::Either;
		let mut x = 1;
		instrs.flat_map(move |instr| match instr {
			Instr::Noop => Either::Left(std::iter::once(x)),
			Instr::AddX(v) => {
				let during = x;
				x += v;
				Either::Right([during; 2].into_iter())
			}
		})
	}
}

struct Crt([bool; 240]);

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		for (i, lit) in self.0.iter().enumerate() {
			if i > 0 && i % 40 == 0 { f.write_char('\n')? }
			f.write_char(if *lit { '#' } else { '.' })?
		}
		Ok(())
	}
}


fn input_instrs_from_str(s: &str) -> impl Iterator<Item = Instr> + '_ {
	parsing::instrs_from_str(s).map(|r| r.unwrap())
}

fn input_instrs() -> impl Iterator<Item = Instr> {
	input_instrs_from_str(include_str!("day10.txt"))
}


fn part1_impl(input_instrs: impl Iterator<Item = Instr>) -> i64 {
	cpu::execute(input_instrs)
		.take(220)
		.zip(1..)
		.filter(|&(_, cycle)| cycle % 40 == 20)
		.map(|(x, cycle)| cycle * x)
		.sum()
}

pub(crate) fn part1() -> i64 {
	part1_impl(input_instrs())
}


fn part2_impl(input_instrs: impl Iterator<Item = Instr>) -> impl std::fmt::Display {
	let mut pixels = [false; 240];
	for (i, x) in cpu::execute(input_instrs).take(240).enumerate() {
		let beam = (i % 40) as i64;
		pixels[i] = (beam - x).abs() <= 1;
	}
	Crt(pixels)
}

pub(crate) fn part2() -> impl std::fmt::Display {
	part2_impl(input_instrs())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug)]
	pub(super) enum InstrError {
		Invalid,
		AddX(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s == "noop" { Ok(Instr::Noop) }
			else if let Some(v) = s.strip_prefix("addx ") {
				Ok(Instr::AddX(v.parse().map_err(InstrError::AddX)?))
			}
			else { Err(InstrError::Invalid) }
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct InstrsError {
		line: usize,
		source: InstrError,
	}

	pub(super) fn instrs_from_str(s: &str)
	-> impl Iterator<Item = Result<Instr, InstrsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const SHORT_INPUT: &str = indoc::indoc! { "
		noop
		addx 3
		addx -5
	" };
	assert_eq!(cpu::execute(input_instrs_from_str(SHORT_INPUT)).collect::<Vec<_>>(),
		[1, 1, 1, 4, 4]);
	assert_eq!(part1(), 13140);
	assert_eq!(part2().to_string(), indoc::indoc! { "
		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######....." });
}
