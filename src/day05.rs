// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Crate(u8);

#[cfg_attr(test, derive(Debug))]
struct Stacks(Vec<Vec<Crate>>);

#[cfg_attr(test, derive(Debug))]
struct Step {
	num_crates: usize,
	from_stack: usize,
	to_stack: usize,
}

impl Stacks {
	fn move_crates(&mut self, step: &Step, at_once: bool) {
		let split = step.from_stack.max(step.to_stack);
		let (head, tail) = self.0.split_at_mut(split);
		let (from, to) = if step.from_stack < step.to_stack {
			(&mut head[step.from_stack], &mut tail[0])
		} else {
			(&mut tail[0], &mut head[step.to_stack])
		};
		let lifted = from.drain(from.len() - step.num_crates..);
		if at_once { to.extend(lifted) }
		else { to.extend(lifted.rev()) }
	}

	fn top_crates(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last().map(|c| c.0 as char))
			.collect()
	}
}


fn input_from_str(s: &str) -> (Stacks, impl Iterator<Item = Step> + '_) {
	let (stacks, steps) = parsing::try_stacks_and_steps_from_str(s).unwrap();
	(stacks, steps.map(|r| r.unwrap()))
}

fn input() -> (Stacks, impl Iterator<Item = Step> + 'static) {
	input_from_str(include_str!("day05.txt"))
}


fn part1and2_impl(input: (Stacks, impl Iterator<Item = Step>), at_once: bool) -> String {
	let (mut stacks, steps) = input;
	for step in steps { stacks.move_crates(&step, at_once) }
	stacks.top_crates()
}

fn part1_impl(input: (Stacks, impl Iterator<Item = Step>)) -> String {
	part1and2_impl(input, false)
}

pub(crate) fn part1() -> String {
	part1_impl(input())
}


fn part2_impl(input: (Stacks, impl Iterator<Item = Step>)) -> String {
	part1and2_impl(input, true)
}

pub(crate) fn part2() -> String {
	part2_impl(input())
}


mod parsing {
	use std::{num::{NonZeroUsize, ParseIntError}, str::FromStr};
	use super::{Crate, Stacks, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksError {
		NoLabels,
		Label { line: usize, column: usize },
		InvalidCrate { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Stacks {
		type Err = StacksError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut drawing = vec![];
			let mut labels = None;
			for (l, line) in s.lines().enumerate() {
				if line.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
					labels = Some((l, line));
					break
				}
				drawing.push((l, line));
			}

			let (labels_l, labels) = labels.ok_or(StacksError::NoLabels)?;
			let mut num_stacks = 0;
			for (i, label) in labels.split_ascii_whitespace().enumerate() {
				if label.parse() != Ok(i + 1) {
					let column = 2 + i * 4;
					return Err(StacksError::Label { line: labels_l + 1, column })
				}
				num_stacks = i + 1;
			}

			let mut stacks: Vec<Vec<Crate>> = (0..num_stacks).map(|_| vec![]).collect();
			for (l, line) in drawing.into_iter().rev() {
				let bytes = line.as_bytes();
				for (i, stack) in stacks.iter_mut().enumerate() {
					let c = 1 + i * 4;
					match bytes.get(c) {
						None | Some(b' ') => (),
						Some(&b) if b.is_ascii_uppercase()
							&& bytes.get(c - 1) == Some(&b'[')
							&& bytes.get(c + 1) == Some(&b']') => stack.push(Crate(b)),
						Some(&found) => return Err(StacksError::InvalidCrate {
							line: l + 1, column: c + 1, found }),
					}
				}
			}

			Ok(Stacks(stacks))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		Format,
		NumCrates(ParseIntError),
		FromStack(ParseIntError),
		ToStack(ParseIntError),
		SameStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("move ").ok_or(StepError::Format)?;
			let (num_crates, s) = s.split_once(" from ").ok_or(StepError::Format)?;
			let (from_stack, to_stack) = s.split_once(" to ").ok_or(StepError::Format)?;
			let num_crates = num_crates.parse().map_err(StepError::NumCrates)?;
			let from_stack = from_stack.parse::<NonZeroUsize>()
				.map_err(StepError::FromStack)?.get() - 1;
			let to_stack = to_stack.parse::<NonZeroUsize>()
				.map_err(StepError::ToStack)?.get() - 1;
			if from_stack == to_stack { return Err(StepError::SameStack) }
			Ok(Step { num_crates, from_stack, to_stack })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksAndStepsError {
		Stacks(StacksError),
		NoBlank,
		Step { line: usize, source: StepError },
		StackOutOfRange { line: usize, stack: usize },
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str) -> Result<(
		Stacks,
		impl Iterator<Item = Result<Step, StacksAndStepsError>> + '_,
	), StacksAndStepsError> {
		let (drawing, steps) = s.split_once("\n\n").ok_or(StacksAndStepsError::NoBlank)?;
		let stacks: Stacks = drawing.parse().map_err(StacksAndStepsError::Stacks)?;

		let num_stacks = stacks.0.len();
		let lines_offset = drawing.lines().count() + 2;
		Ok((stacks, steps.lines()
			.enumerate()
			.map(move |(l, line)| {
				let line_number = lines_offset + l;
				let step: Step = line.parse()
					.map_err(|e| StacksAndStepsError::Step { line: line_number, source: e })?;
				for stack in [step.from_stack, step.to_stack] {
					if stack >= num_stacks { return Err(StacksAndStepsError::StackOutOfRange {
						line: line_number, stack: stack + 1 }) }
				}
				Ok(step)
			})))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };
	assert_eq!(part1_impl(input_from_str(INPUT)), "CMZ");
	assert_eq!(part1(), "CMZ");
	assert_eq!(part2_impl(input_from_str(INPUT)), "MCD");
	assert_eq!(part2(), "MCD");
}
