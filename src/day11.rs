// Copyright (c) 2022 Bastiaan Marinus van de Weerd


enum Operator { Add, Mul }
enum Operand { Old, Literal(u64) }

struct Operation {
	operator: Operator,
	operand: Operand,
}

impl Operation {
	fn apply(&self, old: u64) -> u64 {
		let rhs = match self.operand { Operand::Old => old, Operand::Literal(value) => value };
		match self.operator { Operator::Add => old + rhs, Operator::Mul => old * rhs }
	}
}

struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	divisor: u64,
	if_divisible: usize,
	if_not_divisible: usize,
}

impl Monkey {
	fn throw_target(&self, worry_level: u64) -> usize {
		if worry_level % self.divisor == 0 { self.if_divisible }
		else { self.if_not_divisible }
	}
}


fn input_monkeys_from_str(s: &str) -> Vec<Monkey> {
	parsing::try_monkeys_from_str(s).unwrap()
}

fn input_monkeys() -> Vec<Monkey> {
	input_monkeys_from_str(include_str!("day11.txt"))
}


fn part1and2_impl(mut monkeys: Vec<Monkey>, rounds: usize, reduce: impl Fn(u64) -> u64) -> u64 {
	use itertools::Itertools as _;

	let mut inspections = vec![0_u64; monkeys.len()];
	for _ in 0..rounds {
		for i in 0..monkeys.len() {
			let items = std::mem::take(&mut monkeys[i].items);
			inspections[i] += items.len() as u64;
			for item in items {
				let worry_level = reduce(monkeys[i].operation.apply(item));
				let target = monkeys[i].throw_target(worry_level);
				monkeys[target].items.push(worry_level);
			}
		}
	}

	inspections.into_iter().sorted_unstable().rev().take(2).product()
}


fn part1_impl(input_monkeys: Vec<Monkey>) -> u64 {
	part1and2_impl(input_monkeys, 20, |worry_level| worry_level / 3)
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_monkeys())
}


fn part2_impl(input_monkeys: Vec<Monkey>) -> u64 {
	let divisor_product: u64 = input_monkeys.iter().map(|monkey| monkey.divisor).product();
	part1and2_impl(input_monkeys, 10_000, |worry_level| worry_level % divisor_product)
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_monkeys())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Operator, Operand, Operation, Monkey};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeyError {
		Truncated,
		Format { line: usize },
		Id(ParseIntError),
		Item { offset: usize, source: ParseIntError },
		Operator(Option<char>),
		Operand(ParseIntError),
		Divisor(ParseIntError),
		Target { if_divisible: bool, source: ParseIntError },
	}

	fn try_monkey_from_str(s: &str) -> Result<(usize, Monkey), MonkeyError> {
		let mut lines = s.lines().enumerate();

		macro_rules! next_stripped { ( $prefix:literal ) => { {
			let (l, line) = lines.next().ok_or(MonkeyError::Truncated)?;
			let stripped = line.trim_start().strip_prefix($prefix)
				.ok_or(MonkeyError::Format { line: l + 1 })?;
			(l, stripped)
		} } }

		let (l, id) = next_stripped!("Monkey ");
		let id = id.strip_suffix(':')
			.ok_or(MonkeyError::Format { line: l + 1 })?
			.parse().map_err(MonkeyError::Id)?;

		let (_, items) = next_stripped!("Starting items: ");
		let items = items.split(", ")
			.enumerate()
			.map(|(offset, item)| item.parse()
				.map_err(|e| MonkeyError::Item { offset, source: e }))
			.collect::<Result<_, _>>()?;

		let (l, operation) = next_stripped!("Operation: new = old ");
		let (operator, operand) = operation.split_once(' ')
			.ok_or(MonkeyError::Format { line: l + 1 })?;
		let operator = match operator {
			"+" => Operator::Add,
			"*" => Operator::Mul,
			invalid => return Err(MonkeyError::Operator(invalid.chars().next())),
		};
		let operand = match operand {
			"old" => Operand::Old,
			value => Operand::Literal(value.parse().map_err(MonkeyError::Operand)?),
		};

		let (_, divisor) = next_stripped!("Test: divisible by ");
		let divisor = divisor.parse().map_err(MonkeyError::Divisor)?;
		let (_, if_divisible) = next_stripped!("If true: throw to monkey ");
		let if_divisible = if_divisible.parse()
			.map_err(|e| MonkeyError::Target { if_divisible: true, source: e })?;
		let (_, if_not_divisible) = next_stripped!("If false: throw to monkey ");
		let if_not_divisible = if_not_divisible.parse()
			.map_err(|e| MonkeyError::Target { if_divisible: false, source: e })?;

		Ok((id, Monkey {
			items,
			operation: Operation { operator, operand },
			divisor,
			if_divisible,
			if_not_divisible,
		}))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeysError {
		Monkey { block: usize, source: MonkeyError },
		Id { block: usize, id: usize },
	}

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		let mut monkeys = vec![];
		for (b, block) in s.split("\n\n").enumerate() {
			if block.trim().is_empty() { continue }
			let (id, monkey) = try_monkey_from_str(block)
				.map_err(|e| MonkeysError::Monkey { block: b + 1, source: e })?;
			if id != monkeys.len() { return Err(MonkeysError::Id { block: b + 1, id }) }
			monkeys.push(monkey);
		}
		Ok(monkeys)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };
	assert_eq!(part1_impl(input_monkeys_from_str(INPUT)), 10605);
	assert_eq!(part1(), 10605);
	assert_eq!(part2_impl(input_monkeys_from_str(INPUT)), 2713310158);
	assert_eq!(part2(), 2713310158);
}
