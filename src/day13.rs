// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, PartialEq, Eq)]
enum Packet {
	Int(u64),
	List(Vec<Packet>),
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Packet {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		use {std::slice::from_ref, Packet::*};
		match (self, other) {
			(Int(left), Int(right)) => left.cmp(right),
			(List(left), List(right)) => left.cmp(right),
			(Int(_), List(right)) => from_ref(self).cmp(&right[..]),
			(List(left), Int(_)) => left[..].cmp(from_ref(other)),
		}
	}
}


fn optional_input_packets_from_str(s: &str) -> impl Iterator<Item = Option<Packet>> + '_ {
	parsing::optional_packets_from_str(s).map(|r| r.unwrap())
}

fn optional_input_packets() -> impl Iterator<Item = Option<Packet>> + 'static {
	optional_input_packets_from_str(include_str!("day13.txt"))
}


fn part1_impl(input_packets: impl Iterator<Item = Option<Packet>>) -> usize {
	use itertools::Itertools as _;
	input_packets
		.flatten()
		.tuples()
		.enumerate()
		.filter(|(_, (left, right))| left < right)
		.map(|(i, _)| i + 1)
		.sum()
}

pub(crate) fn part1() -> usize {
	part1_impl(optional_input_packets())
}


fn part2_impl(input_packets: impl Iterator<Item = Option<Packet>>) -> usize {
	use {itertools::Itertools as _, Packet::*};
	let dividers = [
		List(vec![List(vec![Int(2)])]),
		List(vec![List(vec![Int(6)])]),
	];
	input_packets
		.flatten()
		.chain(dividers.clone())
		.sorted()
		.positions(|packet| dividers.contains(&packet))
		.map(|i| i + 1)
		.product()
}

pub(crate) fn part2() -> usize {
	part2_impl(optional_input_packets())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Packet;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PacketError {
		NotAList,
		Int { column: usize, source: ParseIntError },
		InvalidByte { column: usize, found: Option<u8> },
		TrailingBytes { column: usize },
	}

	fn try_packet_from_bytes(s: &str, c: &mut usize) -> Result<Packet, PacketError> {
		let bytes = s.as_bytes();
		match bytes.get(*c) {
			Some(b'[') => {
				*c += 1;
				let mut list = vec![];
				if bytes.get(*c) == Some(&b']') {
					*c += 1;
					return Ok(Packet::List(list))
				}
				loop {
					list.push(try_packet_from_bytes(s, c)?);
					match bytes.get(*c) {
						Some(b',') => *c += 1,
						Some(b']') => {
							*c += 1;
							return Ok(Packet::List(list))
						}
						found => return Err(PacketError::InvalidByte {
							column: *c + 1, found: found.copied() }),
					}
				}
			}
			Some(b) if b.is_ascii_digit() => {
				let start = *c;
				while bytes.get(*c).map_or(false, u8::is_ascii_digit) { *c += 1 }
				let int = s[start..*c].parse()
					.map_err(|e| PacketError::Int { column: start + 1, source: e })?;
				Ok(Packet::Int(int))
			}
			found => Err(PacketError::InvalidByte { column: *c + 1, found: found.copied() }),
		}
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if !s.starts_with('[') { return Err(PacketError::NotAList) }
			let mut c = 0;
			let packet = try_packet_from_bytes(s, &mut c)?;
			if c < s.len() { return Err(PacketError::TrailingBytes { column: c + 1 }) }
			Ok(packet)
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct PacketsError { line: usize, source: PacketError }

	pub(super) fn optional_packets_from_str(s: &str)
	-> impl Iterator<Item = Result<Option<Packet>, PacketsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| (!line.is_empty())
				.then(|| line.parse()
					.map_err(|e| PacketsError { line: l + 1, source: e }))
				.transpose())
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };
	assert!("[137]".parse::<Packet>().is_ok());
	assert!("137".parse::<Packet>().is_err());
	assert_eq!(part1_impl(optional_input_packets_from_str(INPUT)), 13);
	assert_eq!(part1(), 13);
	assert_eq!(part2_impl(optional_input_packets_from_str(INPUT)), 140);
	assert_eq!(part2(), 140);
}
