// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Label([u8; 2]);

const START: Label = Label([b'A'; 2]);

struct Valve {
	label: Label,
	flow_rate: usize,
	/// Indices into the owning [`Network`]’s valves.
	tunnels: Vec<usize>,
}

/// Valves in label order, fixed at parse time; tunnel endpoints are resolved
/// to indices into that order.
struct Network {
	valves: Vec<Valve>,
}

const UNREACHABLE: usize = usize::MAX;

impl Network {
	fn index_of(&self, label: Label) -> Option<usize> {
		self.valves.binary_search_by_key(&label, |valve| valve.label).ok()
	}

	/// All-pairs shortest hop counts between valves, by iterative relaxation
	/// through every intermediate valve; `UNREACHABLE` where no path exists.
	fn distances(&self) -> Vec<Vec<usize>> {
		let n = self.valves.len();
		let mut distances = vec![vec![UNREACHABLE; n]; n];
		for (i, valve) in self.valves.iter().enumerate() {
			for &j in &valve.tunnels { distances[i][j] = 1 }
			distances[i][i] = 0;
		}

		for k in 0..n {
			for i in 0..n {
				if distances[i][k] == UNREACHABLE { continue }
				for j in 0..n {
					if distances[k][j] == UNREACHABLE { continue }
					let through_k = distances[i][k] + distances[k][j];
					if through_k < distances[i][j] { distances[i][j] = through_k }
				}
			}
		}

		distances
	}
}


struct Search<'n> {
	network: &'n Network,
	distances: Vec<Vec<usize>>,
	/// Indices of valves with nonzero flow rate; position in this list is
	/// the valve’s bit in the visited-set masks.
	flow_valves: Vec<usize>,
	/// Best total release per visited set of flow valves. The empty set is
	/// implicit (zero release, never stored).
	best_released: std::collections::HashMap<u64, usize>,
}

impl<'n> Search<'n> {
	fn over(network: &'n Network) -> Self {
		let distances = network.distances();
		let flow_valves = (0..network.valves.len())
			.filter(|&i| network.valves[i].flow_rate > 0)
			.collect::<Vec<_>>();
		assert!(flow_valves.len() <= u64::BITS as usize);
		Self { network, distances, flow_valves, best_released: Default::default() }
	}

	/// Recursively tries every still-closed flow valve whose opening —
	/// costing its distance from `from` plus one minute to open — fits in
	/// `time_left`, recording the best total release per visited set.
	fn visit(&mut self, from: usize, time_left: usize, visited: u64, released: usize) {
		for bit in 0..self.flow_valves.len() {
			if visited & 1 << bit != 0 { continue }
			let valve = self.flow_valves[bit];
			let distance = self.distances[from][valve];
			if distance == UNREACHABLE { continue }
			let cost = distance + 1;
			if cost > time_left { continue }

			let time_left = time_left - cost;
			let released = released + self.network.valves[valve].flow_rate * time_left;
			let visited = visited | 1 << bit;
			let best = self.best_released.entry(visited).or_insert(0);
			if released > *best { *best = released }

			self.visit(valve, time_left, visited, released);
		}
	}
}

/// Best total release per visited set of flow valves, over all orders in
/// which they can be opened from `start` within `time_budget` minutes.
fn best_released_per_visited(network: &Network, time_budget: usize)
-> std::collections::HashMap<u64, usize> {
	let start = network.index_of(START).unwrap();
	let mut search = Search::over(network);
	search.visit(start, time_budget, 0, 0);
	search.best_released
}


fn input_network_from_str(s: &str) -> Network {
	s.parse().unwrap()
}

fn input_network() -> Network {
	input_network_from_str(include_str!("day16.txt"))
}


fn part1_impl(input_network: Network) -> usize {
	best_released_per_visited(&input_network, 30).into_values().max().unwrap_or(0)
}

pub(crate) fn part1() -> usize {
	part1_impl(input_network())
}


fn part2_impl(input_network: Network) -> usize {
	let best_released = best_released_per_visited(&input_network, 26);
	best_released.iter()
		.map(|(&visited, &released)| released + best_released.iter()
			.filter(|&(&other, _)| visited & other == 0)
			.map(|(_, &other_released)| other_released)
			.max().unwrap_or(0))
		.max().unwrap_or(0)
}

pub(crate) fn part2() -> usize {
	part2_impl(input_network())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Label, Valve, Network};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LabelError { column: usize, found: Option<u8> }

	fn try_label_from_str(s: &str) -> Result<(Label, &str), LabelError> {
		let mut bytes = s.bytes();
		let mut letter = |column| match bytes.next() {
			Some(b) if b.is_ascii_uppercase() => Ok(b),
			found => Err(LabelError { column, found }),
		};
		let label = Label([letter(1)?, letter(2)?]);
		Ok((label, &s[2..]))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ValveError {
		Format { column: usize },
		Label(LabelError),
		FlowRate(ParseIntError),
		Tunnel { offset: usize, source: LabelError },
	}

	fn try_valve_from_str(s: &str) -> Result<(Label, usize, Vec<Label>), ValveError> {
		use ValveError as E;
		let s0_len = s.len();
		macro_rules! c { ( $s:expr ) => { s0_len - $s.len() } }

		let s = s.strip_prefix("Valve ")
			.ok_or(E::Format { column: 1 })?;
		let (label, s) = try_label_from_str(s).map_err(|e|
			E::Label(LabelError { column: c!(s) + e.column, ..e }))?;
		let s = s.strip_prefix(" has flow rate=")
			.ok_or(E::Format { column: c!(s) + 1 })?;
		let (flow_rate, s) = s.split_once(';')
			.ok_or(E::Format { column: c!(s) + 1 })?;
		let flow_rate = flow_rate.parse().map_err(E::FlowRate)?;

		let tunnels = if let Some(s) = s.strip_prefix(" tunnels lead to valves ") {
			s.split(", ")
				.enumerate()
				.map(|(offset, tunnel)| match try_label_from_str(tunnel) {
					Ok((label, "")) => Ok(label),
					Ok((_, rest)) => Err(E::Tunnel { offset, source: LabelError {
						column: tunnel.len() - rest.len() + 1,
						found: rest.bytes().next() } }),
					Err(e) => Err(E::Tunnel { offset, source: e }),
				})
				.collect::<Result<_, _>>()?
		} else {
			let s = s.strip_prefix(" tunnel leads to valve ")
				.ok_or(E::Format { column: c!(s) + 1 })?;
			let (tunnel, rest) = try_label_from_str(s)
				.map_err(|e| E::Tunnel { offset: 0, source: e })?;
			if !rest.is_empty() { return Err(E::Format { column: c!(rest) + 1 }) }
			vec![tunnel]
		};

		Ok((label, flow_rate, tunnels))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NetworkError {
		Valve { line: usize, source: ValveError },
		DuplicateLabel { line: usize, label: Label },
		UnknownTunnel { valve: Label, offset: usize, tunnel: Label },
	}

	impl FromStr for Network {
		type Err = NetworkError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::Itertools as _;

			// (label, flow rate, tunnel labels, source line)
			let parsed = s.lines()
				.enumerate()
				.map(|(l, line)| try_valve_from_str(line)
					.map(|(label, flow_rate, tunnels)| (label, flow_rate, tunnels, l))
					.map_err(|e| NetworkError::Valve { line: l + 1, source: e }))
				.collect::<Result<Vec<_>, _>>()?
				.into_iter()
				.sorted_by_key(|&(label, ..)| label)
				.collect::<Vec<_>>();

			for window in parsed.windows(2) {
				if window[0].0 == window[1].0 {
					return Err(NetworkError::DuplicateLabel {
						line: window[1].3 + 1, label: window[1].0 })
				}
			}

			let index_of = |label: &Label| parsed.binary_search_by_key(label, |&(l, ..)| l).ok();
			let valves = parsed.iter()
				.map(|(label, flow_rate, tunnels, _)| Ok(Valve {
					label: *label,
					flow_rate: *flow_rate,
					tunnels: tunnels.iter()
						.enumerate()
						.map(|(offset, tunnel)| index_of(tunnel)
							.ok_or(NetworkError::UnknownTunnel {
								valve: *label, offset, tunnel: *tunnel }))
						.collect::<Result<_, _>>()?,
				}))
				.collect::<Result<_, NetworkError>>()?;

			Ok(Network { valves })
		}
	}
}


impl std::fmt::Debug for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
		Valve BB has flow rate=13; tunnels lead to valves CC, AA
		Valve CC has flow rate=2; tunnels lead to valves DD, BB
		Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
		Valve EE has flow rate=3; tunnels lead to valves FF, DD
		Valve FF has flow rate=0; tunnels lead to valves EE, GG
		Valve GG has flow rate=0; tunnels lead to valves FF, HH
		Valve HH has flow rate=22; tunnel leads to valve GG
		Valve II has flow rate=0; tunnels lead to valves AA, JJ
		Valve JJ has flow rate=21; tunnel leads to valve II
	" };

	/// Two separate components; no flow valve is reachable from `AA`.
	const SPLIT_INPUT: &str = indoc::indoc! { "
		Valve AA has flow rate=0; tunnel leads to valve BB
		Valve BB has flow rate=0; tunnel leads to valve AA
		Valve CC has flow rate=10; tunnel leads to valve DD
		Valve DD has flow rate=0; tunnel leads to valve CC
	" };

	fn label(s: &str) -> Label {
		Label([s.as_bytes()[0], s.as_bytes()[1]])
	}

	#[test]
	fn distances() {
		let network = input_network_from_str(INPUT);
		let distances = network.distances();
		let index = |s| network.index_of(label(s)).unwrap();

		// Distance-one tunnels, both ways
		assert_eq!(distances[index("AA")][index("BB")], 1);
		assert_eq!(distances[index("BB")][index("AA")], 1);
		// Transit through zero-flow valves
		assert_eq!(distances[index("AA")][index("HH")], 5);
		assert_eq!(distances[index("JJ")][index("HH")], 7);
		assert_eq!(distances[index("EE")][index("JJ")], 4);

		for (i, row) in distances.iter().enumerate() {
			assert_eq!(row[i], 0);
			for (j, &distance) in row.iter().enumerate() {
				assert_eq!(distance, distances[j][i]);
				for k in 0..distances.len() {
					// Triangle inequality
					assert!(distance <= distances[i][k].saturating_add(distances[k][j]));
				}
			}
		}
	}

	#[test]
	fn unreachable_valves() {
		let network = input_network_from_str(SPLIT_INPUT);
		let distances = network.distances();
		let index = |s| network.index_of(label(s)).unwrap();
		assert_eq!(distances[index("AA")][index("CC")], UNREACHABLE);
		assert_eq!(distances[index("AA")][index("BB")], 1);

		assert!(best_released_per_visited(&network, 30).is_empty());
		assert_eq!(super::part1_impl(input_network_from_str(SPLIT_INPUT)), 0);
		assert_eq!(super::part2_impl(input_network_from_str(SPLIT_INPUT)), 0);
	}

	#[test]
	fn short_budgets() {
		// Opening any flow valve takes at least two minutes
		assert!(best_released_per_visited(&input_network_from_str(INPUT), 1).is_empty());

		let mut prev = 0;
		for time_budget in 0..=30 {
			let network = input_network_from_str(INPUT);
			let best = best_released_per_visited(&network, time_budget)
				.into_values().max().unwrap_or(0);
			assert!(best >= prev);
			prev = best;
		}
		assert_eq!(prev, 1651);
	}

	#[test]
	fn part1() {
		assert_eq!(super::part1(), 1651);
	}

	#[test]
	fn part2_impl() {
		assert_eq!(super::part2_impl(input_network_from_str(INPUT)), 1707);
	}

	#[test]
	fn part2() {
		assert_eq!(super::part2(), 1707);
	}
}
