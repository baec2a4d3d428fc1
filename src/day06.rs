// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn input_datastream() -> &'static str {
	include_str!("day06.txt").trim_end()
}


fn part1and2_impl<const N: usize>(datastream: &str) -> usize {
	datastream.as_bytes()
		.windows(N)
		.position(|window| {
			let bits = window.iter().fold(0_u32, |acc, b| acc | 1 << (b - b'a'));
			bits.count_ones() as usize == N
		})
		.unwrap() + N
}

pub(crate) fn part1() -> usize {
	part1and2_impl::<4>(input_datastream())
}

pub(crate) fn part2() -> usize {
	part1and2_impl::<14>(input_datastream())
}


#[cfg(test)]
mod tests {
	use test_case::test_case;

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19; "first")]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23; "second")]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg", 6, 23; "third")]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29; "fourth")]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26; "fifth")]
	fn markers(datastream: &str, start_of_packet: usize, start_of_message: usize) {
		assert_eq!(super::part1and2_impl::<4>(datastream), start_of_packet);
		assert_eq!(super::part1and2_impl::<14>(datastream), start_of_message);
	}

	#[test]
	fn parts() {
		assert_eq!(super::part1(), 7);
		assert_eq!(super::part2(), 19);
	}
}
