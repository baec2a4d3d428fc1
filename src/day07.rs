// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
enum Cd<'s> { Root, Up, Into(&'s str) }

#[cfg_attr(test, derive(Debug))]
enum Line<'s> {
	ChangeDir(Cd<'s>),
	List,
	DirEntry,
	FileEntry { size: usize },
}

/// Total size per directory, keyed by absolute path; files count toward
/// every ancestor up to and including the root.
fn dir_totals<'s>(input_lines: impl Iterator<Item = Line<'s>>) -> std::collections::HashMap<String, usize> {
	let mut totals = std::collections::HashMap::from([("/".to_owned(), 0)]);
	let mut path = vec![];

	fn absolute(path: &[&str]) -> String {
		if path.is_empty() { "/".to_owned() } else { format!("/{}", path.join("/")) }
	}

	for line in input_lines {
		match line {
			Line::ChangeDir(Cd::Root) => path.clear(),
			Line::ChangeDir(Cd::Up) => { path.pop(); }
			Line::ChangeDir(Cd::Into(name)) => path.push(name),
			Line::List | Line::DirEntry => (),
			Line::FileEntry { size } => for depth in 0..=path.len() {
				*totals.entry(absolute(&path[..depth])).or_insert(0) += size;
			}
		}
	}

	totals
}


fn input_lines_from_str(s: &str) -> impl Iterator<Item = Line<'_>> + '_ {
	parsing::lines_from_str(s).map(|r| r.unwrap())
}

fn input_lines() -> impl Iterator<Item = Line<'static>> {
	input_lines_from_str(include_str!("day07.txt"))
}


fn part1_impl<'s>(input_lines: impl Iterator<Item = Line<'s>>) -> usize {
	dir_totals(input_lines).into_values()
		.filter(|&total| total <= 100_000)
		.sum()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_lines())
}


fn part2_impl<'s>(input_lines: impl Iterator<Item = Line<'s>>) -> usize {
	let totals = dir_totals(input_lines);
	let unused = 70_000_000 - totals["/"];
	if unused >= 30_000_000 { return 0 }
	let needed = 30_000_000 - unused;
	totals.into_values()
		.filter(|&total| total >= needed)
		.min().unwrap()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_lines())
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Cd, Line};

	fn invalid_name_column(name: &str) -> Option<usize> {
		name.bytes()
			.position(|b| !b.is_ascii_alphanumeric() && b != b'.')
			.or_else(|| name.is_empty().then_some(0))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LineError {
		Format,
		Size(ParseIntError),
		InvalidName { column: usize },
	}

	impl<'s> TryFrom<&'s str> for Line<'s> {
		type Error = LineError;
		fn try_from(line: &'s str) -> Result<Self, Self::Error> {
			if let Some(command) = line.strip_prefix("$ ") {
				return if command == "ls" { Ok(Line::List) }
				else if let Some(dir) = command.strip_prefix("cd ") {
					Ok(Line::ChangeDir(match dir {
						"/" => Cd::Root,
						".." => Cd::Up,
						name => match invalid_name_column(name) {
							None => Cd::Into(name),
							Some(c) => return Err(LineError::InvalidName {
								column: line.len() - name.len() + c + 1 }),
						}
					}))
				}
				else { Err(LineError::Format) };
			}

			let (prefix, name) = line.split_once(' ').ok_or(LineError::Format)?;
			if let Some(c) = invalid_name_column(name) {
				return Err(LineError::InvalidName { column: line.len() - name.len() + c + 1 })
			}
			if prefix == "dir" { Ok(Line::DirEntry) }
			else { Ok(Line::FileEntry { size: prefix.parse().map_err(LineError::Size)? }) }
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LinesError { line: usize, source: LineError }

	pub(super) fn lines_from_str(s: &str)
	-> impl Iterator<Item = Result<Line<'_>, LinesError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| LinesError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	assert_eq!(part1_impl(input_lines_from_str(INPUT)), 95_437);
	assert_eq!(part1(), 95_437);
	assert_eq!(part2_impl(input_lines_from_str(INPUT)), 24_933_642);
	assert_eq!(part2(), 24_933_642);
}
