//! Day 7: directory sizes reconstructed from a terminal session
//!
//! The filesystem is an arena: nodes live in a flat table and refer to each
//! other by index, so directories need no owning back-references.

use crate::util;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{PuzzleSolver, RegisterSolver};

const DISK_SPACE: u64 = 70_000_000;
const UPDATE_SPACE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

#[derive(PuzzleSolver, RegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct Solver;

#[derive(Debug)]
enum Node {
    Dir {
        name: String,
        parent: usize,
        children: Vec<usize>,
    },
    File {
        name: String,
        size: u64,
    },
}

impl Node {
    fn name(&self) -> &str {
        match self {
            Node::Dir { name, .. } => name,
            Node::File { name, .. } => name,
        }
    }
}

/// Arena-indexed directory tree. Node 0 is the root directory.
#[derive(Debug)]
pub struct Filesystem {
    nodes: Vec<Node>,
}

impl Filesystem {
    const ROOT: usize = 0;

    fn new() -> Self {
        Self {
            nodes: vec![Node::Dir {
                name: "/".to_string(),
                parent: Self::ROOT,
                children: Vec::new(),
            }],
        }
    }

    /// Replay a terminal session (`$ cd`, `$ ls` and their output) into a tree.
    fn from_session(lines: impl Iterator<Item = impl AsRef<str>>) -> Result<Self, ParseError> {
        let mut fs = Self::new();
        let mut cwd = Self::ROOT;

        for line in lines {
            let line = line.as_ref();
            if let Some(target) = line.strip_prefix("$ cd ") {
                cwd = match target {
                    "/" => Self::ROOT,
                    ".." => fs.parent_of(cwd),
                    name => fs.enter(cwd, name)?,
                };
            } else if line == "$ ls" {
                continue;
            } else if let Some(name) = line.strip_prefix("dir ") {
                fs.push_child(
                    cwd,
                    Node::Dir {
                        name: name.to_string(),
                        parent: cwd,
                        children: Vec::new(),
                    },
                );
            } else {
                let (size, name) = line.split_once(' ').ok_or_else(|| {
                    ParseError::InvalidFormat(format!("unrecognized session line: {:?}", line))
                })?;
                let size = size.parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("bad file size in {:?}", line))
                })?;
                fs.push_child(
                    cwd,
                    Node::File {
                        name: name.to_string(),
                        size,
                    },
                );
            }
        }
        Ok(fs)
    }

    fn parent_of(&self, index: usize) -> usize {
        match &self.nodes[index] {
            Node::Dir { parent, .. } => *parent,
            Node::File { .. } => Self::ROOT,
        }
    }

    /// Resolve `cd name` from `from`; the target must be a known directory.
    fn enter(&self, from: usize, name: &str) -> Result<usize, ParseError> {
        let child = self
            .children_of(from)
            .iter()
            .copied()
            .find(|&c| self.nodes[c].name() == name);
        match child {
            Some(c) if matches!(self.nodes[c], Node::Dir { .. }) => Ok(c),
            Some(_) => Err(ParseError::InvalidFormat(format!(
                "not a directory: {}",
                name
            ))),
            None => Err(ParseError::MissingData(format!(
                "cd into unlisted directory: {}",
                name
            ))),
        }
    }

    fn children_of(&self, index: usize) -> &[usize] {
        match &self.nodes[index] {
            Node::Dir { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    fn push_child(&mut self, dir: usize, node: Node) {
        let index = self.nodes.len();
        self.nodes.push(node);
        if let Node::Dir { children, .. } = &mut self.nodes[dir] {
            children.push(index);
        }
    }

    fn size_of(&self, index: usize) -> u64 {
        match &self.nodes[index] {
            Node::File { size, .. } => *size,
            Node::Dir { children, .. } => {
                children.iter().map(|&c| self.size_of(c)).sum()
            }
        }
    }

    /// Total size of every directory in the tree, root included.
    fn directory_sizes(&self) -> Vec<u64> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches!(node, Node::Dir { .. }))
            .map(|(index, _)| self.size_of(index))
            .collect()
    }

    fn total_size(&self) -> u64 {
        self.size_of(Self::ROOT)
    }
}

impl PuzzleParser for Solver {
    type Shared<'a> = Filesystem;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        Filesystem::from_session(util::lines(input))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let small_total: u64 = shared
            .directory_sizes()
            .into_iter()
            .filter(|&size| size < SMALL_DIR_LIMIT)
            .sum();
        Ok(small_total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let available = DISK_SPACE.saturating_sub(shared.total_size());
        let needed = UPDATE_SPACE.saturating_sub(available);
        let candidate = shared
            .directory_sizes()
            .into_iter()
            .filter(|&size| size >= needed)
            .min()
            .ok_or_else(|| SolveError::failed(NoCandidateDirectory))?;
        Ok(candidate.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no directory is large enough to free the required space")]
struct NoCandidateDirectory;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
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
7214296 k";

    #[test]
    fn part1_sums_small_directories() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "95437");
    }

    #[test]
    fn part2_picks_smallest_sufficient_directory() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "24933642"
        );
    }

    #[test]
    fn cd_into_unknown_directory_fails() {
        assert!(Solver::parse("$ cd /\n$ cd nope").is_err());
    }

    #[test]
    fn cd_into_file_fails() {
        assert!(Solver::parse("$ cd /\n$ ls\n100 data\n$ cd data").is_err());
    }
}
