//! ui::trail_view
//!
//! Pure functions that render trails, walk reports and path lists as text.
//!
//! # Example Output
//!
//! ```text
//! a (difficulty 2, length 3)
//! split
//!   top:
//!     b (difficulty 5, length 1)
//!   bottom:
//!     (empty)
//! c (difficulty 1, length 4)
//! ```

use crate::core::enumerate::TrailPath;
use crate::core::trail::{Trail, TrailStore};
use crate::core::traversal::WalkReport;
use crate::core::types::{Branch, Mountain};

const INDENT: &str = "  ";

enum Pending<'a> {
    Trail {
        trail: &'a Trail,
        depth: usize,
        is_branch: bool,
    },
    Label(&'static str, usize),
}

/// Render a trail as an indented tree.
///
/// Follow paths are printed after the split at the split's own depth.
pub fn render_trail(trail: &Trail) -> String {
    let mut lines = Vec::new();
    let mut stack = vec![Pending::Trail {
        trail,
        depth: 0,
        is_branch: false,
    }];

    while let Some(item) = stack.pop() {
        let (trail, depth, is_branch) = match item {
            Pending::Label(label, depth) => {
                lines.push(format!("{}{}", INDENT.repeat(depth), label));
                continue;
            }
            Pending::Trail {
                trail,
                depth,
                is_branch,
            } => (trail, depth, is_branch),
        };

        if is_branch && trail.is_empty() {
            lines.push(format!("{}(empty)", INDENT.repeat(depth)));
            continue;
        }

        let mut cursor = trail;
        loop {
            match cursor.store() {
                TrailStore::Series(series) => {
                    lines.push(format!("{}{}", INDENT.repeat(depth), series.mountain));
                    cursor = &series.following;
                }
                TrailStore::Split(split) => {
                    lines.push(format!("{}split", INDENT.repeat(depth)));
                    stack.push(Pending::Trail {
                        trail: &split.path_follow,
                        depth,
                        is_branch: false,
                    });
                    stack.push(Pending::Trail {
                        trail: &split.path_bottom,
                        depth: depth + 2,
                        is_branch: true,
                    });
                    stack.push(Pending::Label("bottom:", depth + 1));
                    stack.push(Pending::Trail {
                        trail: &split.path_top,
                        depth: depth + 2,
                        is_branch: true,
                    });
                    stack.push(Pending::Label("top:", depth + 1));
                    break;
                }
                TrailStore::Empty => break,
            }
        }
    }

    lines.join("\n")
}

fn render_mountains(mountains: &[Mountain]) -> String {
    if mountains.is_empty() {
        return "(no mountains)".to_string();
    }
    mountains
        .iter()
        .map(|m| m.name().as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn render_choices(choices: &[Branch]) -> String {
    let names: Vec<_> = choices.iter().map(Branch::to_string).collect();
    format!("[{}]", names.join(", "))
}

/// Render a walk report: one numbered line per mountain, then the choices.
pub fn render_walk(report: &WalkReport) -> String {
    let mut lines: Vec<String> = report
        .mountains
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>3}. {}", i + 1, m))
        .collect();

    if lines.is_empty() {
        lines.push("(no mountains)".to_string());
    }
    lines.push(format!("choices: {}", render_choices(&report.choices)));
    lines.join("\n")
}

/// Render a list of paths, one per line.
pub fn render_paths(paths: &[TrailPath]) -> String {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            format!(
                "{:>3}. {} {}",
                i + 1,
                render_choices(&path.choices),
                render_mountains(&path.mountains)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(name: &str) -> Mountain {
        Mountain::new(name, 1, 2).unwrap()
    }

    fn single(name: &str) -> Trail {
        Trail::series(m(name), Trail::empty())
    }

    #[test]
    fn render_empty_trail() {
        assert_eq!(render_trail(&Trail::empty()), "");
    }

    #[test]
    fn render_split_tree() {
        let trail = Trail::series(
            m("a"),
            Trail::split(single("b"), Trail::empty(), single("c")),
        );

        let expected = "\
a (difficulty 1, length 2)
split
  top:
    b (difficulty 1, length 2)
  bottom:
    (empty)
c (difficulty 1, length 2)";
        assert_eq!(render_trail(&trail), expected);
    }

    #[test]
    fn render_nested_split() {
        let inner = Trail::split(single("a"), single("b"), Trail::empty());
        let trail = Trail::split(inner, Trail::empty(), Trail::empty());

        let expected = "\
split
  top:
    split
      top:
        a (difficulty 1, length 2)
      bottom:
        b (difficulty 1, length 2)
  bottom:
    (empty)";
        assert_eq!(render_trail(&trail), expected);
    }

    #[test]
    fn render_walk_lists_mountains_and_choices() {
        let report = WalkReport {
            mountains: vec![m("a"), m("c")],
            choices: vec![Branch::Top],
            max_depth: 1,
        };

        let expected = "  1. a (difficulty 1, length 2)\n  2. c (difficulty 1, length 2)\nchoices: [top]";
        assert_eq!(render_walk(&report), expected);
    }

    #[test]
    fn render_empty_walk() {
        assert_eq!(
            render_walk(&WalkReport::default()),
            "(no mountains)\nchoices: []"
        );
    }

    #[test]
    fn render_paths_one_per_line() {
        let paths = vec![
            TrailPath {
                mountains: vec![m("a"), m("c")],
                choices: vec![Branch::Top],
            },
            TrailPath {
                mountains: vec![],
                choices: vec![Branch::Bottom, Branch::Top],
            },
        ];

        let expected = "  1. [top] a -> c\n  2. [bottom, top] (no mountains)";
        assert_eq!(render_paths(&paths), expected);
    }
}
