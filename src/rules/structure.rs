//! Line- and brace-based structural heuristics shared by several categories.
//!
//! These scans are approximate: braces are counted without regard to strings or
//! comments, and only one block is tracked at a time, so a nested function is
//! absorbed into the enclosing one.

use regex::Regex;

/// A brace-delimited block found by [`brace_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// First captured name in the start pattern, if any.
    pub name: Option<String>,
    /// 1-based line of the start pattern.
    pub start_line: usize,
    /// Lines from the start line to the closing brace, inclusive.
    pub line_count: usize,
}

/// Find blocks whose first line matches `start`, measuring each one by
/// counting `{` and `}` until the depth returns to zero.
///
/// While a block is open, further start matches are ignored. A block that
/// never closes is not reported.
pub fn brace_blocks(content: &str, start: &Regex) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<(usize, Option<String>)> = None;
    let mut depth: i64 = 0;
    let mut seen_open_brace = false;

    for (index, line) in content.lines().enumerate() {
        if open.is_none() {
            if let Some(caps) = start.captures(line) {
                let name = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .next()
                    .map(|m| m.as_str().to_string());
                open = Some((index, name));
                depth = 0;
                seen_open_brace = false;
            }
        }

        if open.is_none() {
            continue;
        }

        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        if opens > 0 {
            seen_open_brace = true;
        }
        depth += opens - closes;

        if seen_open_brace && depth <= 0 {
            if let Some((start_index, name)) = open.take() {
                blocks.push(Block {
                    name,
                    start_line: start_index + 1,
                    line_count: index - start_index + 1,
                });
            }
        }
    }

    blocks
}

/// Module sources imported more than once, in order of first import.
///
/// `import type` statements are ignored because TypeScript allows them next to
/// a value import of the same module.
pub fn duplicate_imports(content: &str, import: &Regex) -> Vec<(String, usize)> {
    let mut seen: Vec<(String, usize)> = Vec::new();

    for caps in import.captures_iter(content) {
        let statement = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        if statement.trim_start().starts_with("import type") {
            continue;
        }
        let Some(source) = caps.get(1).map(|m| m.as_str().to_string()) else {
            continue;
        };
        match seen.iter_mut().find(|(s, _)| *s == source) {
            Some((_, count)) => *count += 1,
            None => seen.push((source, 1)),
        }
    }

    seen.retain(|(_, count)| *count > 1);
    seen
}

/// Count member lines in a props type body: non-blank, non-comment lines that
/// declare something with `:`.
pub fn count_members(body: &str) -> usize {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with('*'))
        .filter(|line| line.contains(':'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_start() -> Regex {
        Regex::new(r"function\s+(\w+)\s*\(").unwrap()
    }

    #[test]
    fn test_single_block() {
        let content = "function foo() {\n  a();\n  b();\n}\n";
        let blocks = brace_blocks(content, &function_start());
        assert_eq!(
            blocks,
            vec![Block {
                name: Some("foo".to_string()),
                start_line: 1,
                line_count: 4,
            }]
        );
    }

    #[test]
    fn test_brace_on_later_line() {
        let content = "function foo(a,\n  b)\n{\n  x();\n}\n";
        let blocks = brace_blocks(content, &function_start());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].line_count, 5);
    }

    #[test]
    fn test_nested_function_is_absorbed() {
        let content = "function outer() {\n  function inner() {\n    x();\n  }\n}\n";
        let blocks = brace_blocks(content, &function_start());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name.as_deref(), Some("outer"));
        assert_eq!(blocks[0].line_count, 5);
    }

    #[test]
    fn test_unclosed_block_is_dropped() {
        let content = "function foo() {\n  x();\n";
        assert!(brace_blocks(content, &function_start()).is_empty());
    }

    #[test]
    fn test_sequential_blocks() {
        let content = "function a() {\n}\nfunction b() {\n  x();\n}\n";
        let blocks = brace_blocks(content, &function_start());
        let names: Vec<_> = blocks.iter().map(|b| b.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(blocks[1].start_line, 3);
    }

    #[test]
    fn test_duplicate_imports() {
        let import = Regex::new(r#"(?m)^\s*import\s[^;]*?from\s+['"]([^'"]+)['"]"#).unwrap();
        let content = "import React from 'react';\n\
                       import { View } from 'react-native';\n\
                       import { useState } from 'react';\n\
                       import type { Props } from 'react-native';\n";
        assert_eq!(
            duplicate_imports(content, &import),
            vec![("react".to_string(), 2)]
        );
    }

    #[test]
    fn test_count_members() {
        let body = "\n  title: string;\n  // comment: nope\n  onPress?: () => void;\n\n";
        assert_eq!(count_members(body), 2);
    }
}
