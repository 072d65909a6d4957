//! Test scaffolding for a single component.
//!
//! The component source is inspected with the same kind of text heuristics as
//! the rule evaluators, then a Jest + React Native Testing Library file is
//! rendered from what was found. The output is a starting point: it compiles
//! against the usual RNTL setup but asserts only what can be inferred.

use regex::Regex;
use std::fmt::{self, Write};
use std::sync::LazyLock;

pub const FALLBACK_COMPONENT_NAME: &str = "Component";

static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"export\s+default\s+function\s+([A-Z]\w*)",
        r"export\s+default\s+(?:React\.)?(?:memo|forwardRef)\(\s*([A-Z]\w*)",
        r"(?:export\s+)?const\s+([A-Z]\w*)\s*(?::[^=]+)?=\s*(?:\([^)]*\)|\w+)\s*=>",
        r"(?:export\s+)?function\s+([A-Z]\w*)\s*\(",
        r"export\s+default\s+([A-Z]\w*)\s*;?\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid component name pattern"))
    .collect()
});

static DEFAULT_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bexport\s+default\b").expect("Invalid default export pattern"));

static PROPS_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:interface\s+\w*Props\b[^{]*|type\s+\w*Props\s*=\s*)\{")
        .expect("Invalid props start pattern")
});

static PROP_MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:readonly\s+)?(\w+)(\?)?\s*:\s*([^;,]+)").expect("Invalid prop member pattern")
});

static TEST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"testID=\{?\s*["'`]([^"'`]+)["'`]"#).expect("Invalid testID pattern")
});

static ON_PRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bonPress\s*=").expect("Invalid onPress pattern"));

static TEXT_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<TextInput\b").expect("Invalid TextInput pattern"));

/// A member of the component's props type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropMember {
    pub name: String,
    pub optional: bool,
    pub type_text: String,
}

impl PropMember {
    fn is_callback(&self) -> bool {
        self.type_text.contains("=>") || self.name.starts_with("on")
    }

    /// Placeholder value used in `defaultProps`.
    fn mock_value(&self) -> String {
        if self.is_callback() {
            return "jest.fn()".into();
        }
        match self.type_text.trim() {
            "string" => format!("'test-{}'", self.name),
            "number" => "1".into(),
            "boolean" => "true".into(),
            t if t.ends_with("[]") || t.starts_with("Array<") => "[]".into(),
            _ => "{}".into(),
        }
    }
}

/// What the generator could infer about a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: String,
    pub default_export: bool,
    pub props: Vec<PropMember>,
    pub test_ids: Vec<String>,
    pub handles_press: bool,
    pub has_text_input: bool,
}

impl ComponentInfo {
    /// Inspect `code`. An explicit `name` wins over the inferred one.
    pub fn inspect(code: &str, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| infer_name(code))
            .unwrap_or_else(|| FALLBACK_COMPONENT_NAME.to_string());

        let mut test_ids: Vec<String> = Vec::new();
        for caps in TEST_ID.captures_iter(code) {
            let id = caps[1].to_string();
            if !test_ids.contains(&id) {
                test_ids.push(id);
            }
        }

        Self {
            name,
            default_export: DEFAULT_EXPORT.is_match(code),
            props: props_members(code),
            test_ids,
            handles_press: ON_PRESS.is_match(code),
            has_text_input: TEXT_INPUT.is_match(code),
        }
    }

    fn press_prop(&self) -> Option<&PropMember> {
        self.props
            .iter()
            .find(|prop| prop.name == "onPress")
            .or_else(|| {
                self.props
                    .iter()
                    .find(|prop| prop.name.starts_with("on") && prop.name.ends_with("Press"))
            })
    }
}

fn infer_name(code: &str) -> Option<String> {
    NAME_PATTERNS.iter().find_map(|pattern| {
        code.lines()
            .find_map(|line| pattern.captures(line))
            .map(|caps| caps[1].to_string())
    })
}

/// Members of the first `...Props` interface or type literal. Only the flat
/// top level is read; nested object types end the scan.
fn props_members(code: &str) -> Vec<PropMember> {
    let Some(start) = PROPS_START.find(code) else {
        return Vec::new();
    };
    let body = &code[start.end()..];
    let body = &body[..body.find('}').unwrap_or(body.len())];

    body.lines()
        .flat_map(|line| line.split(';'))
        .filter_map(|part| PROP_MEMBER.captures(part))
        .map(|caps| PropMember {
            name: caps[1].to_string(),
            optional: caps.get(2).is_some(),
            type_text: caps[3].trim().to_string(),
        })
        .collect()
}

/// Render a Jest + React Native Testing Library test file for the component
/// in `code`.
pub fn generate_component_test(code: &str, component_name: Option<&str>) -> String {
    render_test(&ComponentInfo::inspect(code, component_name))
}

pub fn render_test(info: &ComponentInfo) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_test(&mut out, info);
    out
}

fn write_test<W: Write>(w: &mut W, info: &ComponentInfo) -> fmt::Result {
    let name = &info.name;

    writeln!(w, "import React from 'react';")?;
    if info.has_text_input {
        writeln!(w, "import {{ TextInput }} from 'react-native';")?;
    }
    writeln!(
        w,
        "import {{ render, screen, fireEvent }} from '@testing-library/react-native';"
    )?;
    if info.default_export {
        writeln!(w, "import {name} from './{name}';")?;
    } else {
        writeln!(w, "import {{ {name} }} from './{name}';")?;
    }
    writeln!(w)?;

    writeln!(w, "describe('{name}', () => {{")?;
    writeln!(w, "  const defaultProps = {{")?;
    for prop in info.props.iter().filter(|prop| !prop.optional || prop.is_callback()) {
        writeln!(w, "    {}: {},", prop.name, prop.mock_value())?;
    }
    writeln!(w, "  }};\n")?;

    writeln!(w, "  beforeEach(() => {{")?;
    writeln!(w, "    jest.clearAllMocks();")?;
    writeln!(w, "  }});\n")?;

    let render_call = format!("render(<{name} {{...defaultProps}} />)");

    writeln!(w, "  it('renders without crashing', () => {{")?;
    writeln!(w, "    {render_call};")?;
    writeln!(w, "  }});\n")?;

    for id in &info.test_ids {
        writeln!(w, "  it('renders {id}', () => {{")?;
        writeln!(w, "    {render_call};")?;
        writeln!(w, "    expect(screen.getByTestId('{id}')).toBeTruthy();")?;
        writeln!(w, "  }});\n")?;
    }

    if info.handles_press {
        let target = match info.test_ids.first() {
            Some(id) => format!("screen.getByTestId('{id}')"),
            None => "screen.getByRole('button')".to_string(),
        };
        writeln!(w, "  it('handles press events', () => {{")?;
        writeln!(w, "    {render_call};")?;
        writeln!(w, "    fireEvent.press({target});")?;
        match info.press_prop() {
            Some(prop) => writeln!(w, "    expect(defaultProps.{}).toHaveBeenCalled();", prop.name)?,
            None => writeln!(w, "    // assert the result of the press here")?,
        }
        writeln!(w, "  }});\n")?;
    }

    if info.has_text_input {
        writeln!(w, "  it('accepts text input', () => {{")?;
        writeln!(w, "    {render_call};")?;
        writeln!(
            w,
            "    fireEvent.changeText(screen.UNSAFE_getByType(TextInput), 'hello');"
        )?;
        writeln!(w, "    expect(screen.getByDisplayValue('hello')).toBeTruthy();")?;
        writeln!(w, "  }});\n")?;
    }

    writeln!(w, "  it('matches snapshot', () => {{")?;
    writeln!(w, "    const tree = {render_call}.toJSON();")?;
    writeln!(w, "    expect(tree).toMatchSnapshot();")?;
    writeln!(w, "  }});")?;
    writeln!(w, "}});")
}
