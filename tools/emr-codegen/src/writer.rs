/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Indentation-aware writer that lays out code the way rustfmt would.

use crate::naming::clean_doc;

pub const HEADER: &str = "// Code generated by emr-codegen. DO NOT EDIT.\n";

const MAX_WIDTH: usize = 100;
const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct RustWriter {
    lines: Vec<String>,
    level: usize,
}

impl RustWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn fits(&self, text: &str) -> bool {
        INDENT.len() * self.level + text.len() <= MAX_WIDTH
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.level), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Writes `header {` and indents.
    pub fn open_block(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.indent();
    }

    pub fn close_block(&mut self) {
        self.dedent();
        self.line("}");
    }

    /// Writes modeled documentation as a single `///` line. Absent docs write nothing.
    pub fn docs(&mut self, doc: Option<&str>) {
        if let Some(doc) = doc.filter(|doc| !doc.is_empty()) {
            self.line(format!("/// {}", clean_doc(doc)));
        }
    }

    /// Writes `#[name(a, b)]`, one item per line when it does not fit.
    pub fn attribute_list(&mut self, name: &str, items: &[&str]) {
        let single = format!("#[{}({})]", name, items.join(", "));
        if self.fits(&single) {
            self.line(single);
            return;
        }
        self.line(format!("#[{}(", name));
        self.indent();
        for item in items {
            self.line(format!("{},", item));
        }
        self.dedent();
        self.line(")]");
    }

    pub fn cfg_attr(&mut self, condition: &str, attribute: &str) {
        let single = format!("#[cfg_attr({}, {})]", condition, attribute);
        if self.fits(&single) {
            self.line(single);
            return;
        }
        self.line("#[cfg_attr(");
        self.indent();
        self.line(format!("{},", condition));
        self.line(attribute);
        self.dedent();
        self.line(")]");
    }

    /// Opens a function body, wrapping the parameters onto their own lines when the signature is
    /// too long.
    pub fn open_fn(&mut self, head: &str, params: &[&str], ret: Option<&str>) {
        let tail = match ret {
            Some(ret) => format!(" -> {} {{", ret),
            None => " {".to_owned(),
        };
        let single = format!("{}({}){}", head, params.join(", "), tail);
        if self.fits(&single) {
            self.line(single);
        } else {
            self.line(format!("{}(", head));
            self.indent();
            for param in params {
                self.line(format!("{},", param));
            }
            self.dedent();
            self.line(format!("){}", tail));
        }
        self.indent();
    }

    /// Writes `head(arg)tail`, moving `arg` onto its own line when it does not fit.
    pub fn wrapped_call(&mut self, head: &str, arg: &str, tail: &str) {
        let single = format!("{}({}){}", head, arg, tail);
        if self.fits(&single) {
            self.line(single);
            return;
        }
        self.line(format!("{}(", head));
        self.indent();
        self.line(format!("{},", arg));
        self.dedent();
        self.line(format!("){}", tail));
    }

    /// Writes a slice literal, one element per line when it does not fit.
    pub fn slice_literal(&mut self, items: &[String]) {
        let single = format!("&[{}]", items.join(", "));
        if self.fits(&single) {
            self.line(single);
            return;
        }
        self.line("&[");
        self.indent();
        for item in items {
            self.line(format!("{},", item));
        }
        self.dedent();
        self.line("]");
    }

    /// The generated file, with trailing blank lines removed.
    pub fn finish(mut self) -> String {
        while self.lines.last().map_or(false, String::is_empty) {
            self.lines.pop();
        }
        let mut out = String::from(HEADER);
        out.push_str(&self.lines.join("\n"));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod test {
    use super::RustWriter;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_indent() {
        let mut writer = RustWriter::new();
        writer.open_block("impl Foo");
        writer.open_fn("pub fn bar", &["&self"], Some("i32"));
        writer.line("1");
        writer.close_block();
        writer.close_block();
        writer.blank();
        assert_eq!(
            writer.finish(),
            "// Code generated by emr-codegen. DO NOT EDIT.\n\
             impl Foo {\n    pub fn bar(&self) -> i32 {\n        1\n    }\n}\n"
        );
    }

    #[test]
    fn long_signatures_wrap() {
        let mut writer = RustWriter::new();
        writer.indent();
        let long = format!("input: impl Into<{}>", "x".repeat(80));
        writer.open_fn("pub fn set", &["mut self", long.as_str()], Some("Self"));
        writer.close_block();
        let text = writer.finish();
        let lines: Vec<_> = text.lines().skip(1).collect();
        assert_eq!(lines[0], "    pub fn set(");
        assert_eq!(lines[1], "        mut self,");
        assert_eq!(lines[3], "    ) -> Self {");
    }

    #[test]
    fn long_attributes_wrap() {
        let mut writer = RustWriter::new();
        writer.attribute_list("derive", &["std::clone::Clone", "std::cmp::PartialEq"]);
        writer.cfg_attr(
            "any(feature = \"serde-serialize\", feature = \"serde-deserialize\")",
            "serde(rename_all = \"PascalCase\")",
        );
        assert_eq!(
            writer.finish(),
            "// Code generated by emr-codegen. DO NOT EDIT.\n\
             #[derive(std::clone::Clone, std::cmp::PartialEq)]\n\
             #[cfg_attr(\n    any(feature = \"serde-serialize\", feature = \"serde-deserialize\"),\n    \
             serde(rename_all = \"PascalCase\")\n)]\n"
        );
    }

    #[test]
    fn long_calls_wrap() {
        let mut writer = RustWriter::new();
        writer.wrapped_call("other => Short::Unknown", "Value(other)", ",");
        writer.indent();
        let head = format!("other => {}::Unknown", "L".repeat(60));
        writer.wrapped_call(&head, "crate::model::Value(other.to_owned())", ",");
        let text = writer.finish();
        let lines: Vec<_> = text.lines().skip(1).collect();
        assert_eq!(lines[0], "other => Short::Unknown(Value(other)),");
        assert_eq!(lines[1], format!("    {}(", head));
        assert_eq!(lines[2], "        crate::model::Value(other.to_owned()),");
        assert_eq!(lines[3], "    ),");
    }
}
