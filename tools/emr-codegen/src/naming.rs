/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions from Smithy names to Rust identifiers.

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Converts a PascalCase or SCREAMING_CASE name to snake_case.
///
/// Runs of capitals are treated as one word, so `EC2InstanceIds` becomes `ec2_instance_ids` and
/// `SizeInGB` becomes `size_in_gb`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
                if prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn to_pascal_case(snake: &str) -> String {
    snake
        .split(|c| c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Name of the enum variant for a wire token: `ON_DEMAND` becomes `OnDemand`.
pub fn variant_name(value: &str) -> String {
    let name = to_pascal_case(&to_snake_case(value));
    match name.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("Value{}", name),
        _ => name,
    }
}

/// The name serde derives from a snake_case field under `rename_all = "PascalCase"`.
pub fn serde_pascal_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = true;
    for c in field.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Field or function name for a member, escaping reserved words.
pub fn field_name(member: &str) -> String {
    let snake = to_snake_case(member);
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Normalizes modeled documentation to a single line of HTML.
///
/// Plain text is wrapped in a paragraph, empty paragraphs are dropped and runs of whitespace
/// collapse to one space.
pub fn clean_doc(doc: &str) -> String {
    let mut doc = if doc.starts_with('<') {
        doc.to_owned()
    } else {
        format!("<p>{}</p>", doc)
    };
    doc = doc.replace("</note></p>", "</note>");
    let doc = remove_empty_paragraphs(&doc);
    doc.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remove_empty_paragraphs(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut rest = doc;
    while let Some(start) = rest.find("<p>") {
        let after_open = &rest[start + 3..];
        let blank = after_open.len() - after_open.trim_start().len();
        if after_open[blank..].starts_with("</p>") {
            out.push_str(&rest[..start]);
            rest = &after_open[blank + 4..];
        } else {
            out.push_str(&rest[..start + 3]);
            rest = after_open;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod test {
    use super::{clean_doc, field_name, serde_pascal_case, to_snake_case, variant_name};

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("ClusterId"), "cluster_id");
        assert_eq!(to_snake_case("EC2InstanceIdsToTerminate"), "ec2_instance_ids_to_terminate");
        assert_eq!(to_snake_case("ADDomainJoinUser"), "ad_domain_join_user");
        assert_eq!(to_snake_case("SizeInGB"), "size_in_gb");
        assert_eq!(to_snake_case("Ec2KeyName"), "ec2_key_name");
        assert_eq!(to_snake_case("ON_DEMAND"), "on_demand");
        assert_eq!(to_snake_case("VCPU"), "vcpu");
    }

    #[test]
    fn variants() {
        assert_eq!(variant_name("ON_DEMAND"), "OnDemand");
        assert_eq!(variant_name("VCPU"), "Vcpu");
        assert_eq!(variant_name("InstanceFleetUnits"), "InstanceFleetUnits");
        assert_eq!(variant_name("MICRO_SECONDS"), "MicroSeconds");
        assert_eq!(variant_name("us-east-1"), "UsEast1");
        assert_eq!(variant_name("2xlarge"), "Value2xlarge");
    }

    #[test]
    fn serde_names_expose_acronym_mismatches() {
        assert_eq!(serde_pascal_case("cluster_id"), "ClusterId");
        assert_eq!(serde_pascal_case("size_in_gb"), "SizeInGb");
        assert_ne!(serde_pascal_case(&to_snake_case("SizeInGB")), "SizeInGB");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(field_name("Type"), "r#type");
        assert_eq!(field_name("Name"), "name");
    }

    #[test]
    fn docs() {
        assert_eq!(clean_doc("The name."), "<p>The name.</p>");
        assert_eq!(
            clean_doc("<p>Adds a fleet.</p> <note> <p>Only 4.8.0.</p> </note> <p></p>"),
            "<p>Adds a fleet.</p> <note> <p>Only 4.8.0.</p> </note>"
        );
        assert_eq!(clean_doc("<p>a\n   b</p><p>  </p>"), "<p>a b</p>");
        assert_eq!(clean_doc("Ends in a note</note>"), "<p>Ends in a note</note>");
    }
}
