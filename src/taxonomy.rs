//! The dialogue-annotation taxonomy and its Label Studio label config.

use std::fmt::{self, Write};

use serde::Serialize;

/// A labelled category; leaves have no children.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    #[serde(skip_serializing_if = "no_children")]
    pub children: &'static [Choice],
}

impl Choice {
    pub const fn leaf(value: &'static str) -> Self {
        Choice {
            value,
            children: &[],
        }
    }

    pub const fn branch(value: &'static str, children: &'static [Choice]) -> Self {
        Choice { value, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn no_children(children: &&[Choice]) -> bool {
    children.is_empty()
}

const YES_NO: &[Choice] = &[Choice::leaf("Yes"), Choice::leaf("No")];

const MEDIA_FORMAT: &[Choice] = &[
    Choice::leaf("Natural language"),
    Choice::leaf("Code"),
    Choice::leaf("Math / symbols"),
    Choice::leaf("Formatted enumeration/itemization (bullets/lists)"),
    Choice::leaf("Charts/Graphs"),
    Choice::leaf("Images"),
    Choice::leaf("Audio"),
    Choice::leaf("URLs"),
    Choice::leaf("Other"),
];

const ANSWER_FORM: &[Choice] = &[
    Choice::leaf("Refusal to answer (with explanation)"),
    Choice::leaf("Refusal to answer (without explanation)"),
    Choice::leaf("Partial refusal, expressing uncertainty, disclaiming"),
    Choice::leaf("Direct Answer / Open Generation"),
    Choice::leaf("Continuation of Input"),
];

const MULTI_TURN_RELATIONSHIP: &[Choice] = &[
    Choice::leaf("First request"),
    Choice::leaf("Unrelated request"),
    Choice::leaf("Same task, new request"),
    Choice::leaf("Repeat request"),
    Choice::leaf("Related request"),
];

const TOPICS: &[Choice] = &[
    Choice::leaf("Math & Sciences"),
    Choice::leaf("History"),
    Choice::leaf("Geography"),
    Choice::leaf("Religion & Spirituality"),
    Choice::leaf("Literature & Writing"),
    Choice::leaf("Psychology, Philosophy & Human Behavior"),
    Choice::leaf("Linguistics & Languages"),
    Choice::leaf("Technology, Software & Computing"),
    Choice::leaf("Engineering & Infrastructure"),
    Choice::leaf("Nature & Environment"),
    Choice::leaf("Transportation"),
    Choice::leaf("Travel & Tourism"),
    Choice::leaf("Lifestyle"),
    Choice::leaf("Food & Dining"),
    Choice::leaf("Art & Design"),
    Choice::leaf("Fashion & Beauty"),
    Choice::leaf("Culture"),
    Choice::leaf("Entertainment, Hobbies & Leisure"),
    Choice::leaf("Sports"),
    Choice::leaf("Social Issues & Movements"),
    Choice::leaf("Economics"),
    Choice::leaf("Health & Medicine"),
    Choice::leaf("Business & Finances"),
    Choice::leaf("Employment & Hiring"),
    Choice::leaf("Education"),
    Choice::leaf("News & Current Affairs"),
    Choice::leaf("Interpersonal Relationships & Communication"),
    Choice::leaf("Adult & Illicit Content"),
    Choice::leaf("Law, Criminal Justice, Law Enforcement"),
    Choice::leaf("Politics & Elections"),
    Choice::leaf("Insurance & Social Scoring"),
    Choice::leaf("Housing"),
    Choice::leaf("Immigration / Migration"),
    Choice::leaf("Other"),
];

const RESTRICTED_USE_FLAGS: &[Choice] = &[
    Choice::leaf("Inciting violence, hateful or other harmful behavior: harassment & bullying"),
    Choice::leaf("Inciting violence, hateful or other harmful behavior: physical harm"),
    Choice::leaf("Inciting violence, hateful or other harmful behavior: self-harm"),
    Choice::leaf("Criminal planning or other suspected illegal activity not listed elsewhere"),
    Choice::leaf("Cyberattacks"),
    Choice::leaf("Weapons & drugs"),
    Choice::leaf("CBRN-related outputs"),
    Choice::leaf("Sexually explicit content: real person"),
    Choice::leaf("Sexually explicit content: fictitious person"),
    Choice::leaf("Sexually explicit content: Request/discussion of CSAM"),
    Choice::leaf("Sexually explicit content: Other"),
    Choice::leaf("Impersonation attempts"),
    Choice::leaf("Misinformation"),
    Choice::leaf("Privacy concerns: Possible identifiable information"),
    Choice::leaf("Privacy concerns: Possible sensitive information"),
    Choice::leaf("Generating spam"),
    Choice::leaf("Generating defamatory content"),
    Choice::leaf("Output misrepresentation: disclaiming AI use"),
    Choice::leaf("Output misrepresentation: Automated decision-making without disclosure"),
    Choice::leaf("Discriminatory practices"),
    Choice::leaf("Possible presence of copyrighted, unreferenced material"),
    Choice::leaf("Other"),
];

pub static TAXONOMY: &[Choice] = &[
    Choice::branch("Self-Disclosure", YES_NO),
    Choice::branch("Media Format", MEDIA_FORMAT),
    Choice::branch("Anthropomorphization", YES_NO),
    Choice::branch("Answer Form", ANSWER_FORM),
    Choice::branch("Multi-turn Relationship", MULTI_TURN_RELATIONSHIP),
    Choice::branch("Topics", TOPICS),
    Choice::branch("Restricted Use Flags", RESTRICTED_USE_FLAGS),
];

/// A `<View>` that shows a dialogue transcript next to a taxonomy control over it.
#[derive(Debug, Clone, Copy)]
pub struct LabelConfig {
    /// Task data key holding the conversation turns.
    pub data_key: &'static str,
    pub taxonomy_name: &'static str,
    pub choices: &'static [Choice],
}

pub const DIALOGUE_TAXONOMY: LabelConfig = LabelConfig {
    data_key: "conversation",
    taxonomy_name: "taxonomy",
    choices: TAXONOMY,
};

impl LabelConfig {
    /// Renders the Label Studio XML config.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "<View>")?;
        writeln!(
            out,
            "    <Paragraphs value=\"${key}\" name=\"{key}\" layout=\"dialogue\" textKey=\"text\" nameKey=\"role\"/>",
            key = escape_attr(self.data_key)
        )?;
        writeln!(
            out,
            "    <Taxonomy name=\"{}\" toName=\"{}\">",
            escape_attr(self.taxonomy_name),
            escape_attr(self.data_key)
        )?;
        for choice in self.choices {
            write_choice(out, choice, 2)?;
        }
        writeln!(out, "    </Taxonomy>")?;
        writeln!(out, "</View>")
    }
}

impl fmt::Display for LabelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_xml(f)
    }
}

fn write_choice(out: &mut impl Write, choice: &Choice, depth: usize) -> fmt::Result {
    let indent = "    ".repeat(depth);
    if choice.is_leaf() {
        return writeln!(out, "{indent}<Choice value=\"{}\" />", escape_attr(choice.value));
    }
    writeln!(out, "{indent}<Choice value=\"{}\">", escape_attr(choice.value))?;
    for child in choice.children {
        write_choice(out, child, depth + 1)?;
    }
    writeln!(out, "{indent}</Choice>")
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_categories() {
        let top: Vec<&str> = DIALOGUE_TAXONOMY.choices.iter().map(|c| c.value).collect();
        assert_eq!(
            top,
            [
                "Self-Disclosure",
                "Media Format",
                "Anthropomorphization",
                "Answer Form",
                "Multi-turn Relationship",
                "Topics",
                "Restricted Use Flags",
            ]
        );
    }

    #[test]
    fn test_category_sizes() {
        let sizes: Vec<(&str, usize)> = TAXONOMY
            .iter()
            .map(|c| (c.value, c.children.len()))
            .collect();
        assert_eq!(
            sizes,
            [
                ("Self-Disclosure", 2),
                ("Media Format", 9),
                ("Anthropomorphization", 2),
                ("Answer Form", 5),
                ("Multi-turn Relationship", 5),
                ("Topics", 34),
                ("Restricted Use Flags", 22),
            ]
        );
        assert!(TAXONOMY
            .iter()
            .flat_map(|c| c.children)
            .all(Choice::is_leaf));
    }

    #[test]
    fn test_category_lookup() {
        let topics = TAXONOMY.iter().find(|c| c.value == "Topics").unwrap();
        let has = |value: &str| topics.children.iter().any(|c| c.value == value);
        assert!(has("Math & Sciences"));
        assert!(!has("Math &amp; Sciences"));
        assert!(!TAXONOMY.iter().any(|c| c.value == "Sentiment"));
    }

    #[test]
    fn test_rendering_is_stable() {
        assert_eq!(DIALOGUE_TAXONOMY.to_xml(), DIALOGUE_TAXONOMY.to_xml());
        assert_eq!(DIALOGUE_TAXONOMY.to_string(), DIALOGUE_TAXONOMY.to_xml());
    }

    #[test]
    fn test_xml_structure() {
        let xml = DIALOGUE_TAXONOMY.to_xml();
        assert!(xml.starts_with("<View>\n"));
        assert!(xml.ends_with("</View>\n"));
        assert!(xml.contains(
            "<Paragraphs value=\"$conversation\" name=\"conversation\" layout=\"dialogue\" textKey=\"text\" nameKey=\"role\"/>"
        ));
        assert!(xml.contains("<Taxonomy name=\"taxonomy\" toName=\"conversation\">"));
        assert!(xml.contains("        <Choice value=\"Self-Disclosure\">\n            <Choice value=\"Yes\" />"));
        assert_eq!(xml.matches("<Choice value=").count(), 7 + 2 + 9 + 2 + 5 + 5 + 34 + 22);
        assert_eq!(xml.matches("</Choice>").count(), 7);
    }

    #[test]
    fn test_ampersands_are_escaped() {
        let xml = DIALOGUE_TAXONOMY.to_xml();
        assert!(xml.contains("<Choice value=\"Math &amp; Sciences\" />"));
        assert!(!xml.contains("Math & Sciences"));
        assert_eq!(escape_attr("a<b>\"c\"'d'"), "a&lt;b&gt;&quot;c&quot;&apos;d&apos;");
    }

    #[test]
    fn test_serializes_as_tree() {
        let json = serde_json::to_value(TAXONOMY).unwrap();
        assert_eq!(json[0]["value"], "Self-Disclosure");
        assert_eq!(json[0]["children"][1]["value"], "No");
        assert!(json[0]["children"][1].get("children").is_none());
        assert_eq!(json[5]["children"][0]["value"], "Math & Sciences");
    }
}
