use serde::{Deserialize, Serialize};

/// Colors assigned to roster options, cycled in roster order.
pub const REP_PALETTE: &[&str] = &[
    "#4B5563", "#1D4ED8", "#059669", "#D97706", "#DC2626", "#7C3AED", "#0891B2", "#65A30D",
];

/// One option of a `SELECT` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub color: String,
    pub position: usize,
}

/// How the stored `value` of an option is derived from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionValuePolicy {
    /// `"David Edwards"` is stored as `"DAVID_EDWARDS"`.
    #[default]
    ScreamingSnake,
    /// The label is stored verbatim.
    NaturalName,
}

impl OptionValuePolicy {
    pub fn value_for(&self, label: &str) -> String {
        match self {
            OptionValuePolicy::ScreamingSnake => normalize_option_value(label),
            OptionValuePolicy::NaturalName => label.to_string(),
        }
    }
}

/// Normalize a display name to `[A-Z0-9_]`.
///
/// Characters other than ASCII alphanumerics and whitespace are dropped,
/// whitespace runs collapse to one underscore and the ends are trimmed.
pub fn normalize_option_value(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_uppercase()
}

/// Build a select option list from labels in roster order.
///
/// Blank labels are skipped but still advance the palette index, so a
/// member's color depends on its roster position, not its sorted position.
/// The result is sorted by label and positions are renumbered from zero.
pub fn build_options<I, S>(
    labels: I,
    palette: &[&str],
    policy: OptionValuePolicy,
) -> Vec<SelectOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options: Vec<SelectOption> = vec![];

    for (index, label) in labels.into_iter().enumerate() {
        let label = label.as_ref().trim();
        if label.is_empty() {
            continue;
        }

        let color = if palette.is_empty() {
            String::new()
        } else {
            palette[index % palette.len()].to_string()
        };

        options.push(SelectOption {
            label: label.to_string(),
            value: policy.value_for(label),
            color,
            position: index,
        });
    }

    options.sort_by(|a, b| a.label.cmp(&b.label));
    for (position, option) in options.iter_mut().enumerate() {
        option.position = position;
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = vec![];
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(normalize_option_value("  david   edwards "), "DAVID_EDWARDS");
        assert_eq!(normalize_option_value("Mary-Jane O'Neil"), "MARYJANE_ONEIL");
        assert_eq!(normalize_option_value("Agent\t007"), "AGENT_007");
        assert_eq!(normalize_option_value("   "), "");
    }

    #[test]
    fn normalized_values_use_restricted_alphabet() {
        for name in ["José  Álvarez", " a.b@c d ", "Zoë\n\nQ", "x_y z", "ﾃｽﾄ name"] {
            let value = normalize_option_value(name);
            assert!(
                value
                    .chars()
                    .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_'),
                "{name:?} -> {value:?}"
            );
            assert!(!value.contains("__"), "{value:?}");
            assert!(!value.starts_with('_') && !value.ends_with('_'), "{value:?}");
        }
    }

    #[test]
    fn sorted_with_contiguous_positions_for_any_order() {
        let labels = ["Dana Scott", "alice Wong", "Bob Stone", "Carl Ito"];
        let expected = vec!["Bob Stone", "Carl Ito", "Dana Scott", "alice Wong"];

        for order in permutations(&labels) {
            let options = build_options(&order, REP_PALETTE, OptionValuePolicy::ScreamingSnake);
            let sorted: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
            assert_eq!(sorted, expected);
            let positions: Vec<usize> = options.iter().map(|o| o.position).collect();
            assert_eq!(positions, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn colors_cycle_by_roster_order() {
        let palette = ["red", "green", "blue"];
        let labels = ["Gina", "Fred", "Eve", "Dan", "Cat", "Bea", "Al"];

        let options = build_options(&labels, &palette, OptionValuePolicy::NaturalName);

        for (index, label) in labels.iter().enumerate() {
            let option = options
                .iter()
                .find(|o| o.label == *label)
                .expect("option for label");
            assert_eq!(option.color, palette[index % palette.len()]);
        }
        assert_eq!(options[0].label, "Al");
        assert_eq!(options[0].color, "red");
    }

    #[test]
    fn blank_labels_are_skipped_but_keep_their_color_slot() {
        let palette = ["red", "green", "blue"];
        let options =
            build_options(["Zed", " ", "Amy"], &palette, OptionValuePolicy::ScreamingSnake);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Amy");
        assert_eq!(options[0].value, "AMY");
        assert_eq!(options[0].color, "blue");
        assert_eq!(options[1].color, "red");
    }

    #[test]
    fn natural_policy_keeps_label() {
        let options = build_options(["David Edwards"], REP_PALETTE, OptionValuePolicy::NaturalName);
        assert_eq!(options[0].value, "David Edwards");
    }
}
