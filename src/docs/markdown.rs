use super::{Field, Section, TypeInfo};

/// Separator between a paragraph and the next inside a table cell.
pub const PARAGRAPH_BREAK: &str = "<br><br>";

const UNKNOWN_TYPE: &str = "???";
const SECTION_SEPARATOR: &str = "\n\n\n";

/// Renders the reference for an ordered list of sections.
///
/// Each section becomes a level-3 heading, its description, and a table;
/// sections are separated by two blank lines.
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<String>>()
        .join(SECTION_SEPARATOR)
}

/// Renders one section.
///
/// The Description column is present when any field has description text
/// or an example; the Default column when any field has a default. Both
/// decisions cover every row of the section.
pub fn render_section(section: &Section) -> String {
    let mut blocks = vec![format!("### {}", section.name)];

    if let Some(description) = section
        .description
        .as_deref()
        .map(normalize_text)
        .filter(|text| !text.is_empty())
    {
        blocks.push(description);
    }

    if !section.fields.is_empty() {
        blocks.push(render_table(&section.fields));
    }

    blocks.join("\n\n")
}

fn render_table(fields: &[Field]) -> String {
    let with_description = fields.iter().any(Field::has_description);
    let with_default = fields.iter().any(|field| field.default.is_some());

    let mut header = vec!["Name", "Type"];
    if with_description {
        header.push("Description");
    }
    if with_default {
        header.push("Default");
    }

    let mut lines = vec![
        table_row(header.iter().copied().map(String::from)),
        table_row(header.iter().map(|_| "---".to_string())),
    ];

    lines.extend(fields.iter().map(|field| {
        let mut cells = vec![format!("`{}`", field.name), render_type(&field.type_info)];
        if with_description {
            cells.push(description_cell(field));
        }
        if with_default {
            cells.push(
                field
                    .default
                    .as_ref()
                    .map(|default| format!("`{default}`"))
                    .unwrap_or_default(),
            );
        }
        table_row(cells)
    }));

    lines.join("\n")
}

fn table_row(cells: impl IntoIterator<Item = String>) -> String {
    format!("| {} |", cells.into_iter().collect::<Vec<String>>().join(" | "))
}

fn description_cell(field: &Field) -> String {
    let description = field
        .description
        .as_deref()
        .map(normalize_text)
        .filter(|text| !text.is_empty());
    let example = field
        .example
        .as_ref()
        .map(|example| format!("Example: `{example}`"));

    description
        .into_iter()
        .chain(example)
        .collect::<Vec<String>>()
        .join(PARAGRAPH_BREAK)
}

/// Renders a type as the contents of a Type cell.
///
/// # Example
///
/// ```
/// use confdoc::docs::{TypeInfo, render_type};
///
/// let level = TypeInfo::Union(vec![
///     TypeInfo::Literal("\"debug\"".to_string()),
///     TypeInfo::Literal("\"info\"".to_string()),
/// ]);
/// assert_eq!(render_type(&level), "`\"debug\"` | `\"info\"`");
/// ```
pub fn render_type(info: &TypeInfo) -> String {
    match info {
        TypeInfo::Unknown => UNKNOWN_TYPE.to_string(),
        TypeInfo::Literal(value) | TypeInfo::Primitive(value) => format!("`{value}`"),
        TypeInfo::Object(name) => format!("[`{name}`](#{name})"),
        TypeInfo::Union(members) => members
            .iter()
            .map(render_type)
            .collect::<Vec<String>>()
            .join(" | "),
        TypeInfo::Array(items) => match items.as_ref() {
            TypeInfo::Union(_) => format!("({})[]", render_type(items)),
            element => format!("{}[]", render_type(element)),
        },
    }
}

/// Normalizes documentation text for a single markdown line.
///
/// Trims every line, turns each run of blank lines into [`PARAGRAPH_BREAK`]
/// and folds the remaining line breaks into a space.
pub fn normalize_text(text: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut lines = Vec::new();

    for line in text.lines().map(str::trim) {
        if !line.is_empty() {
            lines.push(line);
        } else if !lines.is_empty() {
            paragraphs.push(lines.join(" "));
            lines.clear();
        }
    }
    if !lines.is_empty() {
        paragraphs.push(lines.join(" "));
    }

    paragraphs.join(PARAGRAPH_BREAK)
}
