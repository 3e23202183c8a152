//! Markdown and HTML export documents.
//!
//! Both formats share one layout: a heading per table (`name` or
//! `name(comment)`) followed by a six-column table of its columns. The
//! templates live in `templates/` and are compiled into the crate by askama.

use crate::Result;
use crate::error::CadillacError;
use crate::models::{Column, TableStructure};
use askama::Template;

/// Export document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Markdown,
    Html,
}

impl DocumentFormat {
    /// `html` when `html` is set, Markdown otherwise.
    pub fn from_html_flag(html: bool) -> Self {
        if html { Self::Html } else { Self::Markdown }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "Markdown"),
            Self::Html => write!(f, "HTML"),
        }
    }
}

/// One table section as the templates see it.
struct Section {
    title: String,
    rows: Vec<ColumnRow>,
}

struct ColumnRow {
    name: String,
    column_type: String,
    default_value: String,
    nullable: String,
    extra: String,
    comment: String,
}

impl ColumnRow {
    fn new(column: &Column, escape: fn(&str) -> String) -> Self {
        Self {
            name: escape(&column.name),
            column_type: escape(&column.column_type),
            default_value: escape(column.default_label()),
            nullable: column.nullable_label().to_string(),
            extra: escape(&column.extra),
            comment: escape(&column.comment),
        }
    }
}

#[derive(Template)]
#[template(path = "export.md", escape = "none")]
struct MarkdownDocument<'a> {
    database: &'a str,
    sections: Vec<Section>,
}

#[derive(Template)]
#[template(path = "export.html")]
struct HtmlDocument<'a> {
    database: &'a str,
    sections: Vec<Section>,
}

/// Escapes a value for use inside a Markdown table cell.
fn escape_markdown_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}

fn sections(tables: &[TableStructure], escape: fn(&str) -> String) -> Vec<Section> {
    tables
        .iter()
        .map(|structure| Section {
            title: structure.table.title(),
            rows: structure
                .columns
                .iter()
                .map(|column| ColumnRow::new(column, escape))
                .collect(),
        })
        .collect()
}

/// Renders the export document for `tables`, in the given order.
///
/// # Errors
/// Returns `Render` if the template fails to render.
pub fn render_document(
    format: DocumentFormat,
    database: &str,
    tables: &[TableStructure],
) -> Result<String> {
    let rendered = match format {
        DocumentFormat::Markdown => MarkdownDocument {
            database,
            sections: sections(tables, escape_markdown_cell),
        }
        .render(),
        // askama's HTML escaper handles the cells
        DocumentFormat::Html => HtmlDocument {
            database,
            sections: sections(tables, str::to_string),
        }
        .render(),
    };

    rendered.map_err(|e| CadillacError::render(format!("{} export", format), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Table;

    fn column(name: &str, column_type: &str) -> Column {
        Column {
            name: name.to_string(),
            column_type: column_type.to_string(),
            default_value: None,
            is_nullable: false,
            extra: String::new(),
            comment: String::new(),
        }
    }

    fn sample_tables() -> Vec<TableStructure> {
        let mut id = column("id", "bigint unsigned");
        id.extra = "auto_increment".to_string();
        let mut email = column("email", "varchar(255)");
        email.is_nullable = true;
        email.comment = "Login | contact address".to_string();

        vec![
            TableStructure {
                table: Table::new("users", "User accounts"),
                columns: vec![id, email],
            },
            TableStructure {
                table: Table::new("posts", ""),
                columns: vec![column("id", "int"), column("title", "varchar(120)")],
            },
        ]
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(DocumentFormat::from_html_flag(false).extension(), "md");
        assert_eq!(DocumentFormat::from_html_flag(true).extension(), "html");
    }

    #[test]
    fn test_markdown_document() {
        let doc = render_document(DocumentFormat::Markdown, "shop", &sample_tables()).unwrap();

        assert!(doc.starts_with("# shop"));
        assert_eq!(doc.matches("\n## ").count(), 2);
        assert!(doc.contains("## users(User accounts)"));
        assert!(doc.contains("## posts\n"));
        assert!(doc.contains("| Column | Type | Default | Nullable | Extra | Comment |"));
        assert!(doc.contains("| id | bigint unsigned |  | NO | auto_increment |  |"));
        assert!(doc.contains("| email | varchar(255) |  | YES |  | Login \\| contact address |"));

        // Sections keep the order they were read in
        let users = doc.find("## users").unwrap();
        let posts = doc.find("## posts").unwrap();
        assert!(users < posts);
    }

    #[test]
    fn test_html_document() {
        let mut tables = sample_tables();
        tables[1].table.comment = "<draft> & published".to_string();
        tables[1].columns[1].comment = "it's \"quoted\"".to_string();

        let doc = render_document(DocumentFormat::Html, "shop", &tables).unwrap();

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert_eq!(doc.matches("<h2>").count(), 2);
        assert!(doc.contains("<h2>users(User accounts)</h2>"));
        assert!(doc.contains("<td>bigint unsigned</td>"));

        // askama emits numeric entities
        assert!(doc.contains("<h2>posts(&#60;draft&#62; &#38; published)</h2>"));
        assert!(doc.contains("<td>it&#39;s &#34;quoted&#34;</td>"));
        assert!(!doc.contains("<draft>"));
        assert!(!doc.contains(" & "));
        assert!(!doc.contains("it's"));
    }

    #[test]
    fn test_empty_document() {
        let doc = render_document(DocumentFormat::Markdown, "shop", &[]).unwrap();

        assert!(doc.starts_with("# shop"));
        assert!(!doc.contains("## "));
    }

    #[test]
    fn test_escape_markdown_cell() {
        assert_eq!(escape_markdown_cell("a|b"), "a\\|b");
        assert_eq!(escape_markdown_cell("line1\r\nline2\nline3"), "line1<br>line2<br>line3");
    }
}
