use anyhow::{Context, Result};
use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTagChild, Table, TableCellContent, TableChild, TableRowChild,
};

/// Extracts body text, one line per paragraph. Paragraphs inside tables are
/// included in row order, as is text inside hyperlinks, tracked insertions and
/// content controls. Tracked deletions are skipped.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let document = read_docx(bytes).context("DOCX could not be parsed")?;

    let mut text = String::new();
    for child in &document.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            _ => {}
        }
    }

    Ok(text)
}

fn push_paragraph(text: &mut String, paragraph: &Paragraph) {
    push_paragraph_children(text, &paragraph.children);
    text.push('\n');
}

fn push_paragraph_children(text: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(text, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(text, &link.children),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(text, run);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(tag) => {
                for tag_child in &tag.children {
                    match tag_child {
                        StructuredDataTagChild::Run(run) => push_run(text, run),
                        StructuredDataTagChild::Paragraph(p) => push_paragraph(text, p),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(text: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            _ => {}
        }
    }
}

fn push_table(text: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(text, p),
                    TableCellContent::Table(t) => push_table(text, t),
                    _ => {}
                }
            }
        }
    }
}
