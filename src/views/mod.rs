//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! placed into markup.

use crate::{dto::NoteRequest, models::Note};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title)
    )
}

fn error_block(error: Option<&str>) -> String {
    error.map_or_else(String::new, |message| {
        format!(
            "  <p class=\"error\" role=\"alert\">{}</p>\n",
            escape(message)
        )
    })
}

fn note_row(note: &Note) -> String {
    format!(
        r#"    <tr>
      <td>{id}</td>
      <td>{title}</td>
      <td>{content}</td>
      <td>{status}</td>
      <td>{created_at}</td>
      <td>
        <a href="/updateNote?noteId={id}">Edit</a>
        <form action="/delete" method="post">
          <input type="hidden" name="noteId" value="{id}">
          <button type="submit">Delete</button>
        </form>
      </td>
    </tr>
"#,
        id = note.id,
        title = escape(&note.title),
        content = escape(&note.content),
        status = escape(&note.status),
        created_at = note.created_at.format(TIME_FORMAT),
    )
}

/// The note list together with the form for adding a note.
pub fn index_page(notes: &[Note], error: Option<&str>) -> String {
    let mut body = String::from("  <h1>Notes</h1>\n");
    body.push_str(&error_block(error));
    body.push_str(
        r#"  <form action="/add" method="post">
    <input type="text" name="noteTitle" placeholder="Title">
    <input type="text" name="noteContent" placeholder="Content">
    <input type="text" name="noteStatus" placeholder="Status">
    <button type="submit">Add note</button>
  </form>
"#,
    );

    if notes.is_empty() {
        body.push_str("  <p>No notes yet.</p>\n");
    } else {
        body.push_str(
            "  <table>\n    <tr><th>Id</th><th>Title</th><th>Content</th><th>Status</th><th>Created</th><th></th></tr>\n",
        );
        for note in notes {
            body.push_str(&note_row(note));
        }
        body.push_str("  </table>\n");
    }

    layout("Notes", &body)
}

/// Edit form for the note with `id`, pre-filled with `fields`.
pub fn edit_page(id: i64, fields: &NoteRequest, error: Option<&str>) -> String {
    let mut body = format!("  <h1>Edit note {id}</h1>\n");
    body.push_str(&error_block(error));
    body.push_str(&format!(
        r#"  <form action="/update" method="post">
    <input type="hidden" name="noteId" value="{id}">
    <input type="text" name="noteTitle" value="{title}">
    <input type="text" name="noteContent" value="{content}">
    <input type="text" name="noteStatus" value="{status}">
    <button type="submit">Save</button>
  </form>
  <a href="/">Back to notes</a>
"#,
        title = escape(&fields.title),
        content = escape(&fields.content),
        status = escape(&fields.status),
    ));

    layout(&format!("Edit note {id}"), &body)
}

/// A page with a heading and a single message, used for errors.
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "  <h1>{}</h1>\n  <p>{}</p>\n  <a href=\"/\">Back to notes</a>\n",
        escape(title),
        escape(message)
    );
    layout(title, &body)
}
