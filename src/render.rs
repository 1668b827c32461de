//! Plain-text rendering of items.
//!
//! Each field is written as `<field> has <value>` on its own line, in table
//! column order, and every item is followed by a blank line. NULL renders as
//! an empty value.

use std::io::{self, Write};

use crate::item::Item;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn write_item<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "id has {}", item.id)?;
    writeln!(out, "name has {}", item.name)?;
    match item.finish_in_days {
        Some(days) => writeln!(out, "finish_in_days has {days}")?,
        None => writeln!(out, "finish_in_days has ")?,
    }
    writeln!(out, "created has {}", item.created.format(CREATED_FORMAT))?;
    writeln!(out)
}

/// Write every item and return how many were written.
pub fn write_items<W, I>(out: &mut W, items: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Item>,
{
    let mut written = 0;
    for item in items {
        write_item(out, &item)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i64, name: &str, finish_in_days: Option<i64>) -> Item {
        Item {
            id,
            name: name.to_string(),
            finish_in_days,
            created: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(8, 5, 1)
                .unwrap(),
        }
    }

    #[test]
    fn null_renders_empty() {
        let mut out = Vec::new();
        write_item(&mut out, &item(1, "First Task", None)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id has 1\nname has First Task\nfinish_in_days has \ncreated has 2024-03-09 08:05:01\n\n"
        );
    }

    #[test]
    fn blank_line_after_each_item() {
        let mut out = Vec::new();
        let written = write_items(
            &mut out,
            vec![item(1, "First Task", None), item(2, "Second Task", Some(3))],
        )
        .unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        let blocks: Vec<_> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].contains("finish_in_days has 3"));
        assert!(blocks[1].starts_with("id has 2\nname has Second Task"));
    }
}
