use calllog_core::dto::{CallDetailDto, CallRowDto, CallsViewDto};
use std::fmt;

/// Human listing: one block per day, then a pagination footer.
pub(crate) struct ViewText<'a>(pub(crate) &'a CallsViewDto);

pub(crate) struct DetailText<'a>(pub(crate) &'a CallDetailDto);

struct RowText<'a>(&'a CallRowDto);

impl fmt::Display for ViewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        if view.groups.is_empty() {
            writeln!(f, "no calls")?;
        }

        for group in &view.groups {
            writeln!(f, "{}:", group.label)?;
            for row in &group.calls {
                writeln!(f, "  {}", RowText(row))?;
            }
        }

        let p = &view.pagination;
        writeln!(
            f,
            "page {}/{}  ({} per page, {} total)",
            p.active_page,
            p.page_count.max(1),
            p.page_size,
            p.total_count
        )
    }
}

impl fmt::Display for DetailText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.0;
        let row = &detail.row;
        writeln!(f, "{}", RowText(row))?;
        writeln!(f, "  id: {}", row.id)?;
        writeln!(f, "  from: {}", detail.from)?;
        writeln!(f, "  to: {}", detail.to)?;
        if let Some(via) = &row.via {
            writeln!(f, "  via: {via}")?;
        }
        if detail.is_archived {
            writeln!(f, "  archived")?;
        }
        for note in &detail.notes {
            if !note.content.trim().is_empty() {
                writeln!(f, "  note: {}", note.content)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for RowText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.0;
        let icon = row.icon.map(|icon| icon.glyph()).unwrap_or("?");
        let title = row.title.as_deref().unwrap_or(&row.call_type);
        write!(
            f,
            "{icon} {title}  {}  {}  {}",
            row.subtitle, row.duration, row.timestamp
        )?;
        if !row.notes_summary.is_empty() {
            write!(f, "  [{}]", row.notes_summary)?;
        }
        Ok(())
    }
}
