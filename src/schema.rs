/// Typed entity schemas.
///
/// Each entity declares an enum of its known fields and implements [`Record`]
/// over it. Column accessors are enum variants rather than free-form strings,
/// so a typo in a column or filter configuration fails to compile instead of
/// silently matching nothing.

use std::fmt::Debug;

use crate::value::Value;

/// A displayable record with a fixed set of typed fields.
pub trait Record {
    type Field: Copy + Eq + Debug;

    /// Returns the value of one field. Optional fields yield [`Value::Null`].
    fn get(&self, field: Self::Field) -> Value;
}

/// How one field of a record is labeled, sorted, and rendered in a table.
///
/// # Examples
///
/// ```
/// use apotik_admin::entity::{Product, ProductField};
/// use apotik_admin::schema::ColumnDef;
///
/// let columns = vec![
///     ColumnDef::<Product>::new(ProductField::Id, "ID"),
///     ColumnDef::<Product>::new(ProductField::Name, "Nama"),
/// ];
/// assert!(columns[0].sortable);
/// ```
pub struct ColumnDef<R: Record> {
    pub field: R::Field,
    pub label: &'static str,
    pub sortable: bool,
    /// Overrides the default `Value` rendering for this cell.
    pub render: Option<fn(&R) -> String>,
}

impl<R: Record> ColumnDef<R> {
    pub fn new(field: R::Field, label: &'static str) -> Self {
        ColumnDef {
            field,
            label,
            sortable: true,
            render: None,
        }
    }

    pub fn with_render(mut self, render: fn(&R) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Cell text for one row: the custom renderer when present, otherwise the
    /// field value's display form.
    pub fn cell_text(&self, row: &R) -> String {
        match self.render {
            Some(render) => render(row),
            None => row.get(self.field).to_string(),
        }
    }
}

impl<R: Record> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Record> Copy for ColumnDef<R> {}
