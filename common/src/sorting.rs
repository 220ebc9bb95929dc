//! Column sorting for the document table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Name,
    Agency,
    DocumentType,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentSort {
    pub column: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

impl DocumentSort {
    /// Selects `column`. Each selection flips the direction; the first one
    /// sorts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        self.column = Some(column);
        self.direction = Some(self.direction.map_or(SortDirection::Ascending, SortDirection::flipped));
    }

    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column != Some(column) {
            return "";
        }
        match self.direction {
            Some(SortDirection::Ascending) => "▲",
            Some(SortDirection::Descending) => "▼",
            None => "",
        }
    }
}

/// Stable sort by the selected column. Missing values always go last.
pub fn sort_documents(docs: &mut [DocumentRecord], sort: &DocumentSort) {
    let (Some(column), Some(direction)) = (sort.column, sort.direction) else {
        return;
    };
    docs.sort_by(|a, b| match column {
        SortColumn::Name => compare_missing_last(a.name.as_deref(), b.name.as_deref(), direction, compare_text),
        SortColumn::Agency => compare_missing_last(a.agency.as_deref(), b.agency.as_deref(), direction, compare_text),
        SortColumn::DocumentType => {
            compare_missing_last(a.document_type.as_deref(), b.document_type.as_deref(), direction, compare_text)
        }
        SortColumn::Date => compare_missing_last(a.date.as_ref(), b.date.as_ref(), direction, |x, y| x.cmp(y)),
    });
}

fn compare_text(a: &&str, b: &&str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_missing_last<T>(a: Option<T>, b: Option<T>, direction: SortDirection, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => cmp(&a, &b),
            SortDirection::Descending => cmp(&b, &a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
