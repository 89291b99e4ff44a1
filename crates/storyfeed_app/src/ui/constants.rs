/// Story table column labels, in render order.
pub const COLUMN_LABELS: [&str; 4] = ["Title", "Author", "Comments", "Points"];

/// Column widths as percentages, following the original layout proportions.
pub const COLUMN_WIDTHS: [u16; 4] = [45, 25, 15, 15];
