/// Fixed column widths for one rendered table.
///
/// Widths are minimums: a value wider than its column overflows and shifts
/// the rest of the row instead of being clipped. That matches the original
/// report format and is intended behavior, not a defect.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub time: usize,
    pub process: usize,
    pub event: usize,
    pub target: usize,
}

impl TableLayout {
    /// Combined width, used for the dashed header rule.
    pub const fn total(&self) -> usize {
        self.time + self.process + self.event + self.target
    }
}

/// Layout for the interactive console table.
pub const CONSOLE: TableLayout = TableLayout {
    time: 30,
    process: 40,
    event: 12,
    target: 50,
};

/// Layout for the persisted report file.
pub const FILE: TableLayout = TableLayout {
    time: 35,
    process: 60,
    event: 10,
    target: 190,
};
