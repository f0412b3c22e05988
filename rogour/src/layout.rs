use std::ops::Range;

/// Men per side.
pub const PIECES_PER_SIDE: u8 = 7;

/// Raw-slot count of a board, including the two borne-off counters.
pub const BOARD_SLOTS: usize = 22;

/// Slot holding Green's borne-off count.
pub const GREEN_OFF_SLOT: usize = 14;
/// Slot holding Red's borne-off count.
pub const RED_OFF_SLOT: usize = 21;

/// Green's private cells in route order: entry cells, then exit cells.
pub const GREEN_SAFE_CELLS: [usize; 6] = [0, 1, 2, 3, 12, 13];

/// The shared middle strip, contested by both players.
pub const STRIP_CELLS: Range<usize> = 4..12;

/// Red's private entry cells, in route order.
pub const RED_ENTRY_CELLS: [usize; 4] = [15, 16, 17, 18];
/// Red's private exit cells, in route order.
pub const RED_EXIT_CELLS: [usize; 2] = [19, 20];
