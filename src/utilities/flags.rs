//! Bit flag matching

/// Returns true if any of `flags` are set in `value` (loose match).
pub const fn is_any_flag_set(value: u64, flags: u64) -> bool {
    (value & flags) != 0
}

/// Returns true if all of `flags` are set in `value` (strict match).
pub const fn is_flag_set(value: u64, flags: u64) -> bool {
    (value & flags) == flags
}
