/// `(index + addend) % capacity` for `index < capacity` and
/// `addend <= capacity`, without overflowing near `usize::MAX`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    let room = capacity - addend;
    if index >= room {
        index - room
    } else {
        index + addend
    }
}

#[inline]
pub fn is_power_of_two(value: usize) -> bool {
    value != 0 && value & (value - 1) == 0
}
